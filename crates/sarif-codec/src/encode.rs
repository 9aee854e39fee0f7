use crate::{CodecError, normalize};
use camino::Utf8Path;
use sarif_types::Log;

/// JSON layout of encoded documents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EncodeFormat {
    /// Two-space indentation with a trailing newline.
    #[default]
    Pretty,
    /// Single line, no trailing newline.
    Compact,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EncodeOptions {
    pub format: EncodeFormat,
}

impl EncodeOptions {
    pub fn compact() -> Self {
        Self {
            format: EncodeFormat::Compact,
        }
    }
}

/// Encodes `log` with [`EncodeOptions::default`].
pub fn encode(log: &Log) -> Result<Vec<u8>, CodecError> {
    encode_with(log, &EncodeOptions::default())
}

/// Validates and defaults a copy of `log` (see [`normalize`]) and serializes
/// it. `log` itself is left untouched.
pub fn encode_with(log: &Log, options: &EncodeOptions) -> Result<Vec<u8>, CodecError> {
    let log = normalize(log)?;
    match options.format {
        EncodeFormat::Pretty => {
            let mut bytes = serde_json::to_vec_pretty(&log).map_err(CodecError::Serialize)?;
            bytes.push(b'\n');
            Ok(bytes)
        }
        EncodeFormat::Compact => serde_json::to_vec(&log).map_err(CodecError::Serialize),
    }
}

/// Encodes `log` with [`EncodeOptions::default`] and writes it to `path`.
pub fn encode_file(log: &Log, path: impl AsRef<Utf8Path>) -> Result<(), CodecError> {
    encode_file_with(log, path, &EncodeOptions::default())
}

/// Encodes `log` and writes it to `path`, replacing any existing file.
///
/// Nothing is written when validation fails.
pub fn encode_file_with(
    log: &Log,
    path: impl AsRef<Utf8Path>,
    options: &EncodeOptions,
) -> Result<(), CodecError> {
    let path = path.as_ref();
    let bytes = encode_with(log, options)?;
    std::fs::write(path, bytes).map_err(|e| CodecError::io("write", path, e))
}
