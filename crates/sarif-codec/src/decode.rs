use crate::{CodecError, validate_version};
use camino::Utf8Path;
use sarif_types::Log;

/// Parses a SARIF document and checks its version.
///
/// No log is returned when the bytes are malformed or the version is not
/// [`sarif_types::SARIF_VERSION`].
pub fn decode(bytes: &[u8]) -> Result<Log, CodecError> {
    let log: Log = serde_json::from_slice(bytes).map_err(CodecError::Parse)?;
    validate_version(&log.version)?;
    Ok(log)
}

/// Reads `path` in full and [`decode`]s it.
pub fn decode_file(path: impl AsRef<Utf8Path>) -> Result<Log, CodecError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| CodecError::io("read", path, e))?;
    decode(&bytes)
}
