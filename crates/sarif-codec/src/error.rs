use camino::Utf8PathBuf;
use sarif_types::SARIF_VERSION;

/// Everything that can go wrong while decoding or encoding a document.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// Opening, reading, or writing `path` failed.
    #[error("failed to {action} {path}")]
    Io {
        action: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input is not JSON, or its shape does not match the document model.
    #[error("malformed SARIF document")]
    Parse(#[source] serde_json::Error),

    #[error("failed to serialize SARIF document")]
    Serialize(#[source] serde_json::Error),

    /// The document declares a version other than the supported one.
    #[error("unsupported SARIF version {found:?}, expected {}", SARIF_VERSION)]
    UnsupportedVersion { found: String },
}

impl CodecError {
    pub(crate) fn io(
        action: &'static str,
        path: impl Into<Utf8PathBuf>,
        source: std::io::Error,
    ) -> Self {
        CodecError::Io {
            action,
            path: path.into(),
            source,
        }
    }
}
