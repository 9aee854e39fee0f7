use crate::CodecError;
use sarif_types::{Log, SARIF_SCHEMA_URI, SARIF_VERSION};

/// Accepts exactly [`SARIF_VERSION`]; anything else, empty included, is an
/// [`CodecError::UnsupportedVersion`].
pub fn validate_version(version: &str) -> Result<(), CodecError> {
    if version == SARIF_VERSION {
        Ok(())
    } else {
        Err(CodecError::UnsupportedVersion {
            found: version.to_string(),
        })
    }
}

/// Returns a copy of `log` ready to be written.
///
/// An empty version becomes [`SARIF_VERSION`] and an absent or empty schema
/// becomes [`SARIF_SCHEMA_URI`]. A caller-supplied schema is kept as is. No
/// other field is touched.
pub fn normalize(log: &Log) -> Result<Log, CodecError> {
    let mut log = log.clone();

    if log.version.is_empty() {
        log.version = SARIF_VERSION.to_string();
    }
    validate_version(&log.version)?;

    if log.schema.as_deref().is_none_or(str::is_empty) {
        log.schema = Some(SARIF_SCHEMA_URI.to_string());
    }

    Ok(log)
}
