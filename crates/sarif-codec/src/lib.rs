//! Reading and writing SARIF 2.1.0 documents.
//!
//! Decoding parses JSON into [`sarif_types::Log`] and rejects any version
//! other than [`sarif_types::SARIF_VERSION`]. Encoding defaults the version
//! and schema URI on a copy of the log, validates, and serializes.
//!
//! Nothing beyond the top-level version is validated.

#![forbid(unsafe_code)]

mod decode;
mod encode;
mod error;
mod validate;

pub use decode::{decode, decode_file};
pub use encode::{
    EncodeFormat, EncodeOptions, encode, encode_file, encode_file_with, encode_with,
};
pub use error::CodecError;
pub use validate::{normalize, validate_version};
