//! SARIF 2.1.0 document model.
//!
//! This crate is intentionally boring:
//! - data types mirroring the subset of the SARIF format we read and write
//! - rule lookup by identifier
//! - rendering of physical locations as `base/uri:line:col,line:col`
//!
//! It does no IO and no validation; see `sarif-codec` for that.

#![forbid(unsafe_code)]

pub mod flow;
pub mod index;
pub mod location;
pub mod model;
pub mod uri;

#[cfg(test)]
mod proptest;

pub use flow::{CodeFlow, Frame, Stack, ThreadFlow, ThreadFlowLocation};
pub use index::RuleIndex;
pub use location::{ArtifactLocation, Location, PhysicalLocation, Region};
pub use model::{Description, Driver, Log, Properties, Result, Rule, Run, Tool};

/// The only SARIF version this crate reads and writes.
pub const SARIF_VERSION: &str = "2.1.0";

/// JSON schema describing [`SARIF_VERSION`] documents.
pub const SARIF_SCHEMA_URI: &str =
    "https://docs.oasis-open.org/sarif/sarif/v2.1.0/errata01/os/schemas/sarif-schema-2.1.0.json";
