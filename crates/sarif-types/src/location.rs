use crate::model::Description;
use crate::uri::join_uri;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::num::NonZeroU32;

/// A location plus a message relevant to it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Location {
    #[serde(
        rename = "physicalLocation",
        default,
        skip_serializing_if = "PhysicalLocation::is_empty"
    )]
    pub physical_location: PhysicalLocation,

    #[serde(default, skip_serializing_if = "Description::is_empty")]
    pub message: Description,
}

impl Location {
    pub fn is_empty(&self) -> bool {
        self.physical_location.is_empty() && self.message.is_empty()
    }
}

/// The file and region in which a result was detected.
///
/// Renders as `base/uri[:start_line[:start_column][,end_line[:end_column]]]`.
/// The empty value renders as the empty string.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PhysicalLocation {
    #[serde(
        rename = "artifactLocation",
        default,
        skip_serializing_if = "ArtifactLocation::is_empty"
    )]
    pub artifact_location: ArtifactLocation,

    #[serde(default, skip_serializing_if = "Region::is_empty")]
    pub region: Region,
}

impl PhysicalLocation {
    pub fn is_empty(&self) -> bool {
        self.artifact_location.is_empty() && self.region.is_empty()
    }
}

impl fmt::Display for PhysicalLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }

        f.write_str(&self.artifact_location.path())?;

        // Column and end positions only mean something relative to a start line.
        let Some(start_line) = self.region.start_line else {
            return Ok(());
        };
        write!(f, ":{start_line}")?;
        if let Some(start_column) = self.region.start_column {
            write!(f, ":{start_column}")?;
        }
        if let Some(end_line) = self.region.end_line {
            write!(f, ",{end_line}")?;
            if let Some(end_column) = self.region.end_column {
                write!(f, ":{end_column}")?;
            }
        }
        Ok(())
    }
}

/// Identifies an artifact: a URI relative to an optional base identifier.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ArtifactLocation {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub uri: String,

    /// Names the top-level artifact (e.g. `%SRCROOT%`) `uri` is relative to.
    #[serde(
        rename = "uriBaseId",
        default,
        deserialize_with = "base_id",
        skip_serializing_if = "base_id_is_absent"
    )]
    #[schemars(with = "Option<String>")]
    pub uri_base_id: Option<String>,
}

impl ArtifactLocation {
    pub fn new<S: Into<String>>(uri: S) -> Self {
        Self {
            uri: uri.into(),
            uri_base_id: None,
        }
    }

    pub fn with_base<B: Into<String>, S: Into<String>>(base: B, uri: S) -> Self {
        Self {
            uri: uri.into(),
            uri_base_id: Some(base.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.uri.is_empty() && base_id_is_absent(&self.uri_base_id)
    }

    /// `uri_base_id/uri`, cleaned. Reduces to `uri` without a base.
    pub fn path(&self) -> String {
        join_uri(self.uri_base_id.as_deref().unwrap_or_default(), &self.uri)
    }
}

/// A contiguous portion of an artifact. Positions are 1-based; absent
/// positions are `None`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Region {
    #[serde(
        rename = "startLine",
        default,
        deserialize_with = "position",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<u32>")]
    pub start_line: Option<NonZeroU32>,

    #[serde(
        rename = "startColumn",
        default,
        deserialize_with = "position",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<u32>")]
    pub start_column: Option<NonZeroU32>,

    #[serde(
        rename = "endLine",
        default,
        deserialize_with = "position",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<u32>")]
    pub end_line: Option<NonZeroU32>,

    #[serde(
        rename = "endColumn",
        default,
        deserialize_with = "position",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(with = "Option<u32>")]
    pub end_column: Option<NonZeroU32>,
}

impl Region {
    /// A region starting at `start_line`; `0` leaves it unset.
    pub fn new(start_line: u32) -> Self {
        Self {
            start_line: NonZeroU32::new(start_line),
            ..Self::default()
        }
    }

    pub fn with_start_column(mut self, start_column: u32) -> Self {
        self.start_column = NonZeroU32::new(start_column);
        self
    }

    pub fn with_end(mut self, end_line: u32, end_column: u32) -> Self {
        self.end_line = NonZeroU32::new(end_line);
        self.end_column = NonZeroU32::new(end_column);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.start_line.is_none()
            && self.start_column.is_none()
            && self.end_line.is_none()
            && self.end_column.is_none()
    }
}

/// Producers write `0` for "not set"; read it as absent.
fn position<'de, D>(deserializer: D) -> std::result::Result<Option<NonZeroU32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<u32>::deserialize(deserializer)?;
    Ok(raw.and_then(NonZeroU32::new))
}

/// An empty `uriBaseId` names no base.
fn base_id<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|base| !base.is_empty()))
}

fn base_id_is_absent(base: &Option<String>) -> bool {
    base.as_deref().is_none_or(str::is_empty)
}
