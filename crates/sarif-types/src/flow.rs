//! Execution-path and call-stack details attached to a result.

use crate::location::Location;
use crate::model::Description;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Progress of one or more programs through thread flows that together lead
/// to the detection of a problem.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CodeFlow {
    #[serde(rename = "threadFlows", default, skip_serializing_if = "Vec::is_empty")]
    pub thread_flows: Vec<ThreadFlow>,

    #[serde(default, skip_serializing_if = "Description::is_empty")]
    pub message: Description,
}

/// A path through a single thread of execution.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ThreadFlow {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<ThreadFlowLocation>,
}

/// A location visited while simulating or monitoring execution.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ThreadFlowLocation {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub module: String,

    #[serde(default, skip_serializing_if = "Location::is_empty")]
    pub location: Location,
}

/// A call stack, innermost frame first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Stack {
    #[serde(default, skip_serializing_if = "Description::is_empty")]
    pub message: Description,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub frames: Vec<Frame>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Frame {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub module: String,

    #[serde(default, skip_serializing_if = "Location::is_empty")]
    pub location: Location,
}
