use crate::flow::{CodeFlow, Stack};
use crate::index::RuleIndex;
use crate::location::{Location, PhysicalLocation};
use crate::{SARIF_SCHEMA_URI, SARIF_VERSION};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;

/// Tool-defined property bag. Values are kept untyped.
pub type Properties = BTreeMap<String, JsonValue>;

/// Top-level SARIF document: the format version plus the output of one or
/// more runs.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Log {
    /// Must be [`SARIF_VERSION`] once decoded or encoded.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub version: String,

    /// Absolute URI of the JSON schema for this document.
    #[serde(rename = "$schema", default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub runs: Vec<Run>,
}

impl Log {
    /// A log stamped with the supported version and canonical schema URI.
    pub fn new(runs: Vec<Run>) -> Self {
        Self {
            version: SARIF_VERSION.to_string(),
            schema: Some(SARIF_SCHEMA_URI.to_string()),
            runs,
        }
    }

    /// Returns the first rule with the provided identifier.
    ///
    /// Runs are searched in order, then each driver's rules in order. A driver
    /// that declares the same id twice yields the earlier rule.
    pub fn find_rule(&self, id: &str) -> Option<&Rule> {
        self.runs
            .iter()
            .flat_map(|run| run.tool.driver.rules.iter())
            .find(|rule| rule.id == id)
    }

    /// Builds an id → rule map for repeated lookups. Same first-wins
    /// semantics as [`Log::find_rule`].
    pub fn rule_index(&self) -> RuleIndex<'_> {
        RuleIndex::new(self)
    }

    /// Every result across all runs, in run order.
    pub fn results(&self) -> impl Iterator<Item = &Result> {
        self.runs.iter().flat_map(|run| run.results.iter())
    }
}

/// A single run of an analysis tool and its output.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Run {
    #[serde(default, skip_serializing_if = "Tool::is_empty")]
    pub tool: Tool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub results: Vec<Result>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Tool {
    /// The component containing the tool's primary executable.
    #[serde(default, skip_serializing_if = "Driver::is_empty")]
    pub driver: Driver,
}

impl Tool {
    pub fn is_empty(&self) -> bool {
        self.driver.is_empty()
    }
}

/// One of the components which make up an analysis tool.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Driver {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Version in whatever format the component natively provides.
    #[serde(
        rename = "semanticVersion",
        default,
        skip_serializing_if = "String::is_empty"
    )]
    pub version: String,

    #[serde(
        rename = "informationUri",
        default,
        skip_serializing_if = "String::is_empty"
    )]
    pub information_uri: String,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: Properties,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<Rule>,
}

impl Driver {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.version.is_empty()
            && self.information_uri.is_empty()
            && self.properties.is_empty()
            && self.rules.is_empty()
    }
}

/// Describes a reporting item: either a kind of result or a notification the
/// tool can emit. Results refer to rules by [`Rule::id`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Rule {
    /// Unique within a driver. Not enforced.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    #[serde(
        rename = "shortDescription",
        default,
        skip_serializing_if = "Description::is_empty"
    )]
    pub short_description: Description,

    #[serde(
        rename = "fullDescription",
        default,
        skip_serializing_if = "Description::is_empty"
    )]
    pub full_description: Description,

    #[serde(default, skip_serializing_if = "Description::is_empty")]
    pub help: Description,

    #[serde(rename = "helpUri", default, skip_serializing_if = "String::is_empty")]
    pub help_uri: String,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: Properties,
}

/// A message available as plain text and/or GitHub-Flavored Markdown.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Description {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub markdown: String,
}

impl Description {
    pub fn text<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            markdown: String::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.markdown.is_empty()
    }

    /// Plain text if present, otherwise the markdown form.
    pub fn as_str(&self) -> &str {
        if self.text.is_empty() {
            &self.markdown
        } else {
            &self.text
        }
    }
}

/// A single finding reported by an analysis tool.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Result {
    /// Key into the driver's rules; resolved with [`Log::find_rule`].
    #[serde(rename = "ruleId", default, skip_serializing_if = "String::is_empty")]
    pub rule_id: String,

    /// Severity level (`none`, `note`, `warning`, `error`), kept verbatim.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub level: String,

    #[serde(default, skip_serializing_if = "Description::is_empty")]
    pub message: Description,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<Location>,

    #[serde(rename = "codeFlows", default, skip_serializing_if = "Vec::is_empty")]
    pub code_flows: Vec<CodeFlow>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stacks: Vec<Stack>,
}

impl Result {
    /// The physical location of the first reported location, if any.
    pub fn primary_location(&self) -> Option<&PhysicalLocation> {
        self.locations
            .first()
            .map(|loc| &loc.physical_location)
            .filter(|phys| !phys.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::{ArtifactLocation, Region};
    use serde_json::json;

    fn rule(id: &str, text: &str) -> Rule {
        Rule {
            id: id.to_string(),
            short_description: Description::text(text),
            ..Rule::default()
        }
    }

    fn log_with_rules(rules: Vec<Rule>) -> Log {
        Log {
            runs: vec![Run {
                tool: Tool {
                    driver: Driver {
                        rules,
                        ..Driver::default()
                    },
                },
                results: Vec::new(),
            }],
            ..Log::default()
        }
    }

    #[test]
    fn find_rule_returns_matching_rule() {
        let log = log_with_rules(vec![
            rule("id-1", "description 1"),
            rule("id-2", "description 2"),
        ]);

        assert_eq!(log.find_rule("id-2"), Some(&rule("id-2", "description 2")));
    }

    #[test]
    fn find_rule_reports_absence() {
        let log = log_with_rules(vec![
            rule("id-1", "description 1"),
            rule("id-2", "description 2"),
        ]);

        assert_eq!(log.find_rule("id-3"), None);
        assert_eq!(Log::default().find_rule("id-1"), None);
    }

    #[test]
    fn find_rule_first_declaration_wins() {
        let mut log = log_with_rules(vec![rule("dup", "first"), rule("dup", "second")]);
        log.runs.push(Run {
            tool: Tool {
                driver: Driver {
                    rules: vec![rule("dup", "third")],
                    ..Driver::default()
                },
            },
            results: Vec::new(),
        });

        let found = log.find_rule("dup").expect("rule should be found");
        assert_eq!(found.short_description.text, "first");
    }

    #[test]
    fn find_rule_searches_later_runs() {
        let mut log = log_with_rules(vec![rule("a", "a")]);
        log.runs.push(Run::default());
        log.runs.push(Run {
            tool: Tool {
                driver: Driver {
                    rules: vec![rule("b", "in third run")],
                    ..Driver::default()
                },
            },
            results: Vec::new(),
        });

        assert_eq!(
            log.find_rule("b").map(|r| r.short_description.as_str()),
            Some("in third run")
        );
    }

    #[test]
    fn new_log_is_stamped() {
        let log = Log::new(Vec::new());
        assert_eq!(log.version, SARIF_VERSION);
        assert_eq!(log.schema.as_deref(), Some(SARIF_SCHEMA_URI));
    }

    #[test]
    fn results_span_all_runs() {
        let result = |id: &str| Result {
            rule_id: id.to_string(),
            ..Result::default()
        };
        let log = Log {
            runs: vec![
                Run {
                    results: vec![result("a"), result("b")],
                    ..Run::default()
                },
                Run {
                    results: vec![result("c")],
                    ..Run::default()
                },
            ],
            ..Log::default()
        };

        let ids: Vec<&str> = log.results().map(|r| r.rule_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn description_falls_back_to_markdown() {
        let d = Description {
            text: String::new(),
            markdown: "**bold**".to_string(),
        };
        assert_eq!(d.as_str(), "**bold**");
        assert_eq!(Description::text("plain").as_str(), "plain");
    }

    #[test]
    fn primary_location_skips_empty() {
        let mut result = Result {
            locations: vec![Location::default()],
            ..Result::default()
        };
        assert_eq!(result.primary_location(), None);

        result.locations[0].physical_location = PhysicalLocation {
            artifact_location: ArtifactLocation::new("main.go"),
            region: Region::new(3),
        };
        assert_eq!(
            result.primary_location().map(|p| p.to_string()),
            Some("main.go:3".to_string())
        );
    }

    #[test]
    fn empty_fields_are_omitted() {
        let log = Log {
            version: SARIF_VERSION.to_string(),
            schema: None,
            runs: vec![Run {
                tool: Tool {
                    driver: Driver {
                        name: "govulncheck".to_string(),
                        ..Driver::default()
                    },
                },
                results: vec![Result {
                    rule_id: "GO-1".to_string(),
                    locations: vec![Location::default()],
                    ..Result::default()
                }],
            }],
        };

        let value = serde_json::to_value(&log).expect("serialize");
        assert_eq!(
            value,
            json!({
                "version": "2.1.0",
                "runs": [{
                    "tool": { "driver": { "name": "govulncheck" } },
                    "results": [{ "ruleId": "GO-1", "locations": [{}] }]
                }]
            })
        );
    }

    #[test]
    fn missing_fields_default() {
        let log: Log = serde_json::from_value(json!({
            "runs": [{ "results": [{ "message": { "text": "hi" } }] }]
        }))
        .expect("deserialize");

        assert_eq!(log.version, "");
        assert_eq!(log.schema, None);
        assert!(log.runs[0].tool.is_empty());
        assert_eq!(log.runs[0].results[0].message.text, "hi");
        assert_eq!(log.runs[0].results[0].rule_id, "");
    }

    #[test]
    fn properties_keep_dynamic_values() {
        let driver: Driver = serde_json::from_value(json!({
            "name": "govulncheck",
            "properties": {
                "protocol_version": "v1.0.0",
                "scanner_version": 3,
                "flags": [true, null],
                "db": { "last_modified": "2024-01-01" }
            }
        }))
        .expect("deserialize");

        assert_eq!(driver.properties["scanner_version"], json!(3));
        assert_eq!(driver.properties["flags"], json!([true, null]));
        assert_eq!(driver.properties["db"]["last_modified"], "2024-01-01");
    }
}
