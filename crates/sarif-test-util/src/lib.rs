//! Shared test utilities for the sarif workspace.
//!
//! Lives in its own crate so that integration tests of several crates (and
//! `xtask`) can share fixture lookup and sample documents.

use camino::{Utf8Path, Utf8PathBuf};
use sarif_types::{
    ArtifactLocation, CodeFlow, Description, Driver, Frame, Location, Log, PhysicalLocation,
    Region, Result, Rule, Run, SARIF_VERSION, Stack, ThreadFlow, ThreadFlowLocation, Tool,
};
use serde_json::{Value, json};

/// Workspace `tests/fixtures` directory.
pub fn fixtures_dir() -> Utf8PathBuf {
    // crates/sarif-test-util -> crates -> workspace root
    Utf8Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("tests")
        .join("fixtures")
}

/// Path of a named fixture under [`fixtures_dir`].
pub fn fixture(name: &str) -> Utf8PathBuf {
    fixtures_dir().join(name)
}

/// Reads a fixture as untyped JSON, for comparisons that should not depend on
/// the document model.
pub fn read_json(path: &Utf8Path) -> Value {
    let text = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("could not read {path}: {e}"));
    serde_json::from_str(&text).unwrap_or_else(|e| panic!("could not parse {path}: {e}"))
}

/// Rule id of the first result in `govulncheck.sarif.json`.
pub const GOVULNCHECK_FIRST_RULE: &str = "GO-2021-0113";

fn physical(base: Option<&str>, uri: &str, region: Region) -> PhysicalLocation {
    PhysicalLocation {
        artifact_location: ArtifactLocation {
            uri: uri.to_string(),
            uri_base_id: base.map(str::to_string),
        },
        region,
    }
}

fn located(physical_location: PhysicalLocation, message: &str) -> Location {
    Location {
        physical_location,
        message: Description::text(message),
    }
}

/// A fully populated document exercising every modeled entity.
///
/// The schema is left unset so encode defaulting is observable.
pub fn sample_log() -> Log {
    let call_site = located(
        physical(
            Some("%SRCROOT%"),
            "cmd/app/main.go",
            Region::new(12).with_start_column(29),
        ),
        "app.main",
    );
    let vulnerable = located(
        physical(
            Some("%GOMODCACHE%"),
            "golang.org/x/text@v0.3.5/language/parse.go",
            Region::new(33).with_start_column(6).with_end(35, 2),
        ),
        "language.Parse",
    );

    let mut properties = sarif_types::Properties::new();
    properties.insert("scan_level".to_string(), json!("symbol"));
    properties.insert("go_version".to_string(), json!("go1.22.2"));
    properties.insert("modules".to_string(), json!({ "count": 3, "vendored": false }));

    Log {
        version: SARIF_VERSION.to_string(),
        schema: None,
        runs: vec![Run {
            tool: Tool {
                driver: Driver {
                    name: "govulncheck".to_string(),
                    version: "v1.1.3".to_string(),
                    information_uri: "https://go.dev/vuln/docs/cmd/govulncheck".to_string(),
                    properties,
                    rules: vec![
                        Rule {
                            id: "GO-2021-0113".to_string(),
                            short_description: Description::text(
                                "Out-of-bounds read in golang.org/x/text/language",
                            ),
                            full_description: Description {
                                text: "Out-of-bounds read in golang.org/x/text/language".to_string(),
                                markdown: "Out-of-bounds read in `golang.org/x/text/language`"
                                    .to_string(),
                            },
                            help: Description::text("Upgrade golang.org/x/text to v0.3.7."),
                            help_uri: "https://pkg.go.dev/vuln/GO-2021-0113".to_string(),
                            properties: [("tags".to_string(), json!(["CVE-2021-38561"]))]
                                .into_iter()
                                .collect(),
                        },
                        Rule {
                            id: "GO-2022-1059".to_string(),
                            short_description: Description::text(
                                "Denial of service via crafted Accept-Language header",
                            ),
                            ..Rule::default()
                        },
                    ],
                },
            },
            results: vec![
                Result {
                    rule_id: "GO-2021-0113".to_string(),
                    level: "error".to_string(),
                    message: Description::text("Your code calls vulnerable functions."),
                    locations: vec![located(
                        physical(Some("%SRCROOT%"), "go.mod", Region::new(1)),
                        "Findings for vulnerability GO-2021-0113",
                    )],
                    code_flows: vec![CodeFlow {
                        thread_flows: vec![ThreadFlow {
                            locations: vec![
                                ThreadFlowLocation {
                                    module: "example.com/app".to_string(),
                                    location: call_site.clone(),
                                },
                                ThreadFlowLocation {
                                    module: "golang.org/x/text@v0.3.5".to_string(),
                                    location: vulnerable.clone(),
                                },
                            ],
                        }],
                        message: Description::text("A code flow reaching language.Parse"),
                    }],
                    stacks: vec![Stack {
                        message: Description::text("A call stack for language.Parse"),
                        frames: vec![
                            Frame {
                                module: "example.com/app".to_string(),
                                location: call_site,
                            },
                            Frame {
                                module: "golang.org/x/text@v0.3.5".to_string(),
                                location: vulnerable,
                            },
                        ],
                    }],
                },
                Result {
                    rule_id: "GO-2022-1059".to_string(),
                    level: "warning".to_string(),
                    message: Description::text(
                        "Your code imports a vulnerable package\nbut does not call it.",
                    ),
                    ..Result::default()
                },
            ],
        }],
    }
}
