//! Property-based tests for the document model.
//!
//! These tests use proptest to verify invariants around:
//! - location rendering and its partial-field rules
//! - explicit absence of region positions on the wire
//! - rule lookup ordering

use crate::location::{ArtifactLocation, PhysicalLocation, Region};
use crate::model::{Description, Driver, Log, Rule, Run, Tool};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// Relative path segments without separators-in-names or punctuation used by
/// the rendered suffix (`:` and `,`).
fn arb_uri() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_.-]{0,11}(/[a-z][a-z0-9_-]{0,11}){0,3}").unwrap()
}

fn arb_base() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("%SRCROOT%".to_string())),
        prop::string::string_regex("[a-z]{1,8}").unwrap().prop_map(Some),
    ]
}

/// Positions including `0`, which must read as absent.
fn arb_position() -> impl Strategy<Value = u32> {
    prop_oneof![Just(0u32), 1u32..10_000]
}

fn arb_region() -> impl Strategy<Value = Region> {
    (arb_position(), arb_position(), arb_position(), arb_position()).prop_map(
        |(start_line, start_column, end_line, end_column)| {
            Region::new(start_line)
                .with_start_column(start_column)
                .with_end(end_line, end_column)
        },
    )
}

fn arb_physical_location() -> impl Strategy<Value = PhysicalLocation> {
    (arb_uri(), arb_base(), arb_region()).prop_map(|(uri, base, region)| PhysicalLocation {
        artifact_location: ArtifactLocation {
            uri,
            uri_base_id: base,
        },
        region,
    })
}

// ============================================================================
// Property tests: location rendering
// ============================================================================

proptest! {
    /// Without a start line nothing but the path is rendered.
    #[test]
    fn no_start_line_renders_path_only(mut loc in arb_physical_location()) {
        loc.region.start_line = None;
        prop_assert_eq!(loc.to_string(), loc.artifact_location.path());
    }

    /// With a start line the suffix always begins with it.
    #[test]
    fn start_line_leads_suffix(loc in arb_physical_location(), line in 1u32..10_000) {
        let mut loc = loc;
        loc.region = Region { start_line: Region::new(line).start_line, ..loc.region };
        let rendered = loc.to_string();
        let expected_prefix = format!("{}:{}", loc.artifact_location.path(), line);
        prop_assert!(
            rendered.starts_with(&expected_prefix),
            "{rendered:?} should start with {expected_prefix:?}"
        );
    }

    /// An end column is never rendered without an end line.
    #[test]
    fn end_column_requires_end_line(loc in arb_physical_location()) {
        let rendered = loc.to_string();
        let suffix = &rendered[loc.artifact_location.path().len()..];
        if loc.region.end_line.is_none() {
            prop_assert!(!suffix.contains(','), "unexpected end in {rendered:?}");
        }
        if let (Some(_), Some(end_line), None) =
            (loc.region.start_line, loc.region.end_line, loc.region.end_column)
        {
            let end = format!(",{end_line}");
            prop_assert!(suffix.ends_with(&end), "{rendered:?} should end with {end:?}");
        }
    }

    /// Regions survive JSON with absent positions staying absent.
    #[test]
    fn region_json_is_stable(region in arb_region()) {
        let json = serde_json::to_string(&region).unwrap();
        let back: Region = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, region);
        prop_assert!(!json.contains(":0"), "zero leaked into {json}");
    }
}

// ============================================================================
// Property tests: rule lookup
// ============================================================================

fn run_with_ids(ids: &[String], tag: &str) -> Run {
    Run {
        tool: Tool {
            driver: Driver {
                rules: ids
                    .iter()
                    .map(|id| Rule {
                        id: id.clone(),
                        short_description: Description::text(tag),
                        ..Rule::default()
                    })
                    .collect(),
                ..Driver::default()
            },
        },
        results: Vec::new(),
    }
}

proptest! {
    /// A lookup finds the id in the earliest run that declares it.
    #[test]
    fn find_rule_prefers_earlier_runs(
        first in prop::collection::vec("[a-c]", 0..4),
        second in prop::collection::vec("[a-c]", 0..4),
        id in "[a-d]",
    ) {
        let log = Log {
            runs: vec![run_with_ids(&first, "first"), run_with_ids(&second, "second")],
            ..Log::default()
        };

        let expected = if first.contains(&id) {
            Some("first")
        } else if second.contains(&id) {
            Some("second")
        } else {
            None
        };
        let found = log.find_rule(&id).map(|r| r.short_description.as_str());
        prop_assert_eq!(found, expected);
        prop_assert_eq!(log.rule_index().get(&id), log.find_rule(&id));
    }
}
