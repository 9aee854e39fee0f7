use sarif_types::{Log, Result};

/// SARIF's default when a result carries no level.
const DEFAULT_LEVEL: &str = "warning";

pub fn level_or_default(result: &Result) -> &str {
    if result.level.is_empty() {
        DEFAULT_LEVEL
    } else {
        &result.level
    }
}

/// One line per result, compiler-diagnostic style:
/// `{location}: {level}[{rule_id}]: {message}`.
///
/// The location prefix is dropped for results without one, and the
/// `[rule_id]` part for results without a rule id.
pub fn render_text(log: &Log) -> Vec<String> {
    log.results().map(render_result).collect()
}

fn render_result(result: &Result) -> String {
    let mut line = String::new();

    if let Some(loc) = result.primary_location() {
        line.push_str(&format!("{loc}: "));
    }
    line.push_str(level_or_default(result));
    if !result.rule_id.is_empty() {
        line.push_str(&format!("[{}]", result.rule_id));
    }
    line.push_str(": ");
    line.push_str(&result.message.as_str().replace('\n', " "));

    line
}
