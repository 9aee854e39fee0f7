use crate::level_or_default;
use sarif_types::Log;

/// Render results as GitHub Actions workflow command annotations.
///
/// Format:
/// `::{level} file={path},line={line},col={col}::[{rule_id}] {message}`
pub fn render_github_annotations(log: &Log) -> Vec<String> {
    let mut out = Vec::new();

    for result in log.results() {
        let level = match level_or_default(result) {
            "error" => "error",
            "warning" => "warning",
            _ => "notice",
        };

        let mut meta = String::new();
        if let Some(loc) = result.primary_location() {
            let path = loc.artifact_location.path();
            if !path.is_empty() {
                meta.push_str(&format!("file={}", path));
                let region = &loc.region;
                if let Some(line) = region.start_line {
                    meta.push_str(&format!(",line={}", line));
                    if let Some(col) = region.start_column {
                        meta.push_str(&format!(",col={}", col));
                    }
                    if let Some(end_line) = region.end_line {
                        meta.push_str(&format!(",endLine={}", end_line));
                        if let Some(end_col) = region.end_column {
                            meta.push_str(&format!(",endColumn={}", end_col));
                        }
                    }
                }
            }
        }

        let rule_id: &str = if result.rule_id.is_empty() {
            "sarif"
        } else {
            &result.rule_id
        };
        let message = format!("[{}] {}", rule_id, result.message.as_str())
            .replace('%', "%25")
            .replace('\r', "%0D")
            .replace('\n', "%0A");

        if meta.is_empty() {
            out.push(format!("::{}::{}", level, message));
        } else {
            out.push(format!("::{} {}::{}", level, meta, message));
        }
    }

    out
}
