use crate::level_or_default;
use sarif_types::{Log, Run};

pub fn render_markdown(log: &Log) -> String {
    let mut out = String::new();
    let rules = log.rule_index();
    let total = log.results().count();

    out.push_str("# SARIF report\n\n");
    out.push_str(&format!(
        "- Runs: {}\n- Results: {}\n",
        log.runs.len(),
        total
    ));

    for run in &log.runs {
        out.push_str(&format!("\n## {}\n\n", run_title(run)));

        if run.results.is_empty() {
            out.push_str("No results.\n");
            continue;
        }

        for result in &run.results {
            let level = level_or_default(result);
            let message = result.message.as_str().replace('\n', " ");
            let rule_id: &str = if result.rule_id.is_empty() {
                "-"
            } else {
                &result.rule_id
            };

            match result.primary_location() {
                Some(loc) => out.push_str(&format!(
                    "- **{}** `{}`: {} (`{}`)\n",
                    level, rule_id, message, loc
                )),
                None => out.push_str(&format!("- **{}** `{}`: {}\n", level, rule_id, message)),
            }

            if let Some(rule) = rules.get(&result.rule_id) {
                if !rule.short_description.is_empty() {
                    out.push_str(&format!("  - rule: {}\n", rule.short_description.as_str()));
                }
                if !rule.help_uri.is_empty() {
                    out.push_str(&format!("  - help: {}\n", rule.help_uri));
                }
            }
        }
    }

    out
}

fn run_title(run: &Run) -> String {
    let driver = &run.tool.driver;
    let name: &str = if driver.name.is_empty() {
        "Unknown tool"
    } else {
        &driver.name
    };
    if driver.version.is_empty() {
        name.to_string()
    } else {
        format!("{} {}", name, driver.version)
    }
}
