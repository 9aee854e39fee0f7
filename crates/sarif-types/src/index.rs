use crate::model::{Log, Rule};
use std::collections::HashMap;

/// Rule lookup table for a [`Log`], built once and queried many times.
///
/// Results refer to rules by id only; this resolves those keys without
/// rescanning every run per result. When an id is declared more than once,
/// the first declaration (run order, then rule order) is kept.
#[derive(Clone, Debug, Default)]
pub struct RuleIndex<'a> {
    rules: HashMap<&'a str, &'a Rule>,
}

impl<'a> RuleIndex<'a> {
    pub fn new(log: &'a Log) -> Self {
        let mut rules = HashMap::new();
        for rule in log.runs.iter().flat_map(|run| run.tool.driver.rules.iter()) {
            rules.entry(rule.id.as_str()).or_insert(rule);
        }
        Self { rules }
    }

    pub fn get(&self, id: &str) -> Option<&'a Rule> {
        self.rules.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Description, Driver, Run, Tool};

    fn run(rules: &[(&str, &str)]) -> Run {
        Run {
            tool: Tool {
                driver: Driver {
                    rules: rules
                        .iter()
                        .map(|(id, text)| Rule {
                            id: id.to_string(),
                            short_description: Description::text(*text),
                            ..Rule::default()
                        })
                        .collect(),
                    ..Driver::default()
                },
            },
            results: Vec::new(),
        }
    }

    #[test]
    fn index_agrees_with_find_rule() {
        let log = Log {
            runs: vec![
                run(&[("a", "a1"), ("b", "b1"), ("a", "a2")]),
                run(&[("b", "b2"), ("c", "c1")]),
            ],
            ..Log::default()
        };
        let index = log.rule_index();

        assert_eq!(index.len(), 3);
        for id in ["a", "b", "c", "missing"] {
            assert_eq!(index.get(id), log.find_rule(id), "id {id}");
        }
        assert_eq!(index.get("a").map(|r| r.short_description.as_str()), Some("a1"));
        assert_eq!(index.get("b").map(|r| r.short_description.as_str()), Some("b1"));
    }

    #[test]
    fn empty_log_has_empty_index() {
        let log = Log::default();
        let index = log.rule_index();
        assert!(index.is_empty());
        assert_eq!(index.get(""), None);
    }
}
