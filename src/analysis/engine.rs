use super::ClassificationTable;
use super::rules::{Rule, RuleContext};
use crate::graph::{DependencyGraph, UnitId};
use crate::model::Violation;
use rayon::prelude::*;

/// Evaluates a set of rules over every unit and unions their violations.
#[derive(Debug, Clone)]
pub struct RuleEngine {
    rules: Vec<Rule>,
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self {
            rules: Rule::ALL.to_vec(),
        }
    }
}

impl RuleEngine {
    pub fn with_rules(rules: impl IntoIterator<Item = Rule>) -> Self {
        Self {
            rules: rules.into_iter().collect(),
        }
    }

    /// Violations sorted by source name, then rule, then target name.
    pub fn evaluate(&self, graph: &DependencyGraph, table: &ClassificationTable) -> Vec<Violation> {
        let ctx = RuleContext::new(graph, table);
        let ids: Vec<UnitId> = graph.unit_ids().collect();

        let mut violations: Vec<Violation> = ids
            .par_iter()
            .flat_map_iter(|&id| {
                tracing::debug!("checking {}", graph.unit(id).name);
                self.rules.iter().flat_map(move |rule| rule.check_unit(&ctx, id))
            })
            .collect();

        violations.sort_by(|a, b| {
            a.source
                .cmp(&b.source)
                .then(a.rule.cmp(&b.rule))
                .then(a.target.cmp(&b.target))
        });
        violations
    }
}
