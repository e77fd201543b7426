mod cross_module;
mod encapsulation;
mod layered;

pub use cross_module::check_cross_module_internals;
pub use encapsulation::check_slice_encapsulation;
pub use layered::check_layered_access;

use super::ClassificationTable;
use crate::graph::{DependencyGraph, UnitId};
use crate::model::{RuleKind, Violation};

/// Read-only inputs shared by all rules during one run.
#[derive(Clone, Copy)]
pub struct RuleContext<'a> {
    pub graph: &'a DependencyGraph,
    pub table: &'a ClassificationTable,
}

impl<'a> RuleContext<'a> {
    pub fn new(graph: &'a DependencyGraph, table: &'a ClassificationTable) -> Self {
        Self { graph, table }
    }

    pub(crate) fn name(&self, id: UnitId) -> &'a str {
        &self.graph.unit(id).name
    }
}

/// One architectural rule. Each inspects only the direct outgoing edges of a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    SliceEncapsulation,
    LayeredAccess,
    CrossModuleInternals,
}

impl Rule {
    pub const ALL: [Rule; 3] = [
        Rule::SliceEncapsulation,
        Rule::LayeredAccess,
        Rule::CrossModuleInternals,
    ];

    pub fn check_unit(self, ctx: &RuleContext<'_>, source: UnitId) -> Vec<Violation> {
        match self {
            Rule::SliceEncapsulation => check_slice_encapsulation(ctx, source),
            Rule::LayeredAccess => check_layered_access(ctx, source),
            Rule::CrossModuleInternals => check_cross_module_internals(ctx, source),
        }
    }

    /// Evaluate this rule over every unit of the graph.
    pub fn check(self, ctx: &RuleContext<'_>) -> Vec<Violation> {
        ctx.graph
            .unit_ids()
            .flat_map(|id| self.check_unit(ctx, id))
            .collect()
    }
}

impl From<RuleKind> for Rule {
    fn from(kind: RuleKind) -> Self {
        match kind {
            RuleKind::SliceEncapsulation => Rule::SliceEncapsulation,
            RuleKind::LayeredAccess => Rule::LayeredAccess,
            RuleKind::CrossModuleInternals => Rule::CrossModuleInternals,
        }
    }
}
