mod slice;
mod unit;
mod violation;

pub use slice::{Layer, ModuleDescriptor, ModuleName, SliceIdentifier};
pub use unit::{CodeUnit, split_package};
pub use violation::{RuleKind, Violation};

use serde::Serialize;

/// Per-unit classification, as listed in reports and inventories.
#[derive(Debug, Clone, Serialize)]
pub struct UnitSummary {
    pub name: String,
    pub package: String,
    pub module: Option<ModuleName>,
    pub subpackage: Option<String>,
    pub layer: Layer,
    pub slice: SliceIdentifier,
    pub dependencies: Vec<String>,
}

/// Outcome of one conformance run.
#[derive(Debug, Clone, Serialize)]
pub struct ConformanceReport {
    pub project_name: String,
    pub unit_count: usize,
    pub edge_count: usize,
    pub violations: Vec<Violation>,
    pub units: Vec<UnitSummary>,
}

impl ConformanceReport {
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations_for(&self, rule: RuleKind) -> impl Iterator<Item = &Violation> {
        self.violations.iter().filter(move |v| v.rule == rule)
    }

    pub fn units_in(&self, layer: Layer) -> impl Iterator<Item = &UnitSummary> {
        self.units.iter().filter(move |u| u.layer == layer)
    }
}
