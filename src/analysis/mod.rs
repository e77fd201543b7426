mod classifier;
mod engine;
mod policy;
pub mod rules;
mod slices;

pub use classifier::ModulePathClassifier;
pub use engine::RuleEngine;
pub use policy::PublicSurfacePolicy;
pub use rules::{Rule, RuleContext};
pub use slices::{Classification, ClassificationTable, SliceAssigner};

use crate::config::Config;
use crate::graph::DependencyGraph;
use crate::model::{ConformanceReport, UnitSummary};

/// Run every rule over `graph` and collect the full report.
///
/// `config` must already have passed [`Config::validate`]. Rule evaluation itself
/// cannot fail, so the report always covers the whole unit set.
pub fn check(graph: &DependencyGraph, config: &Config, project_name: &str) -> ConformanceReport {
    check_with_engine(graph, config, project_name, &RuleEngine::default())
}

pub fn check_with_engine(
    graph: &DependencyGraph,
    config: &Config,
    project_name: &str,
    engine: &RuleEngine,
) -> ConformanceReport {
    let assigner = SliceAssigner::from_config(config);
    let table = ClassificationTable::build(graph, &assigner);
    let violations = engine.evaluate(graph, &table);

    tracing::info!(
        "checked {} units and {} dependencies: {} violations",
        graph.unit_count(),
        graph.edge_count(),
        violations.len()
    );

    ConformanceReport {
        project_name: project_name.to_string(),
        unit_count: graph.unit_count(),
        edge_count: graph.edge_count(),
        violations,
        units: summarize(graph, &table),
    }
}

/// Per-unit inventory sorted by unit name.
pub fn summarize(graph: &DependencyGraph, table: &ClassificationTable) -> Vec<UnitSummary> {
    let mut units: Vec<UnitSummary> = graph
        .units()
        .map(|(id, unit)| {
            let c = table.get(id);
            UnitSummary {
                name: unit.name.clone(),
                package: unit.package(),
                module: c.module().cloned(),
                subpackage: c.subpackage().map(str::to_string),
                layer: c.layer,
                slice: c.slice.clone(),
                dependencies: graph.dependency_names(id),
            }
        })
        .collect();
    units.sort_by(|a, b| a.name.cmp(&b.name));
    units
}
