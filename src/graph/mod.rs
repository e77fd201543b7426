mod document;

pub use document::{GraphDocument, GraphDocumentMeta, UnitEntry, load_graph, load_graph_with_fs};

use crate::model::CodeUnit;
use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::{BTreeSet, HashMap};
use std::path::PathBuf;
use thiserror::Error;

/// Identity of a unit within one graph. Two units with equal names are still distinct ids.
pub type UnitId = NodeIndex;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("Failed to read graph file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse graph file {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },
    #[error("Code unit '{0}' is declared more than once")]
    DuplicateUnit(String),
    #[error("Code unit '{source_unit}' depends on unknown unit '{target}'")]
    UnknownTarget { source_unit: String, target: String },
    #[error("Code unit has an empty name")]
    UnnamedUnit,
}

/// Code units and their direct outgoing references. Read-only once built.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    graph: DiGraph<CodeUnit, ()>,
}

impl DependencyGraph {
    pub fn builder() -> GraphBuilder {
        GraphBuilder::default()
    }

    pub fn unit(&self, id: UnitId) -> &CodeUnit {
        &self.graph[id]
    }

    pub fn unit_ids(&self) -> impl Iterator<Item = UnitId> + '_ {
        self.graph.node_indices()
    }

    pub fn units(&self) -> impl Iterator<Item = (UnitId, &CodeUnit)> + '_ {
        self.graph
            .node_indices()
            .map(move |idx| (idx, &self.graph[idx]))
    }

    pub fn unit_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Direct dependencies of `id`.
    pub fn dependencies(&self, id: UnitId) -> impl Iterator<Item = UnitId> + '_ {
        self.graph.neighbors_directed(id, Direction::Outgoing)
    }

    /// Sorted, de-duplicated names of the direct dependencies of `id`.
    pub fn dependency_names(&self, id: UnitId) -> Vec<String> {
        self.dependencies(id)
            .map(|dep| self.graph[dep].name.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// First unit carrying `name`, if any.
    pub fn find(&self, name: &str) -> Option<UnitId> {
        self.units().find(|(_, u)| u.name == name).map(|(id, _)| id)
    }
}

/// Incremental construction of a [`DependencyGraph`].
#[derive(Debug, Default)]
pub struct GraphBuilder {
    graph: DiGraph<CodeUnit, ()>,
}

impl GraphBuilder {
    pub fn add_unit(&mut self, unit: CodeUnit) -> UnitId {
        self.graph.add_node(unit)
    }

    /// Record `from → to`. Repeated edges between the same pair are stored once.
    pub fn add_dependency(&mut self, from: UnitId, to: UnitId) {
        self.graph.update_edge(from, to, ());
    }

    pub fn build(self) -> DependencyGraph {
        DependencyGraph { graph: self.graph }
    }

    /// Build from `(unit, dependency names)` pairs where names identify units uniquely.
    pub fn from_named<I>(entries: I) -> Result<DependencyGraph, GraphError>
    where
        I: IntoIterator<Item = (CodeUnit, Vec<String>)>,
    {
        let mut builder = GraphBuilder::default();
        let mut by_name: HashMap<String, UnitId> = HashMap::new();
        let mut pending = Vec::new();

        for (unit, deps) in entries {
            if unit.name.trim().is_empty() {
                return Err(GraphError::UnnamedUnit);
            }
            if by_name.contains_key(&unit.name) {
                return Err(GraphError::DuplicateUnit(unit.name));
            }
            let name = unit.name.clone();
            let id = builder.add_unit(unit);
            by_name.insert(name, id);
            pending.push((id, deps));
        }

        for (from, deps) in pending {
            for dep in deps {
                let to = by_name
                    .get(&dep)
                    .copied()
                    .ok_or_else(|| GraphError::UnknownTarget {
                        source_unit: builder.graph[from].name.clone(),
                        target: dep.clone(),
                    })?;
                builder.add_dependency(from, to);
            }
        }

        Ok(builder.build())
    }
}
