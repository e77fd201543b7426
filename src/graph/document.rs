use super::{DependencyGraph, GraphBuilder, GraphError};
use crate::fs::{FileSystem, default_fs};
use crate::model::{CodeUnit, split_package};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// On-disk form of a code-unit graph, as produced by the extraction toolchain.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphDocument {
    #[serde(default)]
    pub project: Option<String>,
    #[serde(default)]
    pub units: Vec<UnitEntry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UnitEntry {
    pub name: String,
    /// Dotted namespace, e.g. `se.shop.modules.cart.api`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
    /// Namespace as explicit segments; takes precedence over `package`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<String>>,
    #[serde(default)]
    pub depends_on: Vec<String>,
}

impl UnitEntry {
    fn to_unit(&self) -> CodeUnit {
        match (&self.path, &self.package) {
            (Some(path), _) => CodeUnit::new(self.name.clone(), path.clone()),
            (None, Some(package)) => CodeUnit::new(self.name.clone(), split_package(package)),
            (None, None) => CodeUnit::from_qualified_name(self.name.clone()),
        }
    }
}

impl GraphDocument {
    pub fn from_json(content: &str) -> Result<Self, String> {
        serde_json::from_str(content).map_err(|e| e.to_string())
    }

    pub fn from_toml(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    pub fn into_graph(self) -> Result<DependencyGraph, GraphError> {
        GraphBuilder::from_named(
            self.units
                .into_iter()
                .map(|entry| (entry.to_unit(), entry.depends_on)),
        )
    }
}

/// Load a graph document; `.toml` files are read as TOML, everything else as JSON.
pub fn load_graph(path: &Path) -> Result<(GraphDocumentMeta, DependencyGraph), GraphError> {
    load_graph_with_fs(path, default_fs())
}

/// Metadata carried alongside the graph.
#[derive(Debug, Clone, Default)]
pub struct GraphDocumentMeta {
    pub project: Option<String>,
}

pub fn load_graph_with_fs(
    path: &Path,
    fs: &dyn FileSystem,
) -> Result<(GraphDocumentMeta, DependencyGraph), GraphError> {
    let content = fs.read_to_string(path).map_err(|source| GraphError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let is_toml = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("toml"));

    let parsed = if is_toml {
        GraphDocument::from_toml(&content)
    } else {
        GraphDocument::from_json(&content)
    };
    let document = parsed.map_err(|message| GraphError::Parse {
        path: path.to_path_buf(),
        message,
    })?;

    tracing::debug!(
        "loaded graph document {} with {} units",
        path.display(),
        document.units.len()
    );

    let meta = GraphDocumentMeta {
        project: document.project.clone(),
    };
    let graph = document.into_graph()?;
    Ok((meta, graph))
}
