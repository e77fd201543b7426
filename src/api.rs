//! Library API for modbound.
//!
//! These functions return `Result`s instead of printing and exiting, so the checker can
//! be embedded in a test suite or another tool.
//!
//! # Example
//!
//! ```no_run
//! use modbound::{check_file, CheckOptions};
//! use std::path::Path;
//!
//! let report = check_file(Path::new("target/graph.json"), CheckOptions::default())?;
//! for violation in &report.violations {
//!     println!("{}", violation.message);
//! }
//! assert!(report.passed());
//! # Ok::<(), modbound::ModboundError>(())
//! ```

use crate::analysis::{self, RuleEngine};
use crate::config::{Config, ConfigError};
use crate::graph::{DependencyGraph, GraphError, load_graph};
use crate::model::ConformanceReport;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that keep a conformance run from starting.
#[derive(Debug, Error)]
pub enum ModboundError {
    /// The graph document could not be found.
    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),

    /// Invalid or unreadable configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Unreadable or inconsistent graph document.
    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),
}

/// Options for [`check_file`].
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// Explicit configuration; when `None`, `.modbound.toml` next to the graph is used
    /// if present, defaults otherwise.
    pub config: Option<Config>,

    /// Overrides the module marker segment.
    pub marker: Option<String>,

    /// Overrides the public subpackage allow-list.
    pub public_subpackages: Option<Vec<String>>,
}

/// Load a graph document and check it against the module boundary rules.
pub fn check_file(path: &Path, options: CheckOptions) -> Result<ConformanceReport, ModboundError> {
    let resolved_path = path
        .canonicalize()
        .map_err(|_| ModboundError::PathNotFound(path.to_path_buf()))?;

    let config = match options.config {
        Some(config) => config,
        None => match resolved_path.parent() {
            Some(dir) => Config::load(dir)?,
            None => Config::default(),
        },
    }
    .with_overrides(options.marker.as_deref(), options.public_subpackages.as_deref());

    // Config problems are reported before the graph is even read.
    config.validate()?;

    let (meta, graph) = load_graph(&resolved_path)?;
    let project_name = meta.project.unwrap_or_else(|| {
        resolved_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("project")
            .to_string()
    });

    Ok(analysis::check(&graph, &config, &project_name))
}

/// Check an in-memory graph supplied by the caller.
pub fn check_graph(
    graph: &DependencyGraph,
    config: &Config,
    project_name: &str,
) -> Result<ConformanceReport, ModboundError> {
    config.validate()?;
    Ok(analysis::check_with_engine(
        graph,
        config,
        project_name,
        &RuleEngine::default(),
    ))
}
