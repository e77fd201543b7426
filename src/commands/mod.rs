mod check;
mod classify;
mod init;
mod list;

pub use check::cmd_check;
pub use classify::cmd_classify;
pub use init::cmd_init;
pub use list::{cmd_deps, cmd_layers, cmd_slices};

use crate::cli::ConfigArgs;
use crate::config::Config;
use crate::fs::FileSystem;
use crate::graph::{DependencyGraph, load_graph_with_fs};
use crate::style;
use std::path::{Path, PathBuf};

/// Exit code when the graph violates a rule.
pub const EXIT_VIOLATIONS: i32 = 1;
/// Exit code when the run could not start (bad config, unreadable graph, I/O).
pub const EXIT_SETUP: i32 = 2;

/// Shared setup for commands that read a graph: path, config and the graph itself.
pub struct CommandContext {
    pub path: PathBuf,
    pub project_name: String,
    pub config: Config,
    pub graph: DependencyGraph,
}

impl CommandContext {
    /// Returns Err(exit_code) after reporting the problem if setup fails.
    ///
    /// The configuration is validated here, before the graph is read.
    pub fn new(
        graph_path: &Path,
        config_args: &ConfigArgs,
        fs: &dyn FileSystem,
    ) -> Result<Self, i32> {
        if !fs.exists(graph_path) {
            style::error(&format!("Could not resolve path: {}", style::path(graph_path)));
            return Err(EXIT_SETUP);
        }

        let config = resolve_config(graph_path.parent(), config_args, fs)?;

        let (meta, graph) = match load_graph_with_fs(graph_path, fs) {
            Ok(loaded) => loaded,
            Err(e) => {
                style::error(&e.to_string());
                return Err(EXIT_SETUP);
            }
        };

        let project_name = meta.project.unwrap_or_else(|| {
            graph_path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("project")
                .to_string()
        });

        Ok(Self {
            path: graph_path.to_path_buf(),
            project_name,
            config,
            graph,
        })
    }
}

/// Explicit config file, else `.modbound.toml` in `dir`, then command-line overrides.
/// Validation runs once, after the overrides are applied.
pub fn resolve_config(
    dir: Option<&Path>,
    args: &ConfigArgs,
    fs: &dyn FileSystem,
) -> Result<Config, i32> {
    let loaded = match (&args.config, dir) {
        (Some(file), _) => Config::load_file_with_fs(file, fs),
        (None, Some(dir)) => Config::load_with_fs(dir, fs),
        (None, None) => Ok(Config::default()),
    };

    let config = match loaded {
        Ok(config) => config.with_overrides(args.marker.as_deref(), args.public.as_deref()),
        Err(e) => {
            style::error(&format!("Failed to load config: {}", e));
            return Err(EXIT_SETUP);
        }
    };

    if let Err(e) = config.validate() {
        style::error(&format!("Invalid configuration: {}", e));
        return Err(EXIT_SETUP);
    }

    Ok(config)
}
