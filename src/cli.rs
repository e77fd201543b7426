use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "modbound")]
#[command(about = "Check module boundaries in a static dependency graph")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log rule evaluation details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Evaluate all module boundary rules (exit code 1 on violations)
    Check(CheckArgs),

    /// List each code unit with its direct dependencies
    Deps(ListArgs),

    /// List the slice each code unit is assigned to
    Slices(ListArgs),

    /// List code units per layer
    Layers(LayersArgs),

    /// Classify a single package path against the configuration
    Classify(ClassifyArgs),

    /// Generate a starter .modbound.toml configuration file
    Init(InitArgs),
}

/// Configuration overrides shared by every command that reads a graph.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Config file (defaults to .modbound.toml next to the graph)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Path segment that marks the root of the modules
    #[arg(long)]
    pub marker: Option<String>,

    /// Public subpackages of every module (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub public: Option<Vec<String>>,
}

#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Graph document (JSON, or TOML with a .toml extension)
    pub graph: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "markdown")]
    pub format: OutputFormat,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Include the per-layer unit inventory in the report
    #[arg(long)]
    pub units: bool,

    /// Only evaluate these rules (slice-encapsulation, layered-access, cross-module-internals)
    #[arg(long = "rule", value_delimiter = ',')]
    pub rules: Vec<crate::model::RuleKind>,

    #[command(flatten)]
    pub config: ConfigArgs,
}

#[derive(Parser, Debug, Clone)]
pub struct ListArgs {
    /// Graph document (JSON, or TOML with a .toml extension)
    pub graph: PathBuf,

    #[command(flatten)]
    pub config: ConfigArgs,
}

#[derive(Parser, Debug, Clone)]
pub struct LayersArgs {
    /// Graph document (JSON, or TOML with a .toml extension)
    pub graph: PathBuf,

    /// Only list units of this layer (public-module, non-public-module, non-module)
    #[arg(long)]
    pub layer: Option<crate::model::Layer>,

    #[command(flatten)]
    pub config: ConfigArgs,
}

#[derive(Parser, Debug, Clone)]
pub struct ClassifyArgs {
    /// Dotted package path, e.g. se.shop.modules.cart.api
    pub package: String,

    #[command(flatten)]
    pub config: ConfigArgs,
}

#[derive(Parser, Debug, Clone)]
pub struct InitArgs {
    /// Directory where to create .modbound.toml (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Markdown,
    Json,
}
