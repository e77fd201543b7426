pub mod analysis;
pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod fs;
pub mod graph;
pub mod model;
pub mod output;
pub mod style;

pub use analysis::{ModulePathClassifier, PublicSurfacePolicy, RuleEngine, SliceAssigner};
pub use api::{CheckOptions, ModboundError, check_file, check_graph};
pub use cli::Cli;
pub use commands::{cmd_check, cmd_classify, cmd_deps, cmd_init, cmd_layers, cmd_slices};
pub use config::{Config, ConfigError};
pub use graph::{DependencyGraph, GraphBuilder, GraphError, UnitId};
pub use model::{
    CodeUnit, ConformanceReport, Layer, ModuleDescriptor, ModuleName, RuleKind, SliceIdentifier,
    Violation,
};
