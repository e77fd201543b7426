use clap::Parser;
use modbound::cli::{Cli, Command};
use modbound::{cmd_check, cmd_classify, cmd_deps, cmd_init, cmd_layers, cmd_slices};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let exit_code = match cli.command {
        Command::Check(args) => cmd_check(args),
        Command::Deps(args) => cmd_deps(args),
        Command::Slices(args) => cmd_slices(args),
        Command::Layers(args) => cmd_layers(args),
        Command::Classify(args) => cmd_classify(args),
        Command::Init(args) => cmd_init(args),
    };

    std::process::exit(exit_code);
}

/// Logs go to stderr; `MODBOUND_LOG` takes env-filter directives, `--verbose` forces debug.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("modbound=debug")
    } else {
        EnvFilter::try_from_env("MODBOUND_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
