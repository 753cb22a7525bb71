use anyhow::Result;
use clap::{Parser, Subcommand};
use cagecleaner::algorithm::{dereplication, mapping, validation};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cagecleaner")]
#[command(version = "0.1.0")]
#[command(about = "Dereplicate cblaster gene cluster hits by genome clustering", long_about = None)]
struct Cli {
    /// Log debug messages (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Link hit scaffolds to the genome assemblies containing them
    Map(mapping::MapArgs),

    /// Assign dereplication statuses and recover hits by content and score
    Recover(dereplication::RecoverArgs),

    /// Check a cblaster binary table and summary file
    Validate(validation::ValidateArgs),
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Map(args) => {
            mapping::run(args)?;
        }
        Commands::Recover(args) => {
            dereplication::run(args)?;
        }
        Commands::Validate(args) => {
            validation::run(args)?;
        }
    }
    Ok(())
}
