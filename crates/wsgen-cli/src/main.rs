//! wsgen CLI - ksoap2 client and Room persistence generator
//!
//! Commands:
//! - `wsgen generate` - Generate sources from a metadata document
//! - `wsgen check` - Validate a metadata document and configuration

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod generate;
mod logging;
mod manifest;

#[derive(Parser)]
#[command(name = "wsgen")]
#[command(author, version, about = "ksoap2 client and Room persistence generator", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate client, wrapper and persistence sources
    Generate {
        /// Path to the JSON metadata document
        #[arg(short, long)]
        metadata: PathBuf,

        /// Output root for generated sources
        #[arg(short, long)]
        output: PathBuf,

        /// Path to wsgen.toml (default: ./wsgen.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Transport flavour (j2me, android), overrides the configuration
        #[arg(short, long)]
        transport: Option<String>,

        /// Use positional names (arg0, arg1, ...) when parameter names are missing
        #[arg(long)]
        synthesize_parameter_names: bool,

        /// Generate in memory and list the files without writing them
        #[arg(long)]
        dry_run: bool,
    },

    /// Validate a metadata document and list what would be generated
    Check {
        /// Path to the JSON metadata document
        #[arg(short, long)]
        metadata: PathBuf,

        /// Path to wsgen.toml (default: ./wsgen.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::Generate {
            metadata,
            output,
            config,
            transport,
            synthesize_parameter_names,
            dry_run,
        } => {
            generate::run(&generate::GenerateOptions {
                metadata,
                output,
                config,
                transport,
                synthesize_parameter_names,
                dry_run,
            })?;
        }
        Commands::Check { metadata, config } => {
            generate::check(&metadata, config.as_deref())?;
        }
    }

    Ok(())
}
