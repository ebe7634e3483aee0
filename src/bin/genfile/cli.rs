use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "genfile")]
#[command(author, version, about = "Inspect, validate and reformat 3-manifold generator files")]
#[command(propagate_version = true)]
pub struct Cli {
    /// TOML configuration file
    #[arg(long, global = true, env = "SPACEFORMS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Summarize a generator file
    Inspect {
        /// Path to a .gen file
        file: PathBuf,
    },

    /// Check that every generator is an invertible isometry
    Validate {
        /// Path to a .gen file
        file: PathBuf,
    },

    /// Rewrite a generator file in canonical form
    #[command(alias = "fmt")]
    Format {
        /// Path to a .gen file
        file: PathBuf,

        /// Output path (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Fractional digits per entry
        #[arg(long)]
        precision: Option<usize>,
    },
}
