//! # CLI Argument Definitions
//!
//! This module defines the command-line interface (CLI) structure using the `clap` crate.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "encontra-probe")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Inspect how the Encontra engine resolves hosts, venues and plans")]
pub struct Cli {
    /// Configuration file (`encontra.toml` in the working directory by default)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: ProbeCommands,
}

#[derive(Debug, Subcommand)]
pub enum ProbeCommands {
    /// Resolve the region of a request host
    Region {
        /// Value of the `Host` header, e.g. `tdf.encontra.com.ar`
        host: String,
    },
    /// Render the venue view for a host and slug as JSON
    Venue {
        #[arg(long)]
        host: String,
        #[arg(long)]
        slug: String,
        /// Evaluate opening hours at this RFC 3339 instant instead of now
        #[arg(long)]
        at: Option<String>,
        /// JSON array of venue documents to use instead of the database
        #[arg(long)]
        fixtures: Option<PathBuf>,
    },
    /// Print the plan table as JSON
    Plans {},
    /// Report schedule problems in a fixtures file
    Lint {
        #[arg(long)]
        fixtures: PathBuf,
    },
}
