use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "jlg")]
#[command(about = "Japanese local government code toolkit")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to an optional TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Tokenize an address into prefecture, municipality and rest
    Parse { address: String },

    /// Resolve an address to its local government code
    Resolve {
        address: String,
        /// Municipalities CSV to load (overrides config)
        #[arg(long)]
        data: Option<PathBuf>,
    },

    /// Validate a 6-digit code and show its decomposition
    Validate { code: String },

    /// Load a municipalities CSV and report what would be stored
    Import {
        /// CSV path (defaults to the configured data file)
        #[arg(long)]
        path: Option<PathBuf>,
        /// Mark codes missing from the CSV as deprecated (full datasets only)
        #[arg(long)]
        deprecate: bool,
    },

    /// Fetch the latest reference data and rewrite the local CSV
    Update {
        /// Output CSV path (defaults to the configured data file)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// List active municipalities of a prefecture, in code order
    List {
        /// 2-digit prefecture code, e.g. 13
        prefecture_code: String,
        /// Municipalities CSV to load (overrides config)
        #[arg(long)]
        data: Option<PathBuf>,
    },
}
