//! CLI surface
//!
//! Two unrelated utilities behind one binary: the tokenizer bridge sidecar
//! and the directory dumper.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// vecx-tools - tokenizer sidecar bridge and source-tree dump utilities
#[derive(Parser)]
#[command(name = "vecx-tools")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the line-delimited tokenizer protocol on stdin/stdout
    Serve {
        /// Tokenizer directory or tokenizer.json path (overrides config)
        #[arg(long, short)]
        model: Option<String>,
    },

    /// Dump a directory tree into a single annotated text file
    Dump {
        /// Source directory to walk
        dir: PathBuf,

        /// Output file path (overrides config)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}
