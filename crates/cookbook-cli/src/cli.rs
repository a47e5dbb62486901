//! CLI argument definitions for the cookbook toolchain.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module. Flags left
//! unset fall back to `cookbook.toml`, then to built-in defaults.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "cookbook",
    version,
    about = "Publish a Quarto course book as a Jupyter Book",
    long_about = "Converts the Quarto book outline into a Jupyter Book table of contents \
                  and merges the per-course conda environments into one environment file."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert _quarto.yml into a Jupyter Book _toc.yml
    Toc {
        /// Destination directory
        out: PathBuf,
        /// Quarto project file holding the book outline
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Merge all environment files into one
    MergeEnvs {
        /// Output file name
        #[arg(long)]
        out: Option<PathBuf>,
        /// Name of the environment
        #[arg(long)]
        name: Option<String>,
        /// Directory searched for environment files
        #[arg(long)]
        root: Option<PathBuf>,
    },

    /// Render the table of contents and the merged environment into one directory
    Build {
        /// Destination directory
        #[arg(long)]
        out: PathBuf,
        /// Name of the environment
        #[arg(long)]
        name: Option<String>,
        /// Directory searched for environment files
        #[arg(long)]
        root: Option<PathBuf>,
    },
}

pub fn parse() -> Cli {
    Cli::parse()
}
