//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Pagesplit single-page-site splitter CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Site root directory
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Source document path (relative to site root)
    #[arg(short, long)]
    pub source: Option<PathBuf>,

    /// Output directory path (relative to site root)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file name (default: pagesplit.toml)
    #[arg(short = 'C', long, default_value = "pagesplit.toml")]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Split the source document into standalone per-page files
    Split,

    /// Re-assemble every page from already-split files
    Restitch,

    /// Verify the split output against the page registry
    Check,

    /// Recover modal snippets from a version-control revision of the source
    Modals {
        /// Revision passed to `git show` (default: HEAD)
        #[arg(short = 'r', long)]
        revision: Option<String>,

        /// Repository-relative file to scan
        #[arg(short, long)]
        file: Option<String>,
    },
}

#[allow(unused)]
impl Cli {
    pub const fn is_split(&self) -> bool {
        matches!(self.command, Commands::Split)
    }
    pub const fn is_restitch(&self) -> bool {
        matches!(self.command, Commands::Restitch)
    }
    pub const fn is_check(&self) -> bool {
        matches!(self.command, Commands::Check)
    }
    pub const fn is_modals(&self) -> bool {
        matches!(self.command, Commands::Modals { .. })
    }
}
