//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Build, inspect, and flatten hierarchical file trees from flat catalog listings
#[derive(Parser, Debug)]
#[command(name = "pathtree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug output (-d, -dd, -ddd)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub debug: u8,

    /// Treat input as a JSON listing regardless of extension
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render listing as a directory tree
    Show {
        /// Listing file, '-' for stdin
        #[arg(value_hint = ValueHint::FilePath)]
        listing: PathBuf,

        /// Label for the synthetic root line
        #[arg(short, long, default_value = ".")]
        root: String,
    },

    /// Flatten listing back to full paths (one per line)
    Paths {
        /// Listing file, '-' for stdin
        #[arg(value_hint = ValueHint::FilePath)]
        listing: PathBuf,

        /// Prefix every path with this base
        #[arg(short, long)]
        base: Option<String>,
    },

    /// Report shadowed records and duplicate ids (exit 1 on findings)
    Check {
        /// Listing file, '-' for stdin
        #[arg(value_hint = ValueHint::FilePath)]
        listing: PathBuf,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
