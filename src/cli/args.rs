//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

/// Interactive word catalog: organize words into named categories with flat-file persistence
#[derive(Parser, Debug)]
#[command(name = "lexicat")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug output (-d, -dd, -ddd for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive menu (default when no command is given)
    Menu,

    /// Print every category in a data file
    Show {
        /// Data file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Print all words across all categories, sorted
    Words {
        /// Data file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Print categories sorted individually (case-insensitive)
    Sorted {
        /// Data file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show,
    /// Print a template config file
    Template,
}
