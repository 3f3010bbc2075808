//! Command-line interface definitions.
//!
//! Defines the CLI structure for the grossup application using `clap`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Listing price calculator: how much to ask so a marketplace leaves you your target
#[derive(Parser, Debug)]
#[command(name = "grossup")]
#[command(version, about)]
pub struct Cli {
    /// Path to configuration file [default: ~/.grossup/config.toml if present]
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands for the grossup CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the listing price that nets a target amount
    Quote(QuoteArgs),

    /// List registered marketplaces and their fee rules
    Marketplaces,

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `grossup config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Generate a new configuration file from template.
    Init(ConfigInitArgs),
    /// Display the effective configuration with defaults applied.
    Show,
    /// Validate a configuration file for correctness.
    Validate,
}

/// Arguments for the `quote` subcommand.
#[derive(Parser, Debug)]
pub struct QuoteArgs {
    /// Marketplace identifier (see `grossup marketplaces`)
    pub marketplace: String,

    /// Amount you want to keep per item, e.g. 60 or 60,50
    #[arg(allow_hyphen_values = true)]
    pub target: String,
}

/// Arguments for the `config init` subcommand.
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Where to write the file [default: ~/.grossup/config.toml]
    pub path: Option<PathBuf>,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}
