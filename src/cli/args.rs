//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// cliptools - Rule-based clipboard text transformations.
#[derive(Debug, Parser)]
#[command(name = "cliptools")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Do not print success notices such as "Copied to clipboard"
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(
        long,
        global = true,
        env = "CLIPTOOLS_DEBUG",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Rewrite every line of the input according to a command string
    Bulk(BulkArgs),

    /// Convert `//` comment markers to `#`
    Comments(TransformArgs),

    /// Demote markdown headings and pad them with blank lines
    Titles(TransformArgs),

    /// List the behaviors understood by `bulk`
    Behaviors(BehaviorsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Where input text comes from and where results go.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InputArgs {
    /// Text to transform (default: read stdin)
    #[arg(long, value_name = "TEXT", conflicts_with = "clipboard")]
    pub input: Option<String>,

    /// Read the text from the system clipboard
    #[arg(long)]
    pub clipboard: bool,

    /// Also copy the result to the system clipboard
    #[arg(long)]
    pub copy: bool,
}

/// Arguments for the `bulk` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct BulkArgs {
    /// Command string, e.g. "," or "'，" or "-,-n" (use `--` before values starting with `-`)
    #[arg(allow_hyphen_values = true)]
    pub command: Option<String>,

    /// Print the activated behaviors to stderr
    #[arg(long)]
    pub explain: bool,

    #[command(flatten)]
    pub io: InputArgs,
}

impl BulkArgs {
    /// The command string, empty when none was given.
    pub fn command_str(&self) -> &str {
        self.command.as_deref().unwrap_or("")
    }
}

/// Arguments for the whole-text transform commands.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct TransformArgs {
    #[command(flatten)]
    pub io: InputArgs,
}

/// Arguments for the `behaviors` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct BehaviorsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
