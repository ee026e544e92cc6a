//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying results and status
    ///
    /// # Errors
    ///
    /// Fails when input cannot be read or the clipboard cannot be written.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<()>;
}

/// Dispatches CLI commands to their implementations.
#[derive(Debug, Default)]
pub struct CommandDispatcher;

impl CommandDispatcher {
    /// Create a new dispatcher.
    pub fn new() -> Self {
        Self
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<()> {
        match &cli.command {
            Commands::Bulk(args) => super::bulk::BulkCommand::new(args.clone()).execute(ui),
            Commands::Comments(args) => {
                super::comments::CommentsCommand::new(args.clone()).execute(ui)
            }
            Commands::Titles(args) => super::titles::TitlesCommand::new(args.clone()).execute(ui),
            Commands::Behaviors(args) => {
                super::behaviors::BehaviorsCommand::new(args.clone()).execute(ui)
            }
            Commands::Completions(args) => {
                super::completions::CompletionsCommand::new(args.clone()).execute(ui)
            }
        }
    }
}
