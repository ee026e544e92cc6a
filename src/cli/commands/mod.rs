//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Every transform command reads its
//! input through [`InputArgs`](crate::cli::InputArgs) and writes the result
//! through the [`UserInterface`](crate::ui::UserInterface).

pub mod behaviors;
pub mod bulk;
pub mod comments;
pub mod completions;
pub mod dispatcher;
pub mod titles;

pub use dispatcher::{Command, CommandDispatcher};
