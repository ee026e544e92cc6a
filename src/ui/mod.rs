//! Terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait so commands can be tested without a terminal
//! - [`TerminalUI`] writing results to stdout and status to stderr
//! - [`MockUI`] capturing everything for assertions
//! - [`Table`] for aligned listings
//!
//! Transformed text is always written through [`UserInterface::output`] so
//! that stdout carries nothing but the result.

pub mod mock;
pub mod table;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use table::Table;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, ClipTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Emit a command result on stdout.
    fn output(&mut self, text: &str);

    /// Display requested detail on stderr. Not silenced by `--quiet`.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);
}
