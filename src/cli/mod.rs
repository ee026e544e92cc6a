//! Command-line interface for cliptools.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations
//! - [`input`] - Input sources and result delivery

pub mod args;
pub mod commands;
pub mod input;

pub use args::{
    BehaviorsArgs, BulkArgs, Cli, Commands, CompletionsArgs, InputArgs, TransformArgs,
};
pub use commands::{Command, CommandDispatcher};
pub use input::InputSource;
