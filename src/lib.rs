//! cliptools - Rule-based clipboard text transformations.
//!
//! Small text utilities meant to run as launcher "quick commands": they take
//! clipboard-sized text, apply a rule-based transformation, and print the
//! result.
//!
//! # Modules
//!
//! - [`bulk`] - Line-wise rewriting driven by a free-text command string
//! - [`transform`] - Whole-text transforms (comment markers, markdown titles)
//! - [`cli`] - Command-line interface and argument parsing
//! - [`clipboard`] - System clipboard access
//! - [`error`] - Error types and result aliases
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use cliptools::process_bulk;
//!
//! // Quote every line, then append a comma
//! assert_eq!(process_bulk("1\n2\n3", "'，"), "'1',\n'2',\n'3',");
//!
//! // Append commas and join on one line
//! assert_eq!(process_bulk("1\n2\n3", ",-n"), "1,2,3,");
//! ```

pub mod bulk;
pub mod cli;
pub mod clipboard;
pub mod error;
pub mod transform;
pub mod ui;

pub use bulk::process_bulk;
pub use error::{ClipError, Result};
