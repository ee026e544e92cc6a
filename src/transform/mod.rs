//! Standalone whole-text transforms.
//!
//! Unlike [`bulk`](crate::bulk), these take no command string: each maps a
//! full text blob to a new text blob, line by line.
//!
//! - [`convert_comments`] - `//` comment markers to `#`
//! - [`format_titles`] - Demote markdown headings and pad them with blank lines
//! - [`MarkdownFormatter`] - Ordered pipeline of markdown stages

pub mod comments;
pub mod markdown;
pub mod titles;

pub use comments::convert_comments;
pub use markdown::{MarkdownFormat, MarkdownFormatter};
pub use titles::{format_titles, is_heading};
