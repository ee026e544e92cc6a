//! Output join behavior.
//!
//! Always active: items are joined with a newline unless `-n` or `-N`
//! appears in the command, in which case they are joined with nothing.

use std::fmt;

use super::contains_any;
use crate::bulk::Content;

/// Triggers that suppress the newline join.
pub const SUPPRESS_TRIGGERS: &[&str] = &["-n", "-N"];

/// Sets the join token of the content; never touches item text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrapBehavior {
    wrap: bool,
}

impl WrapBehavior {
    pub fn new(wrap: bool) -> Self {
        Self { wrap }
    }

    /// Activate from a command string. Always returns a behavior.
    pub fn from_command(command: &str) -> Option<Self> {
        Some(Self::new(!contains_any(command, SUPPRESS_TRIGGERS)))
    }

    /// Whether items are joined with a newline.
    pub fn wraps(&self) -> bool {
        self.wrap
    }

    pub fn handle_content(&self, content: &mut Content) {
        content.set_join(if self.wrap { "\n" } else { "" });
    }
}

impl fmt::Display for WrapBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.wrap {
            write!(f, "wrap: newline")
        } else {
            write!(f, "wrap: none")
        }
    }
}
