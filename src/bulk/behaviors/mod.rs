//! Built-in bulk text behaviors.
//!
//! Each behavior inspects the command string for its trigger substrings and,
//! when triggered, rewrites every item (or the join token) of a
//! [`Content`](super::Content).
//!
//! - [`CommaBehavior`] - Add or remove a trailing comma
//! - [`QuoteBehavior`] - Add or remove surrounding quotes
//! - [`WrapBehavior`] - Choose between newline and empty output join

pub mod comma;
pub mod quote;
pub mod wrap;

pub use comma::{add_comma, remove_comma, CommaBehavior, CommaMode};
pub use quote::{add_quotes, remove_quotes, QuoteBehavior, QuoteMode, QuoteStyle};
pub use wrap::WrapBehavior;

/// Check whether any of `triggers` occurs in `command`.
pub(crate) fn contains_any(command: &str, triggers: &[&str]) -> bool {
    triggers.iter().any(|trigger| command.contains(trigger))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_any_matches_substrings() {
        assert!(contains_any("abc-,", &["-,", "-，"]));
        assert!(contains_any("x，", &[",", "，"]));
        assert!(!contains_any("", &[","]));
        assert!(!contains_any("-n", &[]));
    }
}
