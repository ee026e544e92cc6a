//! Trailing comma behavior.
//!
//! Triggered by `,` or `，` (add) and `-,` or `-，` (remove). Remove triggers
//! contain the add triggers as substrings, so they are checked first.

use std::fmt;

use super::contains_any;
use crate::bulk::Content;

/// Triggers that select [`CommaMode::Add`].
pub const ADD_TRIGGERS: &[&str] = &[",", "，"];

/// Triggers that select [`CommaMode::Remove`].
pub const REMOVE_TRIGGERS: &[&str] = &["-,", "-，"];

const COMMAS: &[char] = &[',', '，'];

/// Whether commas are appended or stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommaMode {
    Add,
    Remove,
}

/// Adds or removes a trailing comma on every item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommaBehavior {
    mode: CommaMode,
}

impl CommaBehavior {
    pub fn new(mode: CommaMode) -> Self {
        Self { mode }
    }

    /// Activate from a command string, or `None` when no trigger is present.
    pub fn from_command(command: &str) -> Option<Self> {
        if contains_any(command, REMOVE_TRIGGERS) {
            Some(Self::new(CommaMode::Remove))
        } else if contains_any(command, ADD_TRIGGERS) {
            Some(Self::new(CommaMode::Add))
        } else {
            None
        }
    }

    pub fn mode(&self) -> CommaMode {
        self.mode
    }

    /// Transform a single item.
    pub fn apply(&self, item: &str) -> String {
        match self.mode {
            CommaMode::Add => add_comma(item),
            CommaMode::Remove => remove_comma(item),
        }
    }

    pub fn handle_content(&self, content: &mut Content) {
        content.map_items(|item| self.apply(item));
    }
}

impl fmt::Display for CommaBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mode {
            CommaMode::Add => write!(f, "comma: add"),
            CommaMode::Remove => write!(f, "comma: remove"),
        }
    }
}

/// Strip any trailing comma variants, then append an ASCII comma.
pub fn add_comma(item: &str) -> String {
    format!("{},", remove_comma(item))
}

/// Strip any trailing comma variants.
pub fn remove_comma(item: &str) -> String {
    item.trim_end_matches(COMMAS).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_trigger_activates_add() {
        let behavior = CommaBehavior::from_command(",").unwrap();
        assert_eq!(behavior.mode(), CommaMode::Add);

        let behavior = CommaBehavior::from_command("'，").unwrap();
        assert_eq!(behavior.mode(), CommaMode::Add);
    }

    #[test]
    fn remove_wins_over_add() {
        let behavior = CommaBehavior::from_command(", -,").unwrap();
        assert_eq!(behavior.mode(), CommaMode::Remove);

        let behavior = CommaBehavior::from_command("-，").unwrap();
        assert_eq!(behavior.mode(), CommaMode::Remove);
    }

    #[test]
    fn no_trigger_does_not_activate() {
        assert!(CommaBehavior::from_command("").is_none());
        assert!(CommaBehavior::from_command("-n '").is_none());
    }

    #[test]
    fn add_comma_replaces_existing_variants() {
        assert_eq!(add_comma("a"), "a,");
        assert_eq!(add_comma("a,"), "a,");
        assert_eq!(add_comma("a，,，"), "a,");
    }

    #[test]
    fn remove_comma_strips_only_trailing() {
        assert_eq!(remove_comma("a,b,"), "a,b");
        assert_eq!(remove_comma("a，"), "a");
        assert_eq!(remove_comma(",a"), ",a");
    }

    #[test]
    fn remove_comma_is_idempotent() {
        for item in ["x", "x,", "x，,", ",,", ""] {
            let once = remove_comma(item);
            assert_eq!(remove_comma(&once), once);
        }
    }

    #[test]
    fn add_then_remove_restores_item() {
        for item in ["1", "abc", "'q'", "a,b"] {
            assert_eq!(remove_comma(&add_comma(item)), item);
        }
    }

    #[test]
    fn handle_content_rewrites_every_item() {
        let mut content = Content::load("1\n2,\n3，");
        CommaBehavior::new(CommaMode::Add).handle_content(&mut content);
        assert_eq!(content.items(), ["1,", "2,", "3,"]);
    }

    #[test]
    fn display_names_mode() {
        assert_eq!(CommaBehavior::new(CommaMode::Add).to_string(), "comma: add");
        assert_eq!(
            CommaBehavior::new(CommaMode::Remove).to_string(),
            "comma: remove"
        );
    }
}
