//! Surrounding quote behavior.
//!
//! Single-quote triggers are checked before double-quote triggers, and
//! within each style the remove triggers are checked before the add
//! triggers. At most one quote behavior is activated per command.

use std::fmt;

use super::contains_any;
use crate::bulk::Content;

/// Which family of quote characters to work with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteStyle {
    /// `'`, `‘` and `’`.
    Single,
    /// `"`, `“` and `”`.
    Double,
}

impl QuoteStyle {
    /// Styles in activation priority order.
    pub const ALL: [QuoteStyle; 2] = [QuoteStyle::Single, QuoteStyle::Double];

    /// Every character stripped from item ends for this style.
    pub fn chars(&self) -> &'static [char] {
        match self {
            QuoteStyle::Single => &['\'', '‘', '’'],
            QuoteStyle::Double => &['"', '“', '”'],
        }
    }

    /// The ASCII quote used when wrapping.
    pub fn mark(&self) -> char {
        match self {
            QuoteStyle::Single => '\'',
            QuoteStyle::Double => '"',
        }
    }

    pub fn add_triggers(&self) -> &'static [&'static str] {
        match self {
            QuoteStyle::Single => &["'", "‘", "’"],
            QuoteStyle::Double => &["\"", "“", "”"],
        }
    }

    pub fn remove_triggers(&self) -> &'static [&'static str] {
        match self {
            QuoteStyle::Single => &["-'", "-‘", "-’"],
            QuoteStyle::Double => &["-\"", "-“", "-”"],
        }
    }
}

impl fmt::Display for QuoteStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuoteStyle::Single => write!(f, "single"),
            QuoteStyle::Double => write!(f, "double"),
        }
    }
}

/// Whether quotes are added or stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteMode {
    Add,
    Remove,
}

/// Adds or removes surrounding quotes on every item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteBehavior {
    style: QuoteStyle,
    mode: QuoteMode,
}

impl QuoteBehavior {
    pub fn new(style: QuoteStyle, mode: QuoteMode) -> Self {
        Self { style, mode }
    }

    /// Activate from a command string, or `None` when no trigger is present.
    pub fn from_command(command: &str) -> Option<Self> {
        QuoteStyle::ALL.into_iter().find_map(|style| {
            if contains_any(command, style.remove_triggers()) {
                Some(Self::new(style, QuoteMode::Remove))
            } else if contains_any(command, style.add_triggers()) {
                Some(Self::new(style, QuoteMode::Add))
            } else {
                None
            }
        })
    }

    pub fn style(&self) -> QuoteStyle {
        self.style
    }

    pub fn mode(&self) -> QuoteMode {
        self.mode
    }

    /// Transform a single item.
    pub fn apply(&self, item: &str) -> String {
        match self.mode {
            QuoteMode::Add => add_quotes(item, self.style),
            QuoteMode::Remove => remove_quotes(item, self.style),
        }
    }

    pub fn handle_content(&self, content: &mut Content) {
        content.map_items(|item| self.apply(item));
    }
}

impl fmt::Display for QuoteBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mode {
            QuoteMode::Add => write!(f, "quote: add {}", self.style),
            QuoteMode::Remove => write!(f, "quote: remove {}", self.style),
        }
    }
}

/// Strip quote characters of `style` from both ends, then wrap in its ASCII mark.
pub fn add_quotes(item: &str, style: QuoteStyle) -> String {
    let mark = style.mark();
    format!("{mark}{}{mark}", remove_quotes(item, style))
}

/// Strip quote characters of `style` from both ends.
pub fn remove_quotes(item: &str, style: QuoteStyle) -> String {
    item.trim_matches(style.chars()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_add_trigger() {
        let behavior = QuoteBehavior::from_command("'").unwrap();
        assert_eq!(behavior.style(), QuoteStyle::Single);
        assert_eq!(behavior.mode(), QuoteMode::Add);

        let behavior = QuoteBehavior::from_command("’").unwrap();
        assert_eq!(behavior.mode(), QuoteMode::Add);
    }

    #[test]
    fn single_remove_wins_over_add() {
        let behavior = QuoteBehavior::from_command("-'").unwrap();
        assert_eq!(behavior.style(), QuoteStyle::Single);
        assert_eq!(behavior.mode(), QuoteMode::Remove);
    }

    #[test]
    fn double_triggers() {
        let behavior = QuoteBehavior::from_command("“").unwrap();
        assert_eq!(behavior.style(), QuoteStyle::Double);
        assert_eq!(behavior.mode(), QuoteMode::Add);

        let behavior = QuoteBehavior::from_command("-\"").unwrap();
        assert_eq!(behavior.style(), QuoteStyle::Double);
        assert_eq!(behavior.mode(), QuoteMode::Remove);
    }

    #[test]
    fn single_wins_over_double() {
        let behavior = QuoteBehavior::from_command("\"'").unwrap();
        assert_eq!(behavior.style(), QuoteStyle::Single);
        assert_eq!(behavior.mode(), QuoteMode::Add);

        let behavior = QuoteBehavior::from_command("-\" '").unwrap();
        assert_eq!(behavior.style(), QuoteStyle::Single);
        assert_eq!(behavior.mode(), QuoteMode::Add);
    }

    #[test]
    fn no_trigger_does_not_activate() {
        assert!(QuoteBehavior::from_command("").is_none());
        assert!(QuoteBehavior::from_command(",-n").is_none());
    }

    #[test]
    fn add_quotes_normalizes_existing_marks() {
        assert_eq!(add_quotes("a", QuoteStyle::Single), "'a'");
        assert_eq!(add_quotes("‘a’", QuoteStyle::Single), "'a'");
        assert_eq!(add_quotes("“a", QuoteStyle::Double), "\"a\"");
    }

    #[test]
    fn remove_quotes_strips_both_ends_only() {
        assert_eq!(remove_quotes("'it's'", QuoteStyle::Single), "it's");
        assert_eq!(remove_quotes("1'", QuoteStyle::Single), "1");
        assert_eq!(remove_quotes("\"a\"", QuoteStyle::Single), "\"a\"");
        assert_eq!(remove_quotes("”a“", QuoteStyle::Double), "a");
    }

    #[test]
    fn handle_content_rewrites_every_item() {
        let mut content = Content::load("1\n'2'\n3'");
        QuoteBehavior::new(QuoteStyle::Single, QuoteMode::Add).handle_content(&mut content);
        assert_eq!(content.items(), ["'1'", "'2'", "'3'"]);
    }

    #[test]
    fn display_names_style_and_mode() {
        let behavior = QuoteBehavior::new(QuoteStyle::Double, QuoteMode::Remove);
        assert_eq!(behavior.to_string(), "quote: remove double");
    }
}
