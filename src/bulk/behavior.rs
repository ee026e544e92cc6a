//! Behavior kinds and activated behaviors.
//!
//! This module provides the closed set of bulk text behaviors:
//!
//! - [`BehaviorKind`] - A registrable kind with a fixed priority
//! - [`Behavior`] - An activated, configured instance of a kind
//! - [`Trigger`] - A named group of trigger substrings, for listings

use std::fmt;

use serde::Serialize;

use super::behaviors::{comma, wrap, CommaBehavior, QuoteBehavior, QuoteStyle, WrapBehavior};
use super::Content;

/// A group of trigger substrings that select one mode of a behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trigger {
    /// The mode selected by these tokens (e.g. `"add"`, `"remove single"`).
    pub mode: &'static str,
    /// Any of these substrings activates the mode.
    pub tokens: &'static [&'static str],
}

/// Kinds of behavior that can be registered with a dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BehaviorKind {
    Comma,
    Quote,
    Wrap,
}

impl BehaviorKind {
    /// Stable identifier used in listings.
    pub fn id(&self) -> &'static str {
        match self {
            BehaviorKind::Comma => "comma",
            BehaviorKind::Quote => "quote",
            BehaviorKind::Wrap => "wrap",
        }
    }

    /// Description of what this kind does.
    pub fn description(&self) -> &'static str {
        match self {
            BehaviorKind::Comma => "Add or remove a trailing comma on every item",
            BehaviorKind::Quote => "Add or remove surrounding quotes on every item",
            BehaviorKind::Wrap => "Join items with newlines unless suppressed",
        }
    }

    /// Lower priorities run first.
    pub fn priority(&self) -> u8 {
        match self {
            BehaviorKind::Quote => 1,
            BehaviorKind::Comma => 2,
            BehaviorKind::Wrap => 3,
        }
    }

    /// Trigger groups in the order they are checked.
    pub fn triggers(&self) -> Vec<Trigger> {
        match self {
            BehaviorKind::Comma => vec![
                Trigger {
                    mode: "remove",
                    tokens: comma::REMOVE_TRIGGERS,
                },
                Trigger {
                    mode: "add",
                    tokens: comma::ADD_TRIGGERS,
                },
            ],
            BehaviorKind::Quote => vec![
                Trigger {
                    mode: "remove single",
                    tokens: QuoteStyle::Single.remove_triggers(),
                },
                Trigger {
                    mode: "add single",
                    tokens: QuoteStyle::Single.add_triggers(),
                },
                Trigger {
                    mode: "remove double",
                    tokens: QuoteStyle::Double.remove_triggers(),
                },
                Trigger {
                    mode: "add double",
                    tokens: QuoteStyle::Double.add_triggers(),
                },
            ],
            BehaviorKind::Wrap => vec![Trigger {
                mode: "no newline",
                tokens: wrap::SUPPRESS_TRIGGERS,
            }],
        }
    }

    /// Activate this kind from a command string.
    ///
    /// Returns `None` when none of the kind's triggers are present.
    pub fn try_activate(&self, command: &str) -> Option<Behavior> {
        match self {
            BehaviorKind::Comma => CommaBehavior::from_command(command).map(Behavior::Comma),
            BehaviorKind::Quote => QuoteBehavior::from_command(command).map(Behavior::Quote),
            BehaviorKind::Wrap => WrapBehavior::from_command(command).map(Behavior::Wrap),
        }
    }
}

impl fmt::Display for BehaviorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// An activated behavior carrying its selected mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behavior {
    Comma(CommaBehavior),
    Quote(QuoteBehavior),
    Wrap(WrapBehavior),
}

impl Behavior {
    pub fn kind(&self) -> BehaviorKind {
        match self {
            Behavior::Comma(_) => BehaviorKind::Comma,
            Behavior::Quote(_) => BehaviorKind::Quote,
            Behavior::Wrap(_) => BehaviorKind::Wrap,
        }
    }

    pub fn priority(&self) -> u8 {
        self.kind().priority()
    }

    /// Apply this behavior to the content in place.
    pub fn handle_content(&self, content: &mut Content) {
        match self {
            Behavior::Comma(b) => b.handle_content(content),
            Behavior::Quote(b) => b.handle_content(content),
            Behavior::Wrap(b) => b.handle_content(content),
        }
    }
}

impl fmt::Display for Behavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Behavior::Comma(b) => fmt::Display::fmt(b, f),
            Behavior::Quote(b) => fmt::Display::fmt(b, f),
            Behavior::Wrap(b) => fmt::Display::fmt(b, f),
        }
    }
}
