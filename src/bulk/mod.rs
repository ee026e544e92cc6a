//! Bulk text processing.
//!
//! Multi-line input (for example, a column copied from a spreadsheet) is split
//! into items, one per non-blank line. A free-text command string then selects
//! which behaviors rewrite those items.
//!
//! # Overview
//!
//! - **Content** - The items and the output join token ([`Content`])
//! - **Kinds** - The closed set of behaviors ([`BehaviorKind`])
//! - **Registry** - The ordered list of kinds to consider ([`BehaviorRegistry`])
//! - **Dispatcher** - Activates, orders, and applies behaviors ([`Dispatcher`])
//!
//! # Commands
//!
//! | Tokens | Effect |
//! |---|---|
//! | `,` `，` | add a trailing comma |
//! | `-,` `-，` | remove trailing commas |
//! | `'` `‘` `’` | wrap in single quotes |
//! | `-'` `-‘` `-’` | remove single quotes |
//! | `"` `“` `”` | wrap in double quotes |
//! | `-"` `-“` `-”` | remove double quotes |
//! | `-n` `-N` | join output without newlines |
//!
//! # Example
//!
//! ```
//! use cliptools::bulk::{BehaviorRegistry, Dispatcher};
//!
//! let registry = BehaviorRegistry::with_builtins();
//! let dispatcher = Dispatcher::from_command(&registry, ",-n");
//! assert_eq!(dispatcher.process("1\n2\n3"), "1,2,3,");
//! ```

pub mod behavior;
pub mod behaviors;
pub mod content;
pub mod dispatcher;
pub mod registry;

pub use behavior::{Behavior, BehaviorKind, Trigger};
pub use behaviors::{
    CommaBehavior, CommaMode, QuoteBehavior, QuoteMode, QuoteStyle, WrapBehavior,
};
pub use content::Content;
pub use dispatcher::Dispatcher;
pub use registry::BehaviorRegistry;

/// Process `text` with the built-in behaviors selected by `command`.
pub fn process_bulk(text: &str, command: &str) -> String {
    Dispatcher::from_command(&BehaviorRegistry::with_builtins(), command).process(text)
}
