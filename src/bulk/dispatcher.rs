//! Behavior dispatching.
//!
//! A [`Dispatcher`] is built once per invocation from a command string. It
//! asks every registered kind to activate itself, orders the activated
//! behaviors by priority, and applies them to a [`Content`].

use super::{Behavior, BehaviorRegistry, Content};

/// Ordered list of behaviors activated by one command string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dispatcher {
    behaviors: Vec<Behavior>,
}

impl Dispatcher {
    /// Activate behaviors from `command` against the given registry.
    ///
    /// Behaviors are sorted by priority. The sort is stable, so kinds with
    /// equal priority keep registry order.
    ///
    /// # Example
    ///
    /// ```
    /// use cliptools::bulk::{BehaviorRegistry, Content, Dispatcher};
    ///
    /// let registry = BehaviorRegistry::with_builtins();
    /// let dispatcher = Dispatcher::from_command(&registry, "',");
    ///
    /// let mut content = Content::load("a\nb");
    /// dispatcher.handle_content(&mut content);
    /// assert_eq!(content.output(), "'a',\n'b',");
    /// ```
    pub fn from_command(registry: &BehaviorRegistry, command: &str) -> Self {
        let mut behaviors: Vec<Behavior> = registry
            .iter()
            .filter_map(|kind| kind.try_activate(command))
            .collect();
        behaviors.sort_by_key(Behavior::priority);

        tracing::debug!(
            "Command {:?} activated: {}",
            command,
            behaviors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        );

        Self { behaviors }
    }

    /// Activated behaviors, in application order.
    pub fn behaviors(&self) -> &[Behavior] {
        &self.behaviors
    }

    /// Apply every activated behavior to `content`, in order.
    pub fn handle_content(&self, content: &mut Content) {
        for behavior in &self.behaviors {
            behavior.handle_content(content);
        }
    }

    /// Load `text`, apply every activated behavior, and return the output.
    pub fn process(&self, text: &str) -> String {
        let mut content = Content::load(text);
        self.handle_content(&mut content);
        content.output()
    }
}
