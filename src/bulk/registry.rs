//! Behavior registry.
//!
//! The [`BehaviorRegistry`] is an explicitly declared, ordered list of
//! behavior kinds. Declaration order breaks ties between kinds that share
//! a priority.

use super::BehaviorKind;

/// Ordered list of behavior kinds known to a dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BehaviorRegistry {
    kinds: Vec<BehaviorKind>,
}

impl BehaviorRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self { kinds: Vec::new() }
    }

    /// Create a registry with all built-in kinds.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(BehaviorKind::Comma);
        registry.register(BehaviorKind::Quote);
        registry.register(BehaviorKind::Wrap);
        registry
    }

    /// Register a kind. Registering the same kind twice has no effect.
    pub fn register(&mut self, kind: BehaviorKind) {
        if !self.kinds.contains(&kind) {
            self.kinds.push(kind);
        }
    }

    /// Iterate over kinds in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = BehaviorKind> + '_ {
        self.kinds.iter().copied()
    }

    /// Get the number of registered kinds.
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

impl Default for BehaviorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
