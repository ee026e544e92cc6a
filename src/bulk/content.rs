//! Item container for bulk text processing.

/// Ordered, trimmed, non-blank lines plus the token used to join them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Content {
    items: Vec<String>,
    join: String,
}

impl Content {
    /// Create content from already-prepared items with an empty join token.
    pub fn new(items: Vec<String>) -> Self {
        Self {
            items,
            join: String::new(),
        }
    }

    /// Load content from raw input text.
    ///
    /// Every line is trimmed and blank lines are dropped. Whitespace-only
    /// input yields no items.
    ///
    /// # Example
    ///
    /// ```
    /// use cliptools::bulk::Content;
    ///
    /// let content = Content::load("  a \n\n b\n");
    /// assert_eq!(content.items(), ["a", "b"]);
    /// ```
    pub fn load(raw: &str) -> Self {
        let items = raw
            .split('\n')
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        Self::new(items)
    }

    /// The current items, in input order.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if there are no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Replace the item at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn set_item(&mut self, index: usize, value: impl Into<String>) {
        assert!(
            index < self.items.len(),
            "item index {} out of range for {} items",
            index,
            self.items.len()
        );
        self.items[index] = value.into();
    }

    /// Rewrite every item through `f`.
    pub fn map_items(&mut self, f: impl Fn(&str) -> String) {
        for index in 0..self.items.len() {
            let updated = f(&self.items[index]);
            self.set_item(index, updated);
        }
    }

    /// The token placed between items on output.
    pub fn join(&self) -> &str {
        &self.join
    }

    /// Overwrite the join token.
    pub fn set_join(&mut self, join: impl Into<String>) {
        self.join = join.into();
    }

    /// Join all items with the current join token.
    pub fn output(&self) -> String {
        self.items.join(&self.join)
    }
}
