//! Markdown formatting pipeline.
//!
//! Markdown exported from online note tools tends to be loosely formatted.
//! [`MarkdownFormatter`] runs an ordered list of [`MarkdownFormat`] stages
//! over the whole document.

use std::fmt;

use super::titles::format_titles;

/// A single markdown formatting stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkdownFormat {
    /// Demote headings one level and surround them with blank lines.
    Title,
}

impl MarkdownFormat {
    pub fn id(&self) -> &'static str {
        match self {
            MarkdownFormat::Title => "title",
        }
    }

    pub fn apply(&self, text: &str) -> String {
        match self {
            MarkdownFormat::Title => format_titles(text),
        }
    }
}

impl fmt::Display for MarkdownFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Ordered list of markdown formatting stages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkdownFormatter {
    formats: Vec<MarkdownFormat>,
}

impl MarkdownFormatter {
    /// Create a formatter with no stages.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a formatter with every built-in stage.
    pub fn with_builtins() -> Self {
        let mut formatter = Self::new();
        formatter.register(MarkdownFormat::Title);
        formatter
    }

    /// Append a stage.
    pub fn register(&mut self, format: MarkdownFormat) {
        self.formats.push(format);
    }

    /// Stages in the order they run.
    pub fn formats(&self) -> &[MarkdownFormat] {
        &self.formats
    }

    /// Run every stage over `text`, in order.
    pub fn format(&self, text: &str) -> String {
        self.formats
            .iter()
            .fold(text.to_string(), |current, format| {
                tracing::debug!("Applying markdown format: {}", format);
                format.apply(&current)
            })
    }
}
