//! Titles command implementation.
//!
//! The `cliptools titles` command runs the markdown formatting pipeline,
//! which demotes headings and surrounds them with blank lines.

use crate::cli::args::TransformArgs;
use crate::error::Result;
use crate::transform::MarkdownFormatter;
use crate::ui::UserInterface;

use super::dispatcher::Command;

/// The titles command implementation.
pub struct TitlesCommand {
    args: TransformArgs,
    formatter: MarkdownFormatter,
}

impl TitlesCommand {
    /// Create a new titles command with the built-in markdown stages.
    pub fn new(args: TransformArgs) -> Self {
        Self {
            args,
            formatter: MarkdownFormatter::with_builtins(),
        }
    }
}

impl Command for TitlesCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<()> {
        let text = self.args.io.read()?;
        self.args.io.deliver(&self.formatter.format(&text), ui)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::InputArgs;
    use crate::ui::MockUI;

    #[test]
    fn formats_input_text() {
        let args = TransformArgs {
            io: InputArgs {
                input: Some("intro\n## Usage\nrun it".into()),
                ..Default::default()
            },
        };
        let mut ui = MockUI::new();
        TitlesCommand::new(args).execute(&mut ui).unwrap();

        assert_eq!(ui.outputs(), ["intro\n\n### Usage\n\nrun it"]);
    }
}
