//! Comments command implementation.
//!
//! The `cliptools comments` command converts `//` comment markers to `#`.

use crate::cli::args::TransformArgs;
use crate::error::Result;
use crate::transform::convert_comments;
use crate::ui::UserInterface;

use super::dispatcher::Command;

/// The comments command implementation.
pub struct CommentsCommand {
    args: TransformArgs,
}

impl CommentsCommand {
    /// Create a new comments command.
    pub fn new(args: TransformArgs) -> Self {
        Self { args }
    }
}

impl Command for CommentsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<()> {
        let text = self.args.io.read()?;
        self.args.io.deliver(&convert_comments(&text), ui)?;
        Ok(())
    }
}
