//! Bulk command implementation.
//!
//! The `cliptools bulk` command rewrites every non-blank input line
//! according to the behaviors selected by a command string.

use crate::bulk::{BehaviorRegistry, Content, Dispatcher};
use crate::cli::args::BulkArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::Command;

/// The bulk command implementation.
pub struct BulkCommand {
    args: BulkArgs,
    registry: BehaviorRegistry,
}

impl BulkCommand {
    /// Create a new bulk command using the built-in behaviors.
    pub fn new(args: BulkArgs) -> Self {
        Self::with_registry(args, BehaviorRegistry::with_builtins())
    }

    /// Create a bulk command with a custom registry.
    pub fn with_registry(args: BulkArgs, registry: BehaviorRegistry) -> Self {
        Self { args, registry }
    }
}

impl Command for BulkCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<()> {
        let text = self.args.io.read()?;
        let dispatcher = Dispatcher::from_command(&self.registry, self.args.command_str());

        if self.args.explain {
            for (position, behavior) in dispatcher.behaviors().iter().enumerate() {
                ui.message(&format!(
                    "{}. {} (priority {})",
                    position + 1,
                    behavior,
                    behavior.priority()
                ));
            }
        }

        let mut content = Content::load(&text);
        if content.is_empty() {
            ui.warning("Input has no non-blank lines");
        }
        dispatcher.handle_content(&mut content);

        self.args.io.deliver(&content.output(), ui)?;
        Ok(())
    }
}
