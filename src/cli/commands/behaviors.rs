//! Behaviors command implementation.
//!
//! The `cliptools behaviors` command lists the behaviors understood by
//! `bulk`, in application order, with their trigger tokens.

use serde::Serialize;

use crate::bulk::{BehaviorKind, BehaviorRegistry, Trigger};
use crate::cli::args::BehaviorsArgs;
use crate::error::Result;
use crate::ui::{Table, UserInterface};

use super::dispatcher::Command;

/// Serializable description of one registered behavior kind.
#[derive(Debug, Clone, Serialize)]
pub struct BehaviorInfo {
    pub id: &'static str,
    pub description: &'static str,
    pub priority: u8,
    pub triggers: Vec<Trigger>,
}

impl From<BehaviorKind> for BehaviorInfo {
    fn from(kind: BehaviorKind) -> Self {
        Self {
            id: kind.id(),
            description: kind.description(),
            priority: kind.priority(),
            triggers: kind.triggers(),
        }
    }
}

/// The behaviors command implementation.
pub struct BehaviorsCommand {
    args: BehaviorsArgs,
    registry: BehaviorRegistry,
}

impl BehaviorsCommand {
    /// Create a new behaviors command for the built-in registry.
    pub fn new(args: BehaviorsArgs) -> Self {
        Self {
            args,
            registry: BehaviorRegistry::with_builtins(),
        }
    }

    /// Registered kinds in application order.
    pub fn infos(&self) -> Vec<BehaviorInfo> {
        let mut infos: Vec<BehaviorInfo> = self.registry.iter().map(BehaviorInfo::from).collect();
        infos.sort_by_key(|info| info.priority);
        infos
    }

    fn render_table(&self, infos: &[BehaviorInfo]) -> String {
        let mut table = Table::new(vec!["Behavior", "Priority", "Mode", "Tokens"]);
        for info in infos {
            for (index, trigger) in info.triggers.iter().enumerate() {
                let (id, priority) = if index == 0 {
                    (info.id.to_string(), info.priority.to_string())
                } else {
                    (String::new(), String::new())
                };
                table.add_row(vec![id, priority, trigger.mode.to_string(), trigger.tokens.join(" ")]);
            }
        }
        table.render()
    }
}

impl Command for BehaviorsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<()> {
        let infos = self.infos();

        if self.args.json {
            let json = serde_json::to_string_pretty(&infos).map_err(anyhow::Error::from)?;
            ui.output(&json);
        } else {
            ui.output(&self.render_table(&infos));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;

    #[test]
    fn infos_are_in_application_order() {
        let command = BehaviorsCommand::new(BehaviorsArgs::default());
        let ids: Vec<_> = command.infos().iter().map(|info| info.id).collect();
        assert_eq!(ids, ["quote", "comma", "wrap"]);
    }

    #[test]
    fn table_lists_every_trigger() {
        let mut ui = MockUI::new();
        BehaviorsCommand::new(BehaviorsArgs::default())
            .execute(&mut ui)
            .unwrap();

        let output = &ui.outputs()[0];
        assert!(output.contains("remove double"));
        assert!(output.contains("-, -，"));
        assert!(output.contains("-n -N"));
    }

    #[test]
    fn json_output_parses() {
        let mut ui = MockUI::new();
        BehaviorsCommand::new(BehaviorsArgs { json: true })
            .execute(&mut ui)
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&ui.outputs()[0]).unwrap();
        assert_eq!(value[0]["id"], "quote");
        assert_eq!(value[1]["priority"], 2);
        assert_eq!(value[1]["triggers"][0]["mode"], "remove");
        assert_eq!(value[2]["triggers"][0]["tokens"][1], "-N");
    }
}
