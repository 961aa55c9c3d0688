use std::sync::Arc;

use crate::cli::{
    Command, CommandResult, PanelSource,
    types::CommandMetadata,
};

use super::{first_arg, panel_arg};

/// Loads a panel document and reports whether it is valid.
///
/// # Example Usage
///
/// ```bash
/// panelconf panel check ~/.config/panelconf/default/panels/bottom.js
/// panelconf panel check bottom
/// ```
pub struct CheckCommand {
    source: Arc<PanelSource>,
}

impl CheckCommand {
    /// Creates a new CheckCommand.
    pub fn new(source: Arc<PanelSource>) -> Self {
        Self { source }
    }
}

impl Command for CheckCommand {
    fn execute(&self, args: &[String]) -> CommandResult {
        let panel = first_arg(args, "check")?;
        let config = self.source.load(panel)?;

        let orientation = if config.global.edge.is_vertical() {
            "vertical"
        } else {
            "horizontal"
        };

        Ok(format!(
            "ok: {} plugin(s), edge {} ({orientation}), align {}",
            config.plugins.len(),
            config.global.edge,
            config.global.align
        ))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "check".to_string(),
            description: "Validate a panel document".to_string(),
            category: "panel".to_string(),
            args: vec![panel_arg()],
            examples: vec![
                "panelconf panel check bottom".to_string(),
                "panelconf panel check ./bottom.js".to_string(),
            ],
        }
    }
}
