use std::sync::Arc;

use crate::cli::{
    CliError, Command, CommandResult, PanelSource,
    types::CommandMetadata,
};

use super::{first_arg, panel_arg};

/// Prints a panel document with every default filled in.
pub struct NormalizeCommand {
    source: Arc<PanelSource>,
}

impl NormalizeCommand {
    /// Creates a new NormalizeCommand.
    pub fn new(source: Arc<PanelSource>) -> Self {
        Self { source }
    }
}

impl Command for NormalizeCommand {
    fn execute(&self, args: &[String]) -> CommandResult {
        let panel = first_arg(args, "normalize")?;
        let config = self.source.load(panel)?;

        config
            .to_json_string()
            .map_err(|e| CliError::ConfigError(e.to_string()))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "normalize".to_string(),
            description: "Print the document with defaults applied".to_string(),
            category: "panel".to_string(),
            args: vec![panel_arg()],
            examples: vec!["panelconf panel normalize bottom > bottom.js".to_string()],
        }
    }
}
