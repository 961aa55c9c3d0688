use crate::{
    cli::{CliError, Command, CommandResult, types::CommandMetadata},
    config::PanelConfig,
};

/// Prints the built-in stock panel document.
pub struct DefaultCommand;

impl Command for DefaultCommand {
    fn execute(&self, _args: &[String]) -> CommandResult {
        PanelConfig::default()
            .to_json_string()
            .map_err(|e| CliError::ConfigError(e.to_string()))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "default".to_string(),
            description: "Print the built-in default panel".to_string(),
            category: "panel".to_string(),
            args: vec![],
            examples: vec!["panelconf panel default > bottom.js".to_string()],
        }
    }
}
