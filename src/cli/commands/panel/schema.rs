use crate::{
    cli::{CliError, Command, CommandResult, types::CommandMetadata},
    config::PanelConfig,
};

/// Prints the JSON Schema of panel documents.
pub struct SchemaCommand;

impl Command for SchemaCommand {
    fn execute(&self, _args: &[String]) -> CommandResult {
        serde_json::to_string_pretty(&PanelConfig::json_schema())
            .map_err(|e| CliError::ConfigError(e.to_string()))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "schema".to_string(),
            description: "Print the JSON Schema of panel documents".to_string(),
            category: "panel".to_string(),
            args: vec![],
            examples: vec!["panelconf panel schema > panel.schema.json".to_string()],
        }
    }
}
