use std::sync::Arc;

use crate::cli::{
    CliError, Command, CommandResult, PanelSource,
    formatting::format_json_value,
    types::{ArgType, CommandArg, CommandMetadata},
};

use super::{first_arg, panel_arg};

/// Command for reading a single value out of a panel document.
///
/// Paths are resolved against the document with defaults applied, so
/// options the file omits still report their effective value.
///
/// # Example Usage
///
/// ```bash
/// panelconf panel get bottom global.edge
/// panelconf panel get bottom plugins.2.settings.mode
/// ```
pub struct GetCommand {
    /// Shared resolver for the `<panel>` argument.
    source: Arc<PanelSource>,
}

impl GetCommand {
    /// Creates a new GetCommand with the provided panel source.
    pub fn new(source: Arc<PanelSource>) -> Self {
        Self { source }
    }
}

impl Command for GetCommand {
    /// Loads the panel and formats the value at the given path.
    ///
    /// # Errors
    ///
    /// * `CliError::InvalidArguments` - If no path argument is provided
    /// * `CliError::ConfigError` - If the path does not resolve
    fn execute(&self, args: &[String]) -> CommandResult {
        let panel = first_arg(args, "get")?;
        let path = args.get(1).ok_or_else(|| {
            CliError::InvalidArguments("Expected <path> argument for 'get' command".to_string())
        })?;

        let config = self.source.load(panel)?;
        let value = config
            .get_by_path(path)
            .map_err(|e| CliError::ConfigError(e.to_string()))?;

        Ok(format!("{}: {}", path, format_json_value(&value)))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "get".to_string(),
            description: "Get a value from a panel document".to_string(),
            category: "panel".to_string(),
            args: vec![
                panel_arg(),
                CommandArg {
                    name: "path".to_string(),
                    description: "Dot path into the document (e.g., global.edge)".to_string(),
                    required: true,
                    value_type: ArgType::Path,
                },
            ],
            examples: vec![
                "panelconf panel get bottom global.edge".to_string(),
                "panelconf panel get bottom plugins.0.type".to_string(),
                "panelconf panel get bottom plugins.2.settings.mode".to_string(),
            ],
        }
    }
}
