//! Panel document commands.
mod check;
mod default;
mod get;
mod normalize;
mod plugins;
mod schema;

use std::sync::Arc;

pub use check::CheckCommand;
pub use default::DefaultCommand;
pub use get::GetCommand;
pub use normalize::NormalizeCommand;
pub use plugins::PluginsCommand;
pub use schema::SchemaCommand;

use crate::cli::{
    CommandRegistry, PanelSource,
    types::{ArgType, CommandArg},
};

/// Registers all panel commands with the command registry.
///
/// # Arguments
///
/// * `registry` - Mutable reference to the command registry
/// * `source` - Shared resolver for the `<panel>` argument
pub fn register_commands(registry: &mut CommandRegistry, source: Arc<PanelSource>) {
    const CATEGORY_NAME: &str = "panel";

    registry.register_command(CATEGORY_NAME, Box::new(CheckCommand::new(source.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(GetCommand::new(source.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(NormalizeCommand::new(source.clone())));
    registry.register_command(CATEGORY_NAME, Box::new(PluginsCommand::new(source)));
    registry.register_command(CATEGORY_NAME, Box::new(DefaultCommand));
    registry.register_command(CATEGORY_NAME, Box::new(SchemaCommand));
}

fn panel_arg() -> CommandArg {
    CommandArg {
        name: "panel".to_string(),
        description: "Panel file path, or panel name in the active profile".to_string(),
        required: true,
        value_type: ArgType::Panel,
    }
}

fn first_arg<'a>(args: &'a [String], command: &str) -> Result<&'a str, crate::cli::CliError> {
    args.first().map(String::as_str).ok_or_else(|| {
        crate::cli::CliError::InvalidArguments(format!(
            "Expected <panel> argument for '{command}' command"
        ))
    })
}
