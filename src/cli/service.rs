use std::sync::Arc;

use super::{
    CliError, CommandRegistry, PanelSource,
    formatting::{format_category, format_command, format_description, format_header, format_usage},
};

/// High-level service for managing and executing CLI commands.
///
/// Provides a unified interface for command registration, discovery, and execution.
/// Commands are organized by category and can be listed or executed by name.
pub struct CliService {
    registry: CommandRegistry,
}

impl CliService {
    /// Creates a new CLI service with all available commands registered.
    ///
    /// # Arguments
    /// * `source` - Resolver for the `<panel>` argument shared by all commands
    pub fn new(source: PanelSource) -> Self {
        let mut registry = CommandRegistry::new(Arc::new(source));
        registry.register_all_commands();

        CliService { registry }
    }

    /// Executes a command by category and name with the provided arguments.
    ///
    /// # Errors
    /// Returns `CliError::CommandNotFound` if the command doesn't exist in the category.
    /// Other errors come from the command itself.
    pub fn execute_command(
        &self,
        category: &str,
        command_name: &str,
        args: &[String],
    ) -> Result<String, CliError> {
        self.registry.execute(category, command_name, args)
    }

    /// Lists all available command names organized by category.
    pub fn list_all(&self) -> Vec<(String, Vec<String>)> {
        self.registry
            .list_commands()
            .into_iter()
            .map(|(category, commands)| {
                let names = commands.into_iter().map(|command| command.name).collect();
                (category, names)
            })
            .collect()
    }

    /// Renders help for every registered command.
    pub fn help(&self) -> String {
        let mut out = format!("{}\n", format_header("panelconf - panel document tools"));
        out.push_str(&format_usage("usage: panelconf <category> <command> [args...]"));
        out.push('\n');

        for (category, commands) in self.registry.list_commands() {
            out.push_str(&format!("\n{}\n", format_category(&category)));

            for command in commands {
                let args: Vec<String> = command
                    .args
                    .iter()
                    .map(|arg| {
                        if arg.required {
                            format!("<{}>", arg.name)
                        } else {
                            format!("[{}]", arg.name)
                        }
                    })
                    .collect();

                out.push_str(&format!(
                    "  {} {}  {}\n",
                    format_command(&command.name),
                    args.join(" "),
                    format_description(&command.description)
                ));

                for arg in &command.args {
                    out.push_str(&format!(
                        "      {:<8} {} ({})\n",
                        arg.name,
                        format_description(&arg.description),
                        arg.value_type.hint()
                    ));
                }

                for example in &command.examples {
                    out.push_str(&format!("      {}\n", format_usage(example)));
                }
            }
        }

        out
    }
}
