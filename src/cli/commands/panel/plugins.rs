use std::sync::Arc;

use crate::cli::{
    Command, CommandResult, PanelSource,
    formatting::format_warning,
    types::CommandMetadata,
};

use super::{first_arg, panel_arg};

/// Lists a panel's plugins in rendering order.
///
/// Types the stock panel does not ship are flagged, since the host needs a
/// third-party plugin to render them.
pub struct PluginsCommand {
    source: Arc<PanelSource>,
}

impl PluginsCommand {
    /// Creates a new PluginsCommand.
    pub fn new(source: Arc<PanelSource>) -> Self {
        Self { source }
    }
}

impl Command for PluginsCommand {
    fn execute(&self, args: &[String]) -> CommandResult {
        let panel = first_arg(args, "plugins")?;
        let config = self.source.load(panel)?;

        let lines: Vec<String> = config
            .plugins
            .iter()
            .enumerate()
            .map(|(index, plugin)| {
                let settings = plugin.settings.as_ref().map_or(0, |s| s.len());
                let mut line = format!(
                    "{index}: {}{} ({settings} setting(s))",
                    plugin.plugin_type,
                    if plugin.expand { " [expand]" } else { "" },
                );
                if !plugin.is_known_type() {
                    line.push_str(&format!(" {}", format_warning("unknown type")));
                }
                line
            })
            .collect();

        Ok(lines.join("\n"))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "plugins".to_string(),
            description: "List plugins in rendering order".to_string(),
            category: "panel".to_string(),
            args: vec![panel_arg()],
            examples: vec!["panelconf panel plugins bottom".to_string()],
        }
    }
}
