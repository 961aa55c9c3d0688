//! Panel document schema, loading and validation.
//!
//! A panel document is a JSON object with a `global` section of panel-wide
//! settings and an ordered `plugins` array of widget entries. Every type in
//! this module is serializable back to the same JSON shape.

mod defaults;
mod global;
mod loading;
mod path_ops;
mod paths;
mod plugin;
mod validation;

#[cfg(test)]
mod tests;

pub use global::{
    Align, Alpha, Color, Edge, GlobalSettings, InvalidColor, KeywordError, VisibilityMode, WidthType,
};
pub use path_ops::{PathError, navigate_path};
pub use paths::ConfigPaths;
pub use plugin::{KNOWN_PLUGIN_TYPES, PluginEntry, PluginSettings, is_known_plugin_type};

use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};

/// A complete panel layout.
///
/// Loaded once per panel session and replaced wholesale when the document
/// changes. `plugins` order is rendering order along the panel edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PanelConfig {
    /// Panel-wide geometry, appearance and behavior.
    #[serde(default)]
    pub global: GlobalSettings,

    /// Widgets in rendering order.
    pub plugins: Vec<PluginEntry>,
}

impl PanelConfig {
    /// JSON Schema describing the panel document.
    pub fn json_schema() -> Schema {
        schema_for!(PanelConfig)
    }

    /// Plugin type tags in rendering order.
    pub fn plugin_types(&self) -> impl Iterator<Item = &str> {
        self.plugins.iter().map(|plugin| plugin.plugin_type.as_str())
    }
}
