mod known;
mod settings;

pub use known::{KNOWN_PLUGIN_TYPES, is_known_plugin_type};
pub use settings::PluginSettings;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One widget instance on the panel.
///
/// `plugin_type` is an open tag: the loader never rejects a type it does not
/// know, it only hands the entry to the host's plugin runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PluginEntry {
    /// Widget kind, e.g. "taskbar" or "dclock".
    #[serde(rename = "type")]
    pub plugin_type: String,

    /// Take up the free space left on the panel.
    #[serde(default)]
    pub expand: bool,

    /// Padding around the widget, in pixels.
    #[serde(default)]
    pub padding: u32,

    /// Border width around the widget, in pixels.
    #[serde(default)]
    pub border: u32,

    /// Widget-specific options, opaque to the loader.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<PluginSettings>,

    /// Keys not recognised by this version, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PluginEntry {
    /// Document keys of the typed fields, which `extra` must not repeat.
    pub const FIELD_NAMES: &'static [&'static str] =
        &["type", "expand", "padding", "border", "settings"];

    /// Creates an entry with layout hints zeroed and no settings.
    pub fn new(plugin_type: impl Into<String>) -> Self {
        Self {
            plugin_type: plugin_type.into(),
            expand: false,
            padding: 0,
            border: 0,
            settings: None,
            extra: Map::new(),
        }
    }

    /// Sets the `expand` hint.
    pub fn with_expand(mut self, expand: bool) -> Self {
        self.expand = expand;
        self
    }

    /// Attaches widget settings.
    pub fn with_settings(mut self, settings: PluginSettings) -> Self {
        self.settings = Some(settings);
        self
    }

    /// Looks up a single widget setting.
    pub fn setting(&self, key: &str) -> Option<&Value> {
        self.settings.as_ref().and_then(|settings| settings.get(key))
    }

    /// Whether the type is one the stock panel ships.
    pub fn is_known_type(&self) -> bool {
        is_known_plugin_type(&self.plugin_type)
    }
}
