mod fields;

use std::{fs, path::Path};

use fields::{entry_field_errors, global_field_errors, json_type};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use super::{GlobalSettings, PanelConfig, PluginEntry, WidthType};
use crate::{PanelConfigError, Result, SchemaError};

impl PanelConfig {
    /// Parses and validates a panel document.
    ///
    /// Omitted `global` options take their defaults. Unknown keys in
    /// `global`, on plugin entries and inside `settings` are kept.
    ///
    /// # Errors
    ///
    /// Returns `PanelConfigError::Parse` if the text is not well-formed JSON,
    /// and `PanelConfigError::Schema` with every violation found if:
    /// - the document is not an object
    /// - `plugins` is missing or is not an array
    /// - a plugin entry is not an object or has no non-empty string `type`
    /// - a known option holds a value outside its domain
    ///
    /// # Example
    ///
    /// ```rust
    /// use panelconf::config::{Edge, PanelConfig};
    ///
    /// let config = PanelConfig::load(r#"{ "global": { "edge": "top" }, "plugins": [] }"#)?;
    /// assert_eq!(config.global.edge, Edge::Top);
    /// # Ok::<(), panelconf::PanelConfigError>(())
    /// ```
    pub fn load(text: &str) -> Result<PanelConfig> {
        Self::load_from_str(text, None)
    }

    /// Reads a panel document from disk and loads it.
    ///
    /// # Errors
    ///
    /// Returns `PanelConfigError::Io` if the file cannot be read, otherwise
    /// the same errors as [`PanelConfig::load`] with the file as location.
    #[instrument]
    pub fn load_file(path: &Path) -> Result<PanelConfig> {
        let content = fs::read_to_string(path).map_err(|e| PanelConfigError::io(e, path))?;
        Self::load_from_str(&content, Some(path))
    }

    /// Loads a document, falling back to the built-in panel on any error.
    ///
    /// The error is logged at `warn` so the host can keep running.
    pub fn load_or_default(text: &str) -> PanelConfig {
        Self::load(text).unwrap_or_else(|e| {
            warn!(error = %e, "Invalid panel config, using built-in default");
            PanelConfig::default()
        })
    }

    /// Serializes the document as pretty JSON with two-space indentation.
    ///
    /// # Errors
    ///
    /// Returns `serde_json::Error` if serialization fails.
    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    fn load_from_str(text: &str, path: Option<&Path>) -> Result<PanelConfig> {
        let document: Value =
            serde_json::from_str(text).map_err(|e| PanelConfigError::parse(&e, path))?;

        Self::from_document(document).map_err(|errors| PanelConfigError::schema(errors, path))
    }

    fn from_document(document: Value) -> std::result::Result<PanelConfig, Vec<SchemaError>> {
        let mut root = match document {
            Value::Object(root) => root,
            other => {
                return Err(vec![SchemaError::new(
                    "$",
                    format!("document must be an object, found {}", json_type(&other)),
                )]);
            }
        };

        let mut errors = Vec::new();
        let global = Self::load_global(root.remove("global"), &mut errors);
        let plugins = Self::load_plugins(root.remove("plugins"), &mut errors);

        for key in root.keys() {
            warn!(key = %key, "Ignoring unknown top-level key");
        }

        let config = PanelConfig { global, plugins };
        if let Err(found) = config.validate() {
            errors.extend(found);
        }

        if errors.is_empty() {
            Ok(config)
        } else {
            Err(errors)
        }
    }

    fn load_global(section: Option<Value>, errors: &mut Vec<SchemaError>) -> GlobalSettings {
        let map = match section {
            None => {
                debug!("No global section, using defaults");
                return GlobalSettings::default();
            }
            Some(Value::Object(map)) => map,
            Some(other) => {
                errors.push(SchemaError::new(
                    "global",
                    format!("must be an object, found {}", json_type(&other)),
                ));
                return GlobalSettings::default();
            }
        };

        let field_errors = global_field_errors(&map);
        if !field_errors.is_empty() {
            errors.extend(field_errors);
            return GlobalSettings::default();
        }

        match serde_json::from_value::<GlobalSettings>(Value::Object(map)) {
            Ok(global) => {
                for key in global.extra.keys() {
                    warn!(key = %key, "Unknown option in global section");
                }
                if global.oriented_width_type == WidthType::Percent && global.oriented_width > 100 {
                    warn!(
                        width = global.oriented_width,
                        "Percent width above 100, hosts will cap it to the monitor edge"
                    );
                }
                global
            }
            Err(e) => {
                errors.push(SchemaError::new("global", e.to_string()));
                GlobalSettings::default()
            }
        }
    }

    fn load_plugins(section: Option<Value>, errors: &mut Vec<SchemaError>) -> Vec<PluginEntry> {
        let items = match section {
            None => {
                errors.push(SchemaError::new("plugins", "missing required array"));
                return Vec::new();
            }
            Some(Value::Array(items)) => items,
            Some(other) => {
                errors.push(SchemaError::new(
                    "plugins",
                    format!("must be an array, found {}", json_type(&other)),
                ));
                return Vec::new();
            }
        };

        items
            .into_iter()
            .enumerate()
            .filter_map(|(index, item)| Self::load_plugin(index, item, errors))
            .collect()
    }

    fn load_plugin(
        index: usize,
        item: Value,
        errors: &mut Vec<SchemaError>,
    ) -> Option<PluginEntry> {
        let prefix = format!("plugins[{index}]");

        let map = match item {
            Value::Object(map) => map,
            other => {
                errors.push(SchemaError::new(
                    prefix,
                    format!("must be an object, found {}", json_type(&other)),
                ));
                return None;
            }
        };

        let plugin_type = match map.get("type") {
            Some(Value::String(plugin_type)) if !plugin_type.trim().is_empty() => {
                plugin_type.clone()
            }
            Some(Value::String(_)) => {
                errors.push(SchemaError::new(format!("{prefix}.type"), "must not be empty"));
                return None;
            }
            Some(other) => {
                errors.push(SchemaError::new(
                    format!("{prefix}.type"),
                    format!("must be a string, found {}", json_type(other)),
                ));
                return None;
            }
            None => {
                errors.push(SchemaError::new(format!("{prefix}.type"), "missing required string"));
                return None;
            }
        };

        let field_errors = entry_field_errors(&map, &plugin_type, &prefix);
        if !field_errors.is_empty() {
            errors.extend(field_errors);
            return None;
        }

        match serde_json::from_value::<PluginEntry>(Value::Object(map)) {
            Ok(entry) => {
                if !entry.is_known_type() {
                    debug!(index, plugin_type = %entry.plugin_type, "Unknown plugin type");
                }
                for key in entry.extra.keys() {
                    warn!(index, key = %key, "Unknown key on plugin entry");
                }
                debug!(index, plugin_type = %entry.plugin_type, "Loaded plugin");
                Some(entry)
            }
            Err(e) => {
                errors.push(SchemaError::new(prefix, e.to_string()));
                None
            }
        }
    }
}
