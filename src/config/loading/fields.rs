//! Locating schema violations field by field.
//!
//! Deserializing a whole section stops at the first bad value and does not
//! say which key held it. Each key is instead tried on its own against the
//! section type, with every other option left at its default, so all bad
//! keys are reported with their full path.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::{
    SchemaError,
    config::{GlobalSettings, PluginEntry},
};

/// Violations in the `global` section, one per offending key.
pub(super) fn global_field_errors(map: &Map<String, Value>) -> Vec<SchemaError> {
    field_errors::<GlobalSettings>(map, "global", &Map::new())
}

/// Violations on a plugin entry whose `type` is already known to be valid.
pub(super) fn entry_field_errors(
    map: &Map<String, Value>,
    plugin_type: &str,
    prefix: &str,
) -> Vec<SchemaError> {
    let mut base = Map::new();
    base.insert("type".to_string(), Value::String(plugin_type.to_string()));

    field_errors::<PluginEntry>(map, prefix, &base)
}

fn field_errors<T: DeserializeOwned>(
    map: &Map<String, Value>,
    prefix: &str,
    base: &Map<String, Value>,
) -> Vec<SchemaError> {
    map.iter()
        .filter(|(key, _)| !base.contains_key(key.as_str()))
        .filter_map(|(key, value)| {
            let mut single = base.clone();
            single.insert(key.clone(), value.clone());

            serde_json::from_value::<T>(Value::Object(single))
                .err()
                .map(|e| SchemaError::new(format!("{prefix}.{key}"), e.to_string()))
        })
        .collect()
}

/// JSON type name of a value, for error messages.
pub(super) fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
