use serde_json::{Map, Value};

use super::{GlobalSettings, PanelConfig, PluginEntry};
use crate::SchemaError;

impl PanelConfig {
    /// Checks the invariants the types themselves cannot express.
    ///
    /// Keyword options, colors and numeric ranges are enforced when a
    /// document is deserialized. This pass covers what an editor could still
    /// get wrong in memory: empty plugin types, broken `name[i]` runs in
    /// plugin settings, and `extra` keys that shadow a typed field (they
    /// would be written twice). It has no side effects.
    ///
    /// # Errors
    ///
    /// Returns every violation found, in plugin order.
    pub fn validate(&self) -> Result<(), Vec<SchemaError>> {
        let mut errors = shadowed_keys(&self.global.extra, GlobalSettings::FIELD_NAMES, "global");
        errors.extend(
            self.plugins
                .iter()
                .enumerate()
                .flat_map(|(index, plugin)| plugin_errors(index, plugin)),
        );

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn plugin_errors(index: usize, plugin: &PluginEntry) -> Vec<SchemaError> {
    let mut errors = Vec::new();

    if plugin.plugin_type.trim().is_empty() {
        errors.push(SchemaError::new(
            format!("plugins[{index}].type"),
            "must not be empty",
        ));
    }

    errors.extend(shadowed_keys(
        &plugin.extra,
        PluginEntry::FIELD_NAMES,
        &format!("plugins[{index}]"),
    ));

    let Some(settings) = &plugin.settings else {
        return errors;
    };

    for (name, mut indices) in settings.indexed_groups() {
        indices.sort_unstable();

        let duplicate = indices.windows(2).find(|pair| pair[0] == pair[1]);
        if let Some(pair) = duplicate {
            errors.push(SchemaError::new(
                format!("plugins[{index}].settings.{name}"),
                format!("index {} is given more than once", pair[0]),
            ));
            continue;
        }

        let missing = indices
            .iter()
            .enumerate()
            .find(|(expected, actual)| expected != *actual)
            .map(|(expected, _)| expected);

        if let Some(expected) = missing {
            errors.push(SchemaError::new(
                format!("plugins[{index}].settings.{name}"),
                format!("index {expected} is missing; indices must run 0..{}", indices.len()),
            ));
        }
    }

    errors
}

fn shadowed_keys(extra: &Map<String, Value>, fields: &[&str], prefix: &str) -> Vec<SchemaError> {
    extra
        .keys()
        .filter(|key| fields.contains(&key.as_str()))
        .map(|key| {
            SchemaError::new(
                format!("{prefix}.{key}"),
                "set as an unknown key but names a known option",
            )
        })
        .collect()
}
