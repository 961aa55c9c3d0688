use serde_json::Value;
use thiserror::Error;

use super::PanelConfig;

/// Errors from dot-path queries into a panel document.
#[derive(Debug, Error)]
pub enum PathError {
    /// The path does not name a value in the document.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// The document could not be turned into JSON for navigation.
    #[error("failed to serialize panel config: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl PanelConfig {
    /// Retrieves the value at a dot-separated path, e.g. `plugins.2.type`
    ///
    /// The path is resolved against the serialized document, so defaults
    /// applied during loading are visible.
    ///
    /// # Errors
    /// * `PathError::InvalidPath` - If the path doesn't exist or is malformed
    pub fn get_by_path(&self, path: &str) -> Result<Value, PathError> {
        let document = serde_json::to_value(self)?;
        navigate_path(&document, path).cloned()
    }
}

/// Navigates through a JSON value following a dot-separated path
///
/// # Arguments
/// * `value` - The root JSON value to navigate from
/// * `path` - Dot-separated path (e.g., "global.edge" or "plugins.0.settings.mode")
///
/// An empty path returns the root.
///
/// # Errors
/// * `PathError::InvalidPath` - If the path doesn't exist or is malformed
pub fn navigate_path<'a>(value: &'a Value, path: &str) -> Result<&'a Value, PathError> {
    if path.is_empty() {
        return Ok(value);
    }

    let parts: Vec<&str> = path.split('.').collect();
    let mut current = value;

    for (i, part) in parts.iter().enumerate() {
        match current {
            Value::Object(object) => {
                current = object.get(*part).ok_or_else(|| {
                    PathError::InvalidPath(format!(
                        "Key '{}' not found in object at path '{}'",
                        part,
                        parts[..i].join(".")
                    ))
                })?;
            }
            Value::Array(array) => {
                let index = part.parse::<usize>().map_err(|_| {
                    PathError::InvalidPath(format!(
                        "Invalid array index '{}' at path '{}'",
                        part,
                        parts[..i].join(".")
                    ))
                })?;

                current = array.get(index).ok_or_else(|| {
                    PathError::InvalidPath(format!(
                        "Array index '{}' out of bounds at path '{}'",
                        index,
                        parts[..i].join(".")
                    ))
                })?;
            }
            _ => {
                return Err(PathError::InvalidPath(format!(
                    "Cannot navigate into {} at path '{}'",
                    scalar_type(current),
                    parts[..i].join("."),
                )));
            }
        }
    }

    Ok(current)
}

fn scalar_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) | Value::Object(_) => "container",
    }
}
