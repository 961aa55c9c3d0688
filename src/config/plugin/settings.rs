use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Free-form options of a single plugin.
///
/// Keys are unique and their order is kept for round-tripping. A run of keys
/// such as `sort_by[0]`, `sort_by[1]` encodes an ordered list; see
/// [`PluginSettings::indexed`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct PluginSettings(Map<String, Value>);

impl PluginSettings {
    /// Creates empty settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a value by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Inserts a value, returning the previous one for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no keys.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates keys and values in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Values of the `name[i]` keys, ordered by index.
    ///
    /// Indices are not required to be contiguous here; gaps are a
    /// validation concern.
    pub fn indexed(&self, name: &str) -> Vec<&Value> {
        let mut entries: Vec<(usize, &Value)> = self
            .0
            .iter()
            .filter_map(|(key, value)| match split_indexed_key(key) {
                Some((base, index)) if base == name => Some((index, value)),
                _ => None,
            })
            .collect();

        entries.sort_by_key(|(index, _)| *index);
        entries.into_iter().map(|(_, value)| value).collect()
    }

    /// All indexed keys grouped by base name, with their indices in
    /// document order.
    pub fn indexed_groups(&self) -> BTreeMap<&str, Vec<usize>> {
        let mut groups: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
        for key in self.0.keys() {
            if let Some((base, index)) = split_indexed_key(key) {
                groups.entry(base).or_default().push(index);
            }
        }
        groups
    }
}

impl From<Map<String, Value>> for PluginSettings {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for PluginSettings {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(key, value)| (key.into(), value)).collect())
    }
}

/// Splits `name[3]` into `("name", 3)`.
pub(crate) fn split_indexed_key(key: &str) -> Option<(&str, usize)> {
    let inner = key.strip_suffix(']')?;
    let open = inner.rfind('[')?;
    let (base, digits) = (&inner[..open], &inner[open + 1..]);

    if base.is_empty() || digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    digits.parse().ok().map(|index| (base, index))
}
