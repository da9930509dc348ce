//! Opaque, ordered metadata attached to a state.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Ordered key/value store for state metadata such as display labels.
///
/// Keys keep insertion order. Values are never validated.
///
/// # Example
///
/// ```rust
/// use stateflow::core::AttributeBag;
/// use serde_json::json;
///
/// let mut attributes = AttributeBag::new();
/// attributes.set("label", json!("Waiting for payment"));
/// attributes.set("color", json!("red"));
///
/// assert_eq!(attributes.get("label"), Some(&json!("Waiting for payment")));
/// assert_eq!(attributes.keys().collect::<Vec<_>>(), vec!["label", "color"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeBag {
    values: Map<String, Value>,
}

impl AttributeBag {
    /// Create an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// True if the key is present.
    pub fn has(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Get a raw value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Get a value as a string slice, if it is a JSON string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(Value::as_str)
    }

    /// Insert or replace a value, returning the previous one.
    pub fn set(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.values.insert(key.into(), value)
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.values.keys().map(String::as_str)
    }

    /// Key/value pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.values.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when no keys are set.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<Map<String, Value>> for AttributeBag {
    fn from(values: Map<String, Value>) -> Self {
        Self { values }
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for AttributeBag {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
