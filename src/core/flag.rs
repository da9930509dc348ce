//! Named markers held by a state.

use super::collection::Named;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Opaque named marker. The optional value is owned by whoever reads the flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flag {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value: Option<Value>,
}

impl Flag {
    /// Flag without a value.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    /// Flag carrying an opaque value.
    pub fn with_value(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            value: Some(value),
        }
    }

    /// The flag value, if any.
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }
}

impl Named for Flag {
    fn name(&self) -> &str {
        &self.name
    }
}
