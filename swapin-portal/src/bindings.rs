//! Bound parameter values.

use indexmap::IndexMap;
use serde::de::DeserializeOwned;

use crate::Result;

/// The bound values of a profile's parameters.
///
/// Every declared parameter is present — either with the value the portal
/// supplied or with its declared default. Values are held in declaration
/// order.
#[derive(Clone, Debug, Default)]
pub struct Bindings {
    /// The bound values, keyed by parameter id.
    values: IndexMap<String, serde_json::Value>,
}

impl Bindings {
    /// Creates bindings from an ordered id-to-value map.
    pub(crate) fn new(values: IndexMap<String, serde_json::Value>) -> Self {
        Self { values }
    }

    /// Gets the bound value for a parameter id.
    pub fn get(&self, id: &str) -> Option<&serde_json::Value> {
        self.values.get(id)
    }

    /// Gets a bound string value.
    pub fn string(&self, id: &str) -> Option<&str> {
        self.values.get(id).and_then(|value| value.as_str())
    }

    /// Gets a bound integer value.
    pub fn integer(&self, id: &str) -> Option<i64> {
        self.values.get(id).and_then(|value| value.as_i64())
    }

    /// Gets a bound boolean value.
    pub fn boolean(&self, id: &str) -> Option<bool> {
        self.values.get(id).and_then(|value| value.as_bool())
    }

    /// Iterates over the bound values in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &serde_json::Value)> {
        self.values.iter().map(|(id, value)| (id.as_str(), value))
    }

    /// Deserializes the bindings into a profile-owned parameter struct.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T> {
        let object = self
            .values
            .iter()
            .map(|(id, value)| (id.clone(), value.clone()))
            .collect::<serde_json::Map<_, _>>();
        Ok(serde_json::from_value(serde_json::Value::Object(object))?)
    }
}
