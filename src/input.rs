//! Raw input collections.

use indexmap::IndexMap;
use serde_json::{Map, Value};

/// The raw name→value mapping handed to a validation pass.
///
/// Insertion order is preserved, so the coerced inputs a pass produces come
/// back in a deterministic order.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use vestibule::Inputs;
///
/// let inputs = Inputs::from_iter([("name", json!("Ada")), ("age", json!(36))]);
/// assert_eq!(inputs.get("age"), Some(&json!(36)));
/// assert!(inputs.get("missing").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inputs {
    values: IndexMap<String, Value>,
}

impl Inputs {
    /// Creates an empty input set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts (or replaces) one raw value.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        self.values.insert(name.into(), value);
    }

    /// Looks up the raw value for a field.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no entries are present.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl<S: Into<String>> FromIterator<(S, Value)> for Inputs {
    fn from_iter<I: IntoIterator<Item = (S, Value)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(name, value)| (name.into(), value)).collect(),
        }
    }
}

impl From<Map<String, Value>> for Inputs {
    fn from(map: Map<String, Value>) -> Self {
        map.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_insertion_order_preserved() {
        let mut inputs = Inputs::new();
        inputs.insert("b", json!(1));
        inputs.insert("a", json!(2));

        let names: Vec<_> = inputs.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn test_from_json_object() {
        let Value::Object(map) = serde_json::json!({"name": "Ada", "age": 36}) else {
            panic!("expected an object");
        };
        let inputs = Inputs::from(map);
        assert_eq!(inputs.len(), 2);
        assert_eq!(inputs.get("name"), Some(&json!("Ada")));
    }
}
