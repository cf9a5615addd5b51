//! Hash filter.
//!
//! This module provides [`HashFilter`] for validating composite (object)
//! inputs through named nested filters.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::error::ProcessError;
use crate::translate::Context;

use super::traits::{process_with_default, Filter, ProcessedInput};

/// Filter for composite (object) inputs.
///
/// Nested filters run in declaration order against the members they are
/// named after. The first failing sub-field resolves the whole input as an
/// invalid nested value carrying the sub-field's name and its raw value;
/// the driver renders both into the error metadata. Members with no
/// declared filter are dropped from the coerced output.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use vestibule::{Context, Filter, HashFilter, IntegerFilter, StringFilter};
///
/// let filter = HashFilter::new("owner")
///     .nested(StringFilter::new("name"))
///     .nested(IntegerFilter::new("age"));
///
/// let out = filter.process(Some(&json!({"name": "Ada", "age": "36"})), &Context::new());
/// assert_eq!(out.value, json!({"name": "Ada", "age": 36}));
/// assert!(out.error.is_none());
/// ```
pub struct HashFilter {
    name: String,
    nested: IndexMap<String, Box<dyn Filter>>,
    default: Option<Value>,
}

impl HashFilter {
    /// Creates a hash filter for the given field.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nested: IndexMap::new(),
            default: None,
        }
    }

    /// Adds a nested filter, keyed by the filter's own name.
    pub fn nested<F>(mut self, filter: F) -> Self
    where
        F: Filter + 'static,
    {
        self.nested.insert(filter.name().to_string(), Box::new(filter));
        self
    }

    /// Uses `default` when the input is absent or null.
    pub fn default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }

    fn accept(&self, raw: &Value, context: &Context) -> ProcessedInput {
        let Value::Object(members) = raw else {
            return ProcessedInput::rejected(
                raw.clone(),
                ProcessError::InvalidValue { index: None },
            );
        };

        let mut out = Map::new();
        for (key, filter) in &self.nested {
            let member = members.get(key);
            let processed = filter.process(member, context);
            if !processed.is_accepted() {
                return ProcessedInput::rejected(
                    raw.clone(),
                    ProcessError::InvalidNestedValue {
                        filter_name: key.clone(),
                        input_value: member.cloned().unwrap_or(Value::Null),
                    },
                );
            }
            out.insert(key.clone(), processed.value);
        }
        ProcessedInput::accepted(Value::Object(out))
    }
}

impl Filter for HashFilter {
    fn name(&self) -> &str {
        &self.name
    }

    fn slug(&self) -> &'static str {
        "hash"
    }

    fn process(&self, value: Option<&Value>, context: &Context) -> ProcessedInput {
        process_with_default(&self.name, self.default.as_ref(), value, |v| {
            self.accept(v, context)
        })
    }
}
