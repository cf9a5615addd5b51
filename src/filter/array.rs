//! Array filter.
//!
//! This module provides [`ArrayFilter`] for validating ordered collection
//! inputs, optionally running every element through an element filter.

use serde_json::Value;

use crate::error::ProcessError;
use crate::translate::Context;

use super::traits::{process_with_default, Filter, ProcessedInput};

/// Filter for ordered collection inputs.
///
/// Without an element filter, any array passes. With one, each element is
/// processed in order and the first failing element resolves the whole
/// input as invalid at that index, which the driver reports as `name[i]`.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use vestibule::{ArrayFilter, Context, Filter, IntegerFilter};
///
/// let filter = ArrayFilter::new("tags").each(IntegerFilter::new("tag"));
/// let context = Context::new();
///
/// let out = filter.process(Some(&json!([1, "2", 3])), &context);
/// assert_eq!(out.value, json!([1, 2, 3]));
/// assert!(out.error.is_none());
/// ```
pub struct ArrayFilter {
    name: String,
    element: Option<Box<dyn Filter>>,
    default: Option<Value>,
}

impl ArrayFilter {
    /// Creates an array filter for the given field.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            element: None,
            default: None,
        }
    }

    /// Validates each element with `filter`.
    ///
    /// The element filter's own name is not reported; element failures are
    /// attributed to this filter's name plus the element index.
    pub fn each<F>(mut self, filter: F) -> Self
    where
        F: Filter + 'static,
    {
        self.element = Some(Box::new(filter));
        self
    }

    /// Uses `default` when the input is absent or null.
    pub fn default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }

    fn accept(&self, raw: &Value, context: &Context) -> ProcessedInput {
        let Value::Array(items) = raw else {
            return ProcessedInput::rejected(
                raw.clone(),
                ProcessError::InvalidValue { index: None },
            );
        };
        let Some(element) = &self.element else {
            return ProcessedInput::accepted(raw.clone());
        };

        let mut out = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            let processed = element.process(Some(item), context);
            if !processed.is_accepted() {
                return ProcessedInput::rejected(
                    processed.value,
                    ProcessError::InvalidValue { index: Some(index) },
                );
            }
            out.push(processed.value);
        }
        ProcessedInput::accepted(Value::Array(out))
    }
}

impl Filter for ArrayFilter {
    fn name(&self) -> &str {
        &self.name
    }

    fn slug(&self) -> &'static str {
        "array"
    }

    fn process(&self, value: Option<&Value>, context: &Context) -> ProcessedInput {
        process_with_default(&self.name, self.default.as_ref(), value, |v| {
            self.accept(v, context)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::IntegerFilter;
    use serde_json::json;

    #[test]
    fn test_accepts_any_array_without_element_filter() {
        let filter = ArrayFilter::new("tags");
        let out = filter.process(Some(&json!([1, "two", null])), &Context::new());
        assert!(out.is_accepted());
        assert_eq!(out.value, json!([1, "two", null]));
    }

    #[test]
    fn test_rejects_non_arrays() {
        let filter = ArrayFilter::new("tags");
        let out = filter.process(Some(&json!("not an array")), &Context::new());
        assert_eq!(out.error, Some(ProcessError::InvalidValue { index: None }));
    }

    #[test]
    fn test_coerces_every_element() {
        let filter = ArrayFilter::new("tags").each(IntegerFilter::new("tag"));
        let out = filter.process(Some(&json!(["1", 2, 3.0])), &Context::new());
        assert!(out.is_accepted());
        assert_eq!(out.value, json!([1, 2, 3]));
    }

    #[test]
    fn test_first_failing_element_carries_its_index() {
        let filter = ArrayFilter::new("tags").each(IntegerFilter::new("tag"));
        let out = filter.process(Some(&json!([1, 2, "abc", "def"])), &Context::new());
        assert_eq!(out.error, Some(ProcessError::InvalidValue { index: Some(2) }));
    }

    #[test]
    fn test_empty_array_passes() {
        let filter = ArrayFilter::new("tags").each(IntegerFilter::new("tag"));
        let out = filter.process(Some(&json!([])), &Context::new());
        assert!(out.is_accepted());
        assert_eq!(out.value, json!([]));
    }
}
