//! String filter.

use serde_json::Value;

use crate::error::ProcessError;
use crate::translate::Context;

use super::traits::{process_with_default, Filter, ProcessedInput};

/// Filter for string inputs.
///
/// Only strings are accepted; other value shapes are not coerced. Leading
/// and trailing whitespace is stripped unless disabled with
/// [`strip`](StringFilter::strip).
#[derive(Debug, Clone)]
pub struct StringFilter {
    name: String,
    strip: bool,
    default: Option<Value>,
}

impl StringFilter {
    /// Creates a string filter for the given field, with stripping enabled.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            strip: true,
            default: None,
        }
    }

    /// Controls whitespace stripping of accepted values.
    pub fn strip(mut self, strip: bool) -> Self {
        self.strip = strip;
        self
    }

    /// Uses `default` when the input is absent or null.
    pub fn default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }

    fn accept(&self, raw: &Value) -> ProcessedInput {
        match raw {
            Value::String(s) => {
                let out = if self.strip { s.trim().to_string() } else { s.clone() };
                ProcessedInput::accepted(Value::String(out))
            }
            other => {
                ProcessedInput::rejected(other.clone(), ProcessError::InvalidValue { index: None })
            }
        }
    }
}

impl Filter for StringFilter {
    fn name(&self) -> &str {
        &self.name
    }

    fn slug(&self) -> &'static str {
        "string"
    }

    fn process(&self, value: Option<&Value>, _context: &Context) -> ProcessedInput {
        process_with_default(&self.name, self.default.as_ref(), value, |v| self.accept(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_strips_whitespace_by_default() {
        let filter = StringFilter::new("name");
        let out = filter.process(Some(&json!("  Ada  ")), &Context::new());
        assert_eq!(out.value, json!("Ada"));
    }

    #[test]
    fn test_strip_can_be_disabled() {
        let filter = StringFilter::new("name").strip(false);
        let out = filter.process(Some(&json!("  Ada  ")), &Context::new());
        assert_eq!(out.value, json!("  Ada  "));
    }

    #[test]
    fn test_rejects_non_strings() {
        let filter = StringFilter::new("name");
        let out = filter.process(Some(&json!(42)), &Context::new());
        assert_eq!(out.error, Some(ProcessError::InvalidValue { index: None }));
    }
}
