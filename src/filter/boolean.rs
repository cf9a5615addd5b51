//! Boolean filter.

use serde_json::Value;

use crate::error::ProcessError;
use crate::translate::Context;

use super::traits::{process_with_default, Filter, ProcessedInput};

/// Filter for boolean inputs.
///
/// Accepts booleans directly and converts the literal string forms
/// `"true"`/`"false"`, `"1"`/`"0"`, and `"on"`/`"off"` (case-insensitive).
#[derive(Debug, Clone)]
pub struct BooleanFilter {
    name: String,
    default: Option<Value>,
}

impl BooleanFilter {
    /// Creates a boolean filter for the given field.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: None,
        }
    }

    /// Uses `default` when the input is absent or null.
    pub fn default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }

    fn accept(&self, raw: &Value) -> ProcessedInput {
        match raw {
            Value::Bool(b) => ProcessedInput::accepted(Value::Bool(*b)),
            Value::String(s) => match literal_boolean(s) {
                Some(b) => ProcessedInput::accepted(Value::Bool(b)),
                None => ProcessedInput::rejected(
                    raw.clone(),
                    ProcessError::InvalidValue { index: None },
                ),
            },
            other => {
                ProcessedInput::rejected(other.clone(), ProcessError::InvalidValue { index: None })
            }
        }
    }
}

fn literal_boolean(s: &str) -> Option<bool> {
    let s = s.trim();
    if ["true", "1", "on"].iter().any(|t| s.eq_ignore_ascii_case(t)) {
        Some(true)
    } else if ["false", "0", "off"].iter().any(|t| s.eq_ignore_ascii_case(t)) {
        Some(false)
    } else {
        None
    }
}

impl Filter for BooleanFilter {
    fn name(&self) -> &str {
        &self.name
    }

    fn slug(&self) -> &'static str {
        "boolean"
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
    fn test_accepts_booleans() {
        let filter = BooleanFilter::new("active");
        let out = filter.process(Some(&json!(true)), &Context::new());
        assert_eq!(out.value, json!(true));
        assert!(out.is_accepted());
    }

    #[test]
    fn test_converts_literal_strings() {
        let filter = BooleanFilter::new("active");
        let context = Context::new();

        for truthy in ["true", "TRUE", "1", "on", "On"] {
            let out = filter.process(Some(&json!(truthy)), &context);
            assert_eq!(out.value, json!(true), "for {truthy:?}");
        }
        for falsy in ["false", "0", "off", "OFF"] {
            let out = filter.process(Some(&json!(falsy)), &context);
            assert_eq!(out.value, json!(false), "for {falsy:?}");
        }
    }

    #[test]
    fn test_rejects_other_strings_and_shapes() {
        let filter = BooleanFilter::new("active");
        let context = Context::new();

        let out = filter.process(Some(&json!("yes")), &context);
        assert_eq!(out.error, Some(ProcessError::InvalidValue { index: None }));

        let out = filter.process(Some(&json!(1)), &context);
        assert!(out.error.is_some());
    }
}
