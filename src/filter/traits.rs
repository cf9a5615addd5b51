//! The filter contract.
//!
//! This module provides the [`Filter`] trait every coercion rule implements
//! and [`ProcessedInput`], the outcome of running one raw value through a
//! filter.

use serde_json::Value;

use crate::error::{ErrorKind, ProcessError};
use crate::translate::Context;

/// Outcome of processing one raw input through a filter.
///
/// Every filter returns a `ProcessedInput`: the value it settled on (coerced
/// on success, the rejected candidate otherwise) plus the error it resolved,
/// if any. The driver inspects `error` first and only consumes `value` for
/// accepted fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedInput {
    /// The value the filter settled on.
    pub value: Value,
    /// The failure signal, if processing could not accept the value.
    pub error: Option<ProcessError>,
}

impl ProcessedInput {
    /// A successful outcome carrying the coerced value.
    pub fn accepted(value: Value) -> Self {
        Self { value, error: None }
    }

    /// A failed outcome keeping the value the filter settled on.
    pub fn rejected(value: Value, error: ProcessError) -> Self {
        Self {
            value,
            error: Some(error),
        }
    }

    /// True if processing produced no error.
    pub fn is_accepted(&self) -> bool {
        self.error.is_none()
    }
}

/// A named coercion/validation rule for one input field.
///
/// Filters are constructed once per validated field set, used for the
/// duration of one validation pass, then discarded. The `Send + Sync`
/// bounds let a [`FilterSet`] of boxed filters be shared between
/// concurrent passes; filters hold no per-pass state.
///
/// [`FilterSet`]: crate::filter::FilterSet
pub trait Filter: Send + Sync {
    /// The field identifier this filter validates.
    fn name(&self) -> &str;

    /// Short type tag identifying this filter's kind, used for
    /// translation-key construction and schema reporting.
    fn slug(&self) -> &'static str;

    /// The database column type this filter maps to when reporting schemas.
    fn database_column_type(&self) -> &'static str {
        self.slug()
    }

    /// Processes one raw input.
    ///
    /// `value` is `None` when the caller supplied no entry for this field.
    /// Absent and null inputs are both resolved through the filter's own
    /// default/required handling rather than reported by the driver.
    fn process(&self, value: Option<&Value>, context: &Context) -> ProcessedInput;
}

/// Shared default/required handling for filter implementations.
///
/// Present, non-null values go straight to `accept`. Absent or null values
/// use the configured default when there is one; the default runs through
/// `accept` itself, and a default the filter cannot accept is resolved as
/// [`ProcessError::InvalidDefault`]. With no default the filter resolves the
/// error itself as a missing required input.
pub(crate) fn process_with_default<F>(
    name: &str,
    default: Option<&Value>,
    value: Option<&Value>,
    accept: F,
) -> ProcessedInput
where
    F: Fn(&Value) -> ProcessedInput,
{
    match value {
        Some(v) if !v.is_null() => accept(v),
        _ => match default {
            Some(d) => {
                let out = accept(d);
                if out.is_accepted() {
                    out
                } else {
                    ProcessedInput::rejected(
                        d.clone(),
                        ProcessError::InvalidDefault {
                            name: name.to_string(),
                            value: d.clone(),
                        },
                    )
                }
            }
            None => ProcessedInput::rejected(
                Value::Null,
                ProcessError::Resolved {
                    name: name.to_string(),
                    kind: ErrorKind::Missing,
                },
            ),
        },
    }
}
