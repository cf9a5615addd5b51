//! Filter-level error signals.
//!
//! This module provides [`ErrorKind`] for classifying user-facing validation
//! errors and [`ProcessError`], the signal a filter attaches to its processed
//! input when a raw value could not be accepted.

use std::fmt::{self, Display};

use serde_json::Value;
use thiserror::Error;

/// Classification attached to a user-facing validation error.
///
/// Kinds render in snake_case (`invalid_type`) and double as translation-key
/// fragments for callers maintaining their own message catalogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A required input was absent (or null) and the filter has no default.
    Missing,
    /// A raw value could not be matched to the filter's representation.
    InvalidType,
    /// A sub-field inside a composite input failed its nested filter.
    InvalidNested,
}

impl ErrorKind {
    /// Returns the snake_case wire form of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Missing => "missing",
            ErrorKind::InvalidType => "invalid_type",
            ErrorKind::InvalidNested => "invalid_nested",
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An error produced while processing a single raw input.
///
/// Filters attach a `ProcessError` to their [`ProcessedInput`] instead of
/// aborting the pass; the driver translates each recoverable variant into a
/// [`ValidationError`] and continues with the remaining fields.
///
/// `InvalidDefault` is the exception: a filter's configured default failing
/// its own coercion is a programming error in the filter declaration, not a
/// user input problem. Filters must surface it before handing control back
/// to the driver; the driver's translation step panics if one reaches it.
///
/// [`ProcessedInput`]: crate::filter::ProcessedInput
/// [`ValidationError`]: crate::error::ValidationError
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProcessError {
    /// A (name, kind) pair already resolved by the filter itself.
    ///
    /// The driver emits resolved pairs verbatim, with no metadata.
    #[error("`{name}` {kind}")]
    Resolved { name: String, kind: ErrorKind },

    /// The raw value did not match the filter's expected representation.
    ///
    /// `index` is set when the failing value came from a position within an
    /// ordered collection, so the driver can attribute the error to that
    /// element (`tags[2]`).
    #[error("invalid value")]
    InvalidValue { index: Option<usize> },

    /// A sub-field inside a composite input failed its nested filter.
    ///
    /// Carries the nested filter's name and the raw value that failed; both
    /// are rendered into the final error metadata.
    #[error("invalid nested value `{input_value}` for `{filter_name}`")]
    InvalidNestedValue {
        filter_name: String,
        input_value: Value,
    },

    /// A filter's configured default failed the filter's own coercion.
    #[error("invalid default `{value}` for `{name}`")]
    InvalidDefault { name: String, value: Value },
}

impl ProcessError {
    /// True if this error is attributable to one element of an ordered
    /// collection.
    pub fn is_index_error(&self) -> bool {
        matches!(self, ProcessError::InvalidValue { index: Some(_) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_kind_wire_form() {
        assert_eq!(ErrorKind::Missing.as_str(), "missing");
        assert_eq!(ErrorKind::InvalidType.as_str(), "invalid_type");
        assert_eq!(ErrorKind::InvalidNested.as_str(), "invalid_nested");
        assert_eq!(ErrorKind::InvalidType.to_string(), "invalid_type");
    }

    #[test]
    fn test_index_error_detection() {
        let indexed = ProcessError::InvalidValue { index: Some(2) };
        assert!(indexed.is_index_error());

        let plain = ProcessError::InvalidValue { index: None };
        assert!(!plain.is_index_error());

        let nested = ProcessError::InvalidNestedValue {
            filter_name: "x".to_string(),
            input_value: json!(5),
        };
        assert!(!nested.is_index_error());
    }

    #[test]
    fn test_display() {
        let resolved = ProcessError::Resolved {
            name: "age".to_string(),
            kind: ErrorKind::Missing,
        };
        assert_eq!(resolved.to_string(), "`age` missing");

        let nested = ProcessError::InvalidNestedValue {
            filter_name: "x".to_string(),
            input_value: json!(5),
        };
        assert!(nested.to_string().contains("`x`"));
    }
}
