//! User-facing validation errors.
//!
//! This module provides [`ValidationError`] for single translated failures
//! and [`ValidationErrors`] for accumulating multiple errors.

use std::fmt::{self, Display};

use indexmap::IndexMap;
use stillwater::prelude::*;

use crate::error::ErrorKind;

/// A single user-facing validation error.
///
/// `ValidationError` is the (name, kind, detail) triple the driver emits for
/// display:
/// - **name**: the field identifier, decorated with an index suffix
///   (`tags[2]`) when the failure is attributable to one element of an
///   ordered collection
/// - **kind**: the error classification
/// - **detail**: insertion-ordered metadata for message rendering (nested
///   field name, offending value, type label)
///
/// # Example
///
/// ```rust
/// use vestibule::{ErrorKind, ValidationError};
///
/// let error = ValidationError::new("age", ErrorKind::InvalidType)
///     .with_detail("type", "integer");
///
/// assert_eq!(error.name, "age");
/// assert_eq!(error.detail["type"], "integer");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// The field identifier, possibly index-decorated.
    pub name: String,
    /// The error classification.
    pub kind: ErrorKind,
    /// Metadata for message rendering, in insertion order.
    pub detail: IndexMap<String, String>,
}

impl ValidationError {
    /// Creates a new validation error with empty detail.
    pub fn new(name: impl Into<String>, kind: ErrorKind) -> Self {
        Self {
            name: name.into(),
            kind,
            detail: IndexMap::new(),
        }
    }

    /// Adds one detail entry and returns self for chaining.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.detail.insert(key.into(), value.into());
        self
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.kind)?;
        for (key, value) in &self.detail {
            write!(f, " ({}: {})", key, value)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ValidationError stays Send + Sync as long as its fields are owned types;
// these assertions catch a regression if the fields change.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ValidationError>();
    assert_sync::<ValidationError>();
};

/// A non-empty collection of validation errors.
///
/// `ValidationErrors` wraps a `NonEmptyVec<ValidationError>` to guarantee at
/// least one error is present, which a `Validation<T, ValidationErrors>`
/// failure requires.
///
/// # Combining Errors
///
/// `ValidationErrors` implements `Semigroup`, so errors from separate passes
/// can be combined:
///
/// ```rust
/// use stillwater::prelude::*;
/// use vestibule::{ErrorKind, ValidationError, ValidationErrors};
///
/// let a = ValidationErrors::single(ValidationError::new("name", ErrorKind::Missing));
/// let b = ValidationErrors::single(ValidationError::new("age", ErrorKind::InvalidType));
///
/// let combined = a.combine(b);
/// assert_eq!(combined.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationErrors(NonEmptyVec<ValidationError>);

impl ValidationErrors {
    /// Creates a `ValidationErrors` containing a single error.
    pub fn single(error: ValidationError) -> Self {
        Self(NonEmptyVec::singleton(error))
    }

    /// Creates a `ValidationErrors` from a `NonEmptyVec` of errors.
    pub fn from_non_empty(errors: NonEmptyVec<ValidationError>) -> Self {
        Self(errors)
    }

    /// Creates a `ValidationErrors` from a `Vec<ValidationError>`.
    ///
    /// # Panics
    ///
    /// Panics if the provided vec is empty.
    pub fn from_vec(errors: Vec<ValidationError>) -> Self {
        Self(NonEmptyVec::from_vec(errors).expect("ValidationErrors requires at least one error"))
    }

    /// Returns the number of errors in this collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns false since this collection is guaranteed non-empty.
    pub fn is_empty(&self) -> bool {
        false // NonEmptyVec is never empty
    }

    /// Returns an iterator over the contained errors.
    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    /// Returns all errors for the given (possibly index-decorated) name.
    pub fn named(&self, name: &str) -> Vec<&ValidationError> {
        self.0.iter().filter(|e| e.name == name).collect()
    }

    /// Returns all errors of the given kind.
    pub fn of_kind(&self, kind: ErrorKind) -> Vec<&ValidationError> {
        self.0.iter().filter(|e| e.kind == kind).collect()
    }

    /// Returns the first error in the collection.
    pub fn first(&self) -> &ValidationError {
        self.0.head()
    }

    /// Converts this collection into a `Vec<ValidationError>`.
    pub fn into_vec(self) -> Vec<ValidationError> {
        self.0.into_vec()
    }
}

impl Semigroup for ValidationErrors {
    fn combine(self, other: Self) -> Self {
        ValidationErrors(self.0.combine(other.0))
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.len())?;
        for (i, error) in self.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = Box<dyn Iterator<Item = &'a ValidationError> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.0.iter())
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ValidationErrors>();
    assert_sync::<ValidationErrors>();
};
