//! The validation driver.
//!
//! Runs a declaration-ordered [`FilterSet`] against a raw [`Inputs`] mapping
//! and reduces the per-field outcomes into one ordered error list.
//! Recoverable per-field failures are translated into user-facing
//! [`ValidationError`]s; an error shape the translator never expects is a
//! filter/driver contract violation and aborts the pass.

use stillwater::Validation;

use crate::error::{ErrorKind, ProcessError, ValidationError, ValidationErrors};
use crate::filter::{Filter, FilterSet};
use crate::input::Inputs;
use crate::translate::Context;
use crate::ValidationResult;

/// Runs every filter against its raw input and collects translated errors.
///
/// Errors appear in filter-declaration order; a field with no error
/// contributes nothing, so a fully valid pass returns an empty vec. The
/// pass always completes for malformed user input — conversion failure on
/// one field never aborts validation of the others.
///
/// # Panics
///
/// Panics if a filter hands the driver an error shape the translator never
/// expects (a contract violation, not a user input problem).
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use vestibule::{validate, Context, ErrorKind, FilterSet, Inputs, IntegerFilter};
///
/// let filters = FilterSet::new().filter(IntegerFilter::new("age"));
/// let inputs = Inputs::from_iter([("age", json!("abc"))]);
///
/// let errors = validate(&Context::new(), &filters, &inputs);
/// assert_eq!(errors.len(), 1);
/// assert_eq!(errors[0].name, "age");
/// assert_eq!(errors[0].kind, ErrorKind::InvalidType);
/// ```
pub fn validate(context: &Context, filters: &FilterSet, inputs: &Inputs) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for (name, filter) in filters.iter() {
        let input = filter.process(inputs.get(name), context);
        if let Some(error) = input.error {
            // a translation that yields no entry is dropped, never emitted
            // as a garbage entry
            if let Some(error) = error_to_validation_error(context, error, filter) {
                errors.push(error);
            }
        }
    }
    errors
}

/// Runs a pass and aggregates the outcome applicatively.
///
/// `Success` carries the coerced inputs in declaration order; `Failure`
/// carries the non-empty error collection. Use this form when the caller
/// wants the coerced values rather than just the error list.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use vestibule::{run, Context, FilterSet, Inputs, IntegerFilter, StringFilter};
///
/// let filters = FilterSet::new()
///     .filter(StringFilter::new("name"))
///     .filter(IntegerFilter::new("age"));
/// let inputs = Inputs::from_iter([("name", json!(" Ada ")), ("age", json!("36"))]);
///
/// let coerced = run(&Context::new(), &filters, &inputs).into_result().unwrap();
/// assert_eq!(coerced.get("name"), Some(&json!("Ada")));
/// assert_eq!(coerced.get("age"), Some(&json!(36)));
/// ```
pub fn run(context: &Context, filters: &FilterSet, inputs: &Inputs) -> ValidationResult<Inputs> {
    let mut coerced = Inputs::new();
    let mut errors = Vec::new();
    for (name, filter) in filters.iter() {
        let input = filter.process(inputs.get(name), context);
        match input.error {
            Some(error) => {
                if let Some(error) = error_to_validation_error(context, error, filter) {
                    errors.push(error);
                }
            }
            None => coerced.insert(name, input.value),
        }
    }
    if errors.is_empty() {
        Validation::Success(coerced)
    } else {
        Validation::Failure(ValidationErrors::from_vec(errors))
    }
}

/// Translates one filter-level error into a user-facing validation error.
fn error_to_validation_error(
    context: &Context,
    error: ProcessError,
    filter: &dyn Filter,
) -> Option<ValidationError> {
    match error {
        ProcessError::Resolved { name, kind } => Some(ValidationError::new(name, kind)),
        ProcessError::InvalidNestedValue {
            filter_name,
            input_value,
        } => Some(
            ValidationError::new(filter.name(), ErrorKind::InvalidNested)
                .with_detail("name", format!("{filter_name:?}"))
                .with_detail("value", input_value.to_string()),
        ),
        ProcessError::InvalidValue { index } => Some(
            ValidationError::new(name_with_index(filter.name(), index), ErrorKind::InvalidType)
                .with_detail("type", type_label(context, filter)),
        ),
        error @ ProcessError::InvalidDefault { .. } => panic!("invalid error {error}"),
    }
}

/// Resolves the human label for a filter's slug through the pass context.
fn type_label(context: &Context, filter: &dyn Filter) -> String {
    context.translations().type_label(filter.slug())
}

/// Appends an index suffix to a field name when the error is attributable
/// to one element of an ordered collection.
fn name_with_index(name: &str, index: Option<usize>) -> String {
    match index {
        Some(index) => format!("{name}[{index}]"),
        None => name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{IntegerFilter, StringFilter};
    use serde_json::json;

    #[test]
    fn test_name_with_index() {
        assert_eq!(name_with_index("tags", Some(2)), "tags[2]");
        assert_eq!(name_with_index("tags", None), "tags");
    }

    #[test]
    fn test_valid_pass_returns_no_errors() {
        let filters = FilterSet::new()
            .filter(StringFilter::new("name"))
            .filter(IntegerFilter::new("age"));
        let inputs = Inputs::from_iter([("name", json!("Ada")), ("age", json!(36))]);

        let errors = validate(&Context::new(), &filters, &inputs);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_resolved_pairs_pass_through_verbatim() {
        let filters = FilterSet::new().filter(IntegerFilter::new("age"));
        let inputs = Inputs::new();

        let errors = validate(&Context::new(), &filters, &inputs);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].name, "age");
        assert_eq!(errors[0].kind, ErrorKind::Missing);
        assert!(errors[0].detail.is_empty());
    }

    #[test]
    #[should_panic(expected = "invalid error")]
    fn test_contract_violations_are_fatal() {
        // a default the filter itself cannot accept is a programming error,
        // not a user input problem
        let filters = FilterSet::new().filter(IntegerFilter::new("age").default(json!("nope")));
        let inputs = Inputs::new();

        validate(&Context::new(), &filters, &inputs);
    }
}
