//! # Vestibule
//!
//! Declarative input coercion and validation for service-style business
//! objects. A [`FilterSet`] names and types each input; the validation
//! driver runs every filter against a raw [`Inputs`] mapping, coerces
//! values toward their declared representations, and aggregates
//! human-readable errors instead of stopping at the first failure.
//!
//! ## Overview
//!
//! Numeric filters follow a two-phase contract: a speculative conversion
//! rebuilds the raw value in the target representation when its content
//! allows, and a membership check run afterwards decides pass/fail. One
//! coercion routine serves every numeric representation, and malformed
//! input surfaces as a per-field validation error rather than a failure of
//! the pass.
//!
//! ## Core Types
//!
//! - [`Filter`]: a named coercion rule for one input field
//! - [`FilterSet`]: the declaration-ordered set of filters for one pass
//! - [`NumericKind`]: the numeric representations and their coercion rules
//! - [`ValidationError`]: a translated (name, kind, detail) output triple
//! - [`ValidationErrors`]: a non-empty collection of validation errors
//! - [`Context`]/[`Translations`]: the injected translation catalog
//!
//! ## Example
//!
//! ```rust
//! use serde_json::json;
//! use vestibule::{validate, Context, ErrorKind, FilterSet, Inputs};
//! use vestibule::{IntegerFilter, StringFilter};
//!
//! let filters = FilterSet::new()
//!     .filter(StringFilter::new("name"))
//!     .filter(IntegerFilter::new("age"));
//!
//! // numeric strings coerce; validation passes
//! let inputs = Inputs::from_iter([("name", json!("Ada")), ("age", json!("36"))]);
//! assert!(validate(&Context::new(), &filters, &inputs).is_empty());
//!
//! // malformed content becomes a structured error for just that field
//! let inputs = Inputs::from_iter([("name", json!("Ada")), ("age", json!("abc"))]);
//! let errors = validate(&Context::new(), &filters, &inputs);
//! assert_eq!(errors.len(), 1);
//! assert_eq!(errors[0].name, "age");
//! assert_eq!(errors[0].kind, ErrorKind::InvalidType);
//! ```

pub mod error;
pub mod filter;
pub mod input;
pub mod translate;
pub mod validation;

pub use error::{ErrorKind, ProcessError, ValidationError, ValidationErrors};
pub use filter::{
    ArrayFilter, BooleanFilter, Coercion, DecimalFilter, Filter, FilterSet, FloatFilter,
    HashFilter, IntegerFilter, NumericKind, ProcessedInput, StringFilter,
};
pub use input::Inputs;
pub use translate::{Context, Translations};
pub use validation::{run, validate};

/// Type alias for validation results using ValidationErrors.
pub type ValidationResult<T> = stillwater::Validation<T, ValidationErrors>;
