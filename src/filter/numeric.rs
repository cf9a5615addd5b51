//! Numeric coercion and the numeric filter variants.
//!
//! This module implements the two-phase numeric contract shared by the
//! integer, float, and decimal filters: a speculative
//! [`convert`](NumericKind::convert) that rebuilds a raw value in the target
//! representation when its content allows, followed by a
//! [`matches`](NumericKind::matches) membership check that decides pass/fail.
//! Conversion is tried cheaply; the match check run afterwards is what
//! classifies the value, so malformed content surfaces as a per-field
//! validation error rather than a failure of the whole pass.

use std::str::FromStr;

use bigdecimal::{BigDecimal, ToPrimitive};
use serde_json::{Number, Value};

use crate::error::ProcessError;
use crate::translate::Context;

use super::traits::{process_with_default, Filter, ProcessedInput};

/// Target numeric representation a filter coerces toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericKind {
    /// Whole numbers in i64/u64 range.
    Integer,
    /// Binary floating point.
    Float,
    /// Decimal literals parsed with arbitrary precision, carried as JSON
    /// numbers.
    Decimal,
}

/// Outcome of a speculative numeric conversion.
///
/// Conversion never fails the pass: content that cannot form the target
/// representation yields `Unconvertible`, the caller keeps the original
/// value, and the membership check classifies the mismatch.
#[derive(Debug, Clone, PartialEq)]
pub enum Coercion {
    /// The value rebuilt in the target representation.
    Converted(Value),
    /// The value's content or shape cannot form the target representation.
    Unconvertible,
}

impl NumericKind {
    /// The slug of the filter variant backed by this representation.
    pub fn slug(self) -> &'static str {
        match self {
            NumericKind::Integer => "integer",
            NumericKind::Float => "float",
            NumericKind::Decimal => "decimal",
        }
    }

    /// True iff `value` already inhabits this representation.
    ///
    /// An integer-stored number does not match `Float`; it has to be
    /// converted first. Values with no numeric identity at all (null,
    /// booleans, strings, collections) return false rather than failing
    /// the check.
    pub fn matches(self, value: &Value) -> bool {
        let Value::Number(n) = value else {
            return false;
        };
        match self {
            NumericKind::Integer => n.is_i64() || n.is_u64(),
            NumericKind::Float => n.is_f64(),
            NumericKind::Decimal => true,
        }
    }

    /// Attempts to rebuild `value` in this representation.
    ///
    /// Strategy order: values that are already numeric are rebuilt directly
    /// from their number; values with a string form are parsed as a trimmed
    /// numeric literal; every other shape is [`Coercion::Unconvertible`] and
    /// left to the membership check.
    pub fn convert(self, value: &Value) -> Coercion {
        match value {
            Value::Number(n) => self.from_number(n),
            Value::String(s) => self.from_literal(s.trim()),
            _ => Coercion::Unconvertible,
        }
    }

    fn from_number(self, n: &Number) -> Coercion {
        match self {
            NumericKind::Integer => {
                if n.is_i64() || n.is_u64() {
                    return Coercion::Converted(Value::Number(n.clone()));
                }
                // fractional floats truncate toward zero; non-finite or
                // out-of-range content has no integer form
                match n.as_f64() {
                    Some(f) if f.is_finite() && f >= i64::MIN as f64 && f <= i64::MAX as f64 => {
                        Coercion::Converted(Value::Number(Number::from(f.trunc() as i64)))
                    }
                    _ => Coercion::Unconvertible,
                }
            }
            NumericKind::Float => match n.as_f64().and_then(Number::from_f64) {
                Some(out) => Coercion::Converted(Value::Number(out)),
                None => Coercion::Unconvertible,
            },
            NumericKind::Decimal => Coercion::Converted(Value::Number(n.clone())),
        }
    }

    fn from_literal(self, s: &str) -> Coercion {
        match self {
            NumericKind::Integer => match s.parse::<i64>() {
                Ok(i) => Coercion::Converted(Value::Number(Number::from(i))),
                Err(_) => Coercion::Unconvertible,
            },
            NumericKind::Float => match s.parse::<f64>().ok().and_then(Number::from_f64) {
                Some(out) => Coercion::Converted(Value::Number(out)),
                None => Coercion::Unconvertible,
            },
            NumericKind::Decimal => {
                let Ok(d) = BigDecimal::from_str(s) else {
                    return Coercion::Unconvertible;
                };
                let number = if d.is_integer() {
                    d.to_i64().map(Number::from)
                } else {
                    d.to_f64().filter(|f| f.is_finite()).and_then(Number::from_f64)
                };
                match number {
                    Some(out) => Coercion::Converted(Value::Number(out)),
                    None => Coercion::Unconvertible,
                }
            }
        }
    }
}

/// Processing shared by the numeric filter variants.
#[derive(Debug, Clone)]
struct NumericFilter {
    name: String,
    kind: NumericKind,
    default: Option<Value>,
}

impl NumericFilter {
    fn new(name: impl Into<String>, kind: NumericKind) -> Self {
        Self {
            name: name.into(),
            kind,
            default: None,
        }
    }

    fn accept(&self, raw: &Value) -> ProcessedInput {
        let candidate = match self.kind.convert(raw) {
            Coercion::Converted(v) => v,
            Coercion::Unconvertible => raw.clone(),
        };
        if self.kind.matches(&candidate) {
            ProcessedInput::accepted(candidate)
        } else {
            ProcessedInput::rejected(candidate, ProcessError::InvalidValue { index: None })
        }
    }

    fn process(&self, value: Option<&Value>) -> ProcessedInput {
        process_with_default(&self.name, self.default.as_ref(), value, |v| self.accept(v))
    }
}

/// Filter for whole-number inputs.
///
/// Accepts integers directly, truncates floats toward zero, and parses
/// integer literals out of strings.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use vestibule::{Context, Filter, IntegerFilter};
///
/// let filter = IntegerFilter::new("age");
/// let context = Context::new();
///
/// let out = filter.process(Some(&json!("36")), &context);
/// assert_eq!(out.value, json!(36));
/// assert!(out.error.is_none());
///
/// let out = filter.process(Some(&json!("abc")), &context);
/// assert!(out.error.is_some());
/// ```
#[derive(Debug, Clone)]
pub struct IntegerFilter(NumericFilter);

impl IntegerFilter {
    /// Creates an integer filter for the given field.
    pub fn new(name: impl Into<String>) -> Self {
        Self(NumericFilter::new(name, NumericKind::Integer))
    }

    /// Uses `default` when the input is absent or null.
    pub fn default(mut self, default: Value) -> Self {
        self.0.default = Some(default);
        self
    }
}

impl Filter for IntegerFilter {
    fn name(&self) -> &str {
        &self.0.name
    }

    fn slug(&self) -> &'static str {
        self.0.kind.slug()
    }

    fn process(&self, value: Option<&Value>, _context: &Context) -> ProcessedInput {
        self.0.process(value)
    }
}

/// Filter for floating-point inputs.
///
/// Accepts floats directly, widens integers, and parses float literals out
/// of strings. Non-finite results are rejected so accepted values stay
/// representable as JSON numbers.
#[derive(Debug, Clone)]
pub struct FloatFilter(NumericFilter);

impl FloatFilter {
    /// Creates a float filter for the given field.
    pub fn new(name: impl Into<String>) -> Self {
        Self(NumericFilter::new(name, NumericKind::Float))
    }

    /// Uses `default` when the input is absent or null.
    pub fn default(mut self, default: Value) -> Self {
        self.0.default = Some(default);
        self
    }
}

impl Filter for FloatFilter {
    fn name(&self) -> &str {
        &self.0.name
    }

    fn slug(&self) -> &'static str {
        self.0.kind.slug()
    }

    fn process(&self, value: Option<&Value>, _context: &Context) -> ProcessedInput {
        self.0.process(value)
    }
}

/// Filter for decimal inputs.
///
/// Accepts any JSON number directly; string literals are parsed with
/// arbitrary precision, so content beyond f64's literal grammar (exponent
/// forms, long fractions) is still recognized before being carried as a
/// JSON number.
#[derive(Debug, Clone)]
pub struct DecimalFilter(NumericFilter);

impl DecimalFilter {
    /// Creates a decimal filter for the given field.
    pub fn new(name: impl Into<String>) -> Self {
        Self(NumericFilter::new(name, NumericKind::Decimal))
    }

    /// Uses `default` when the input is absent or null.
    pub fn default(mut self, default: Value) -> Self {
        self.0.default = Some(default);
        self
    }
}

impl Filter for DecimalFilter {
    fn name(&self) -> &str {
        &self.0.name
    }

    fn slug(&self) -> &'static str {
        self.0.kind.slug()
    }

    fn process(&self, value: Option<&Value>, _context: &Context) -> ProcessedInput {
        self.0.process(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_integer_matches_integers_only() {
        assert!(NumericKind::Integer.matches(&json!(42)));
        assert!(NumericKind::Integer.matches(&json!(-42)));
        assert!(NumericKind::Integer.matches(&json!(u64::MAX)));
        assert!(!NumericKind::Integer.matches(&json!(1.5)));
        assert!(!NumericKind::Integer.matches(&json!("42")));
        assert!(!NumericKind::Integer.matches(&json!(null)));
    }

    #[test]
    fn test_float_does_not_match_integer_stored_numbers() {
        assert!(NumericKind::Float.matches(&json!(1.5)));
        assert!(!NumericKind::Float.matches(&json!(5)));
    }

    #[test]
    fn test_decimal_matches_any_number() {
        assert!(NumericKind::Decimal.matches(&json!(5)));
        assert!(NumericKind::Decimal.matches(&json!(1.5)));
        assert!(!NumericKind::Decimal.matches(&json!("1.5")));
    }

    #[test]
    fn test_matches_tolerates_shapeless_values() {
        for kind in [NumericKind::Integer, NumericKind::Float, NumericKind::Decimal] {
            assert!(!kind.matches(&json!(null)));
            assert!(!kind.matches(&json!(true)));
            assert!(!kind.matches(&json!([1])));
            assert!(!kind.matches(&json!({"a": 1})));
        }
    }

    #[test]
    fn test_convert_integer_from_float_truncates() {
        assert_eq!(
            NumericKind::Integer.convert(&json!(42.7)),
            Coercion::Converted(json!(42))
        );
        assert_eq!(
            NumericKind::Integer.convert(&json!(-42.7)),
            Coercion::Converted(json!(-42))
        );
    }

    #[test]
    fn test_convert_integer_from_literal() {
        assert_eq!(
            NumericKind::Integer.convert(&json!("42")),
            Coercion::Converted(json!(42))
        );
        assert_eq!(
            NumericKind::Integer.convert(&json!("  -7  ")),
            Coercion::Converted(json!(-7))
        );
        assert_eq!(
            NumericKind::Integer.convert(&json!("abc")),
            Coercion::Unconvertible
        );
        assert_eq!(
            NumericKind::Integer.convert(&json!("4.5")),
            Coercion::Unconvertible
        );
    }

    #[test]
    fn test_convert_float_widens_integers() {
        let Coercion::Converted(v) = NumericKind::Float.convert(&json!(5)) else {
            panic!("expected conversion");
        };
        assert!(NumericKind::Float.matches(&v));
        assert_eq!(v.as_f64(), Some(5.0));
    }

    #[test]
    fn test_convert_float_rejects_non_finite_literals() {
        assert_eq!(NumericKind::Float.convert(&json!("NaN")), Coercion::Unconvertible);
        assert_eq!(NumericKind::Float.convert(&json!("inf")), Coercion::Unconvertible);
        assert_eq!(
            NumericKind::Float.convert(&json!("3.5")),
            Coercion::Converted(json!(3.5))
        );
    }

    #[test]
    fn test_convert_decimal_from_literal() {
        assert_eq!(
            NumericKind::Decimal.convert(&json!("1.25")),
            Coercion::Converted(json!(1.25))
        );
        // integer-valued literals come back integer-stored
        assert_eq!(
            NumericKind::Decimal.convert(&json!("5")),
            Coercion::Converted(json!(5))
        );
        assert_eq!(
            NumericKind::Decimal.convert(&json!("2e2")),
            Coercion::Converted(json!(200))
        );
        assert_eq!(
            NumericKind::Decimal.convert(&json!("1.2.3")),
            Coercion::Unconvertible
        );
    }

    #[test]
    fn test_convert_defers_on_shapeless_values() {
        for kind in [NumericKind::Integer, NumericKind::Float, NumericKind::Decimal] {
            assert_eq!(kind.convert(&json!(true)), Coercion::Unconvertible);
            assert_eq!(kind.convert(&json!([1, 2])), Coercion::Unconvertible);
            assert_eq!(kind.convert(&json!({"a": 1})), Coercion::Unconvertible);
        }
    }

    #[test]
    fn test_filter_accepts_matching_value_unchanged() {
        let filter = IntegerFilter::new("age");
        let out = filter.process(Some(&json!(36)), &Context::new());
        assert!(out.is_accepted());
        assert_eq!(out.value, json!(36));
    }

    #[test]
    fn test_filter_keeps_original_value_when_unconvertible() {
        let filter = IntegerFilter::new("age");
        let out = filter.process(Some(&json!("abc")), &Context::new());
        assert_eq!(out.value, json!("abc"));
        assert_eq!(out.error, Some(ProcessError::InvalidValue { index: None }));
    }

    #[test]
    fn test_filter_default_is_coerced() {
        let filter = FloatFilter::new("rate").default(json!(3));
        let out = filter.process(None, &Context::new());
        assert!(out.is_accepted());
        assert!(NumericKind::Float.matches(&out.value));
    }

    #[test]
    fn test_filter_slugs() {
        assert_eq!(IntegerFilter::new("a").slug(), "integer");
        assert_eq!(FloatFilter::new("a").slug(), "float");
        assert_eq!(DecimalFilter::new("a").slug(), "decimal");
        assert_eq!(DecimalFilter::new("a").database_column_type(), "decimal");
    }
}
