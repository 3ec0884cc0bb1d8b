//! Best-effort conversion of resolved values into static types.
//!
//! Strings and booleans convert only from their own variant. Numbers also
//! accept strings holding a float literal, and integers are produced by
//! truncating toward zero, so `6.7` becomes `6` and `-6.7` becomes `-6`.

use super::error::{CoercionError, Expected};
use crate::document::node::{Mapping, YamlValue};

/// Returns the string held by `value`. Numbers and booleans are not stringified.
pub fn string(value: &YamlValue) -> Result<String, CoercionError> {
    match value {
        YamlValue::String(s) => Ok(s.clone()),
        _ => Err(CoercionError::new(Expected::String, value)),
    }
}

pub fn boolean(value: &YamlValue) -> Result<bool, CoercionError> {
    match value {
        YamlValue::Boolean(b) => Ok(*b),
        _ => Err(CoercionError::new(Expected::Boolean, value)),
    }
}

/// Returns a number, parsing string values as float literals.
///
/// A literal too large for `f64`, such as `"1e400"`, is an error rather than
/// infinity. Only an explicit `inf` or `infinity` spelling yields infinity.
pub fn number(value: &YamlValue) -> Result<f64, CoercionError> {
    match value {
        YamlValue::Number(n) => Ok(*n),
        YamlValue::String(s) => {
            parse_float(s).ok_or_else(|| CoercionError::new(Expected::Number, value))
        }
        _ => Err(CoercionError::new(Expected::Number, value)),
    }
}

fn parse_float(literal: &str) -> Option<f64> {
    let n = literal.parse::<f64>().ok()?;
    if n.is_infinite() && !is_infinity_literal(literal) {
        return None;
    }
    Some(n)
}

fn is_infinity_literal(literal: &str) -> bool {
    let unsigned = literal.trim_start_matches(['+', '-']);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

/// Returns an integer, truncating toward zero.
///
/// Strings are parsed as floats first, so `"6.7"` also yields `6`. Values
/// outside the `i64` range saturate and NaN becomes `0`.
///
/// # Example
///
/// ```
/// use yamlquery::document::node::YamlValue;
/// use yamlquery::query::coerce::integer;
///
/// assert_eq!(integer(&YamlValue::Number(-6.7)).unwrap(), -6);
/// assert_eq!(integer(&YamlValue::String("6.7".into())).unwrap(), 6);
/// ```
pub fn integer(value: &YamlValue) -> Result<i64, CoercionError> {
    number(value)
        .map(|n| n.trunc() as i64)
        .map_err(|_| CoercionError::new(Expected::Integer, value))
}

pub fn object(value: &YamlValue) -> Result<Mapping, CoercionError> {
    match value {
        YamlValue::Object(fields) => Ok(fields.clone()),
        _ => Err(CoercionError::new(Expected::Object, value)),
    }
}

pub fn sequence(value: &YamlValue) -> Result<Vec<YamlValue>, CoercionError> {
    items(value).map(<[YamlValue]>::to_vec)
}

/// Borrows the elements of a sequence value.
pub(crate) fn items(value: &YamlValue) -> Result<&[YamlValue], CoercionError> {
    match value {
        YamlValue::Sequence(items) => Ok(items),
        _ => Err(CoercionError::new(Expected::Sequence, value)),
    }
}

/// Types a resolved value can be coerced into.
///
/// `Default` supplies the zero value used to pad partial sequence results.
pub trait FromYaml: Sized + Default {
    /// Converts `value`, or reports what was expected.
    fn from_yaml(value: &YamlValue) -> Result<Self, CoercionError>;
}

impl FromYaml for String {
    fn from_yaml(value: &YamlValue) -> Result<Self, CoercionError> {
        string(value)
    }
}

impl FromYaml for bool {
    fn from_yaml(value: &YamlValue) -> Result<Self, CoercionError> {
        boolean(value)
    }
}

impl FromYaml for f64 {
    fn from_yaml(value: &YamlValue) -> Result<Self, CoercionError> {
        number(value)
    }
}

impl FromYaml for i64 {
    fn from_yaml(value: &YamlValue) -> Result<Self, CoercionError> {
        integer(value)
    }
}

impl FromYaml for Mapping {
    fn from_yaml(value: &YamlValue) -> Result<Self, CoercionError> {
        object(value)
    }
}

impl FromYaml for Vec<YamlValue> {
    fn from_yaml(value: &YamlValue) -> Result<Self, CoercionError> {
        sequence(value)
    }
}

impl FromYaml for YamlValue {
    fn from_yaml(value: &YamlValue) -> Result<Self, CoercionError> {
        Ok(value.clone())
    }
}
