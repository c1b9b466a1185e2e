//! Coercion of untyped `serde_json::Value`s into concrete types.

use serde_json::{Map, Number, Value};

use crate::errors::ValueError;

pub const TYPE_ARRAY: &str = "array";
pub const TYPE_BOOLEAN: &str = "boolean";
pub const TYPE_INTEGER: &str = "integer";
pub const TYPE_NULL: &str = "null";
pub const TYPE_NUMBER: &str = "number";
pub const TYPE_OBJECT: &str = "object";
pub const TYPE_STRING: &str = "string";

/// JSON-like name of the value's type.
///
/// Floats without a fractional part report as `integer`.
pub fn type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => TYPE_NULL,
        Value::Bool(_) => TYPE_BOOLEAN,
        Value::Number(n) => number_type_name(n),
        Value::String(_) => TYPE_STRING,
        Value::Array(_) => TYPE_ARRAY,
        Value::Object(_) => TYPE_OBJECT,
    }
}

fn number_type_name(n: &Number) -> &'static str {
    if n.is_i64() || n.is_u64() {
        return TYPE_INTEGER;
    }
    match n.as_f64() {
        Some(f) if f.trunc() == f => TYPE_INTEGER,
        _ => TYPE_NUMBER,
    }
}

fn invalid(expected: &[&'static str], v: &Value) -> ValueError {
    ValueError::InvalidType {
        expected: expected.to_vec(),
        actual: type_name(v),
    }
}

/// Fails unless the value is one of `types`; an integer also satisfies
/// `number`.
pub fn is(v: &Value, types: &[&'static str]) -> Result<(), ValueError> {
    let name = type_name(v);
    let ok = types
        .iter()
        .any(|t| *t == name || (*t == TYPE_NUMBER && name == TYPE_INTEGER));
    if ok {
        Ok(())
    } else {
        Err(invalid(types, v))
    }
}

pub fn as_array(v: &Value) -> Result<&Vec<Value>, ValueError> {
    v.as_array().ok_or_else(|| invalid(&[TYPE_ARRAY], v))
}

pub fn as_boolean(v: &Value) -> Result<bool, ValueError> {
    v.as_bool().ok_or_else(|| invalid(&[TYPE_BOOLEAN], v))
}

/// Integers pass through; floats only when they have no fractional part.
///
/// Values outside the `i64` range fail, reporting their own type name.
pub fn as_integer(v: &Value) -> Result<i64, ValueError> {
    let Value::Number(n) = v else {
        return Err(invalid(&[TYPE_INTEGER], v));
    };
    if let Some(i) = n.as_i64() {
        return Ok(i);
    }
    match n.as_f64() {
        Some(f) if f.trunc() == f && f >= i64::MIN as f64 && f < i64::MAX as f64 => Ok(f as i64),
        _ => Err(invalid(&[TYPE_INTEGER], v)),
    }
}

pub fn as_number(v: &Value) -> Result<f64, ValueError> {
    v.as_f64().ok_or_else(|| invalid(&[TYPE_NUMBER], v))
}

pub fn as_object(v: &Value) -> Result<&Map<String, Value>, ValueError> {
    v.as_object().ok_or_else(|| invalid(&[TYPE_OBJECT], v))
}

pub fn as_string(v: &Value) -> Result<&str, ValueError> {
    v.as_str().ok_or_else(|| invalid(&[TYPE_STRING], v))
}

/// Fails unless `value` is one of `allowed`.
pub fn check_enum(value: &str, allowed: &[&str]) -> Result<(), ValueError> {
    if allowed.contains(&value) {
        return Ok(());
    }
    Err(ValueError::EnumMismatch {
        value: value.to_string(),
        allowed: allowed.iter().map(|s| s.to_string()).collect(),
    })
}

/// Marker for values that must be JSON `null`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Null;

/// Owned conversion out of an untyped value.
pub trait Coerce: Sized {
    fn coerce(v: Value) -> Result<Self, ValueError>;
}

impl Coerce for Value {
    fn coerce(v: Value) -> Result<Self, ValueError> {
        Ok(v)
    }
}

impl Coerce for Null {
    fn coerce(v: Value) -> Result<Self, ValueError> {
        match v {
            Value::Null => Ok(Null),
            other => Err(invalid(&[TYPE_NULL], &other)),
        }
    }
}

impl Coerce for bool {
    fn coerce(v: Value) -> Result<Self, ValueError> {
        as_boolean(&v)
    }
}

impl Coerce for i64 {
    fn coerce(v: Value) -> Result<Self, ValueError> {
        as_integer(&v)
    }
}

impl Coerce for f64 {
    fn coerce(v: Value) -> Result<Self, ValueError> {
        as_number(&v)
    }
}

impl Coerce for String {
    fn coerce(v: Value) -> Result<Self, ValueError> {
        match v {
            Value::String(s) => Ok(s),
            other => Err(invalid(&[TYPE_STRING], &other)),
        }
    }
}

impl Coerce for Vec<Value> {
    fn coerce(v: Value) -> Result<Self, ValueError> {
        match v {
            Value::Array(a) => Ok(a),
            other => Err(invalid(&[TYPE_ARRAY], &other)),
        }
    }
}

impl Coerce for Map<String, Value> {
    fn coerce(v: Value) -> Result<Self, ValueError> {
        match v {
            Value::Object(m) => Ok(m),
            other => Err(invalid(&[TYPE_OBJECT], &other)),
        }
    }
}
