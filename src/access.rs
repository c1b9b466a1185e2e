//! Typed lookups on a JSON object.
//!
//! `get` borrows the map; `pop`, `require` and `optional` take the value out of
//! it, so whatever is left afterwards was never consumed.

use serde_json::{Map, Value};

use crate::errors::ValueError;
use crate::types::{check_enum, Coerce};

/// `Ok(None)` when `key` is absent.
pub fn get<T: Coerce>(m: &Map<String, Value>, key: &str) -> Result<Option<T>, ValueError> {
    m.get(key).cloned().map(T::coerce).transpose()
}

/// Like [`get`] but removes the key. The key is removed even when the value
/// fails to coerce.
pub fn pop<T: Coerce>(m: &mut Map<String, Value>, key: &str) -> Result<Option<T>, ValueError> {
    m.remove(key).map(T::coerce).transpose()
}

/// Removes and converts `key`, failing if it is absent.
pub fn require<T: Coerce>(m: &mut Map<String, Value>, key: &str) -> Result<T, ValueError> {
    pop(m, key)?.ok_or_else(|| ValueError::MissingRequiredValue { key: key.to_string() })
}

/// Removes and converts `key`, falling back to `default` if it is absent.
pub fn optional<T: Coerce>(m: &mut Map<String, Value>, key: &str, default: T) -> Result<T, ValueError> {
    Ok(pop(m, key)?.unwrap_or(default))
}

fn in_enum(s: String, allowed: &[&str]) -> Result<String, ValueError> {
    check_enum(&s, allowed)?;
    Ok(s)
}

pub fn get_string_enum(
    m: &Map<String, Value>,
    key: &str,
    allowed: &[&str],
) -> Result<Option<String>, ValueError> {
    get::<String>(m, key)?.map(|s| in_enum(s, allowed)).transpose()
}

pub fn pop_string_enum(
    m: &mut Map<String, Value>,
    key: &str,
    allowed: &[&str],
) -> Result<Option<String>, ValueError> {
    pop::<String>(m, key)?.map(|s| in_enum(s, allowed)).transpose()
}

pub fn require_string_enum(
    m: &mut Map<String, Value>,
    key: &str,
    allowed: &[&str],
) -> Result<String, ValueError> {
    in_enum(require(m, key)?, allowed)
}

/// The default is returned as-is and is not checked against `allowed`.
pub fn optional_string_enum(
    m: &mut Map<String, Value>,
    key: &str,
    allowed: &[&str],
    default: &str,
) -> Result<String, ValueError> {
    match pop::<String>(m, key)? {
        Some(s) => in_enum(s, allowed),
        None => Ok(default.to_string()),
    }
}
