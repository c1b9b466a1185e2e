//! Accessors that report failures through a [`Context`] instead of returning
//! them.
//!
//! Each call hands back a usable value (the default on failure) so a caller
//! can unpack a whole object and inspect [`Context::error_count`] at the end.
//! Array walkers skip elements that fail to convert and keep going.

use serde_json::{Map, Value};

use crate::access;
use crate::context::Context;
use crate::errors::ValueError;
use crate::types::{check_enum, Coerce, Null};

pub fn require<T: Coerce + Default>(ctx: &mut Context<'_>, m: &mut Map<String, Value>, key: &str) -> T {
    ctx.check_with_key(access::require(m, key), key)
        .unwrap_or_default()
}

pub fn optional<T: Coerce + Clone>(ctx: &mut Context<'_>, m: &mut Map<String, Value>, key: &str, default: T) -> T {
    let fallback = default.clone();
    ctx.check_with_key(access::optional(m, key, default), key)
        .unwrap_or(fallback)
}

pub fn require_null(ctx: &mut Context<'_>, m: &mut Map<String, Value>, key: &str) {
    ctx.check_with_key(access::require::<Null>(m, key), key);
}

pub fn optional_null(ctx: &mut Context<'_>, m: &mut Map<String, Value>, key: &str) {
    ctx.check_with_key(access::optional(m, key, Null), key);
}

pub fn require_string_enum(
    ctx: &mut Context<'_>,
    m: &mut Map<String, Value>,
    key: &str,
    allowed: &[&str],
) -> String {
    ctx.check_with_key(access::require_string_enum(m, key, allowed), key)
        .unwrap_or_default()
}

pub fn optional_string_enum(
    ctx: &mut Context<'_>,
    m: &mut Map<String, Value>,
    key: &str,
    allowed: &[&str],
    default: &str,
) -> String {
    ctx.check_with_key(access::optional_string_enum(m, key, allowed, default), key)
        .unwrap_or_else(|| default.to_string())
}

/// Converts every element of the array at `key`, which must be present.
///
/// Elements that fail are reported as `key[i]` and left out of the result.
pub fn require_array_of<T: Coerce>(ctx: &mut Context<'_>, m: &mut Map<String, Value>, key: &str) -> Vec<T> {
    match ctx.check_with_key(access::require::<Vec<Value>>(m, key), key) {
        Some(items) => walk_array(ctx, key, items, T::coerce),
        None => Vec::new(),
    }
}

/// Like [`require_array_of`], but an absent key yields an empty vector.
pub fn optional_array_of<T: Coerce>(ctx: &mut Context<'_>, m: &mut Map<String, Value>, key: &str) -> Vec<T> {
    match ctx.check_with_key(access::optional::<Vec<Value>>(m, key, Vec::new()), key) {
        Some(items) => walk_array(ctx, key, items, T::coerce),
        None => Vec::new(),
    }
}

pub fn require_string_enum_array(
    ctx: &mut Context<'_>,
    m: &mut Map<String, Value>,
    key: &str,
    allowed: &[&str],
) -> Vec<String> {
    match ctx.check_with_key(access::require::<Vec<Value>>(m, key), key) {
        Some(items) => walk_array(ctx, key, items, |v| string_in(v, allowed)),
        None => Vec::new(),
    }
}

pub fn optional_string_enum_array(
    ctx: &mut Context<'_>,
    m: &mut Map<String, Value>,
    key: &str,
    allowed: &[&str],
) -> Vec<String> {
    match ctx.check_with_key(access::optional::<Vec<Value>>(m, key, Vec::new()), key) {
        Some(items) => walk_array(ctx, key, items, |v| string_in(v, allowed)),
        None => Vec::new(),
    }
}

fn string_in(v: Value, allowed: &[&str]) -> Result<String, ValueError> {
    let s = String::coerce(v)?;
    check_enum(&s, allowed)?;
    Ok(s)
}

fn walk_array<T, F>(ctx: &mut Context<'_>, key: &str, items: Vec<Value>, mut convert: F) -> Vec<T>
where
    F: FnMut(Value) -> Result<T, ValueError>,
{
    if items.is_empty() {
        return Vec::new();
    }
    ctx.descend(key, |ctx| {
        items
            .into_iter()
            .enumerate()
            .filter_map(|(i, v)| ctx.check_with_index(convert(v), i as i64))
            .collect()
    })
}
