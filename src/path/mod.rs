//! Locations inside nested map/array data.

pub mod element;
pub mod parsing;
pub mod style;

use std::fmt;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;
use std::sync::Arc;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

pub use element::{Element, ElementType, Range, RangeTag};
pub use parsing::{parse_index, parse_index_ext, parse_range};
pub use style::{DotNotation, PathStyle};

use crate::errors::PathError;

/// A stack of [`Element`]s rendered through a [`PathStyle`].
///
/// `Clone` is the branch operation: the copy owns its own element list and
/// can be mutated without affecting the original. Only the stateless style is
/// shared.
#[derive(Debug, Clone)]
pub struct Path {
    filename: Option<String>,
    elements: Vec<Element>,
    style: Arc<dyn PathStyle>,
}

impl Path {
    pub fn new(style: Arc<dyn PathStyle>) -> Self {
        Self { filename: None, elements: Vec::new(), style }
    }

    pub fn with_elements<I>(style: Arc<dyn PathStyle>, elements: I) -> Self
    where
        I: IntoIterator<Item = Element>,
    {
        Self { filename: None, elements: elements.into_iter().collect(), style }
    }

    /// Parses `value` with `style`; the style is kept for formatting.
    pub fn parse(style: Arc<dyn PathStyle>, value: &str) -> Result<Self, PathError> {
        let elements = style.parse(value)?;
        Ok(Self { filename: None, elements, style })
    }

    /// Appends an element.
    pub fn add(&mut self, elem: impl Into<Element>) -> &mut Self {
        self.elements.push(elem.into());
        self
    }

    /// Removes the last element; does nothing on an empty path.
    pub fn pop(&mut self) -> &mut Self {
        self.elements.pop();
        self
    }

    /// Removes up to `n` trailing elements.
    pub fn pop_n(&mut self, n: usize) -> &mut Self {
        let keep = self.elements.len().saturating_sub(n);
        self.elements.truncate(keep);
        self
    }

    /// Keeps the first `len` elements; no-op if the path is not longer.
    pub fn truncate(&mut self, len: usize) -> &mut Self {
        self.elements.truncate(len);
        self
    }

    pub fn clear(&mut self) -> &mut Self {
        self.elements.clear();
        self
    }

    /// Pushes `elem` for as long as the returned guard lives.
    ///
    /// The path is truncated back to its previous length when the guard is
    /// dropped, whatever was pushed or popped through it in between.
    pub fn scoped(&mut self, elem: impl Into<Element>) -> Scoped<'_> {
        let len = self.elements.len();
        self.elements.push(elem.into());
        Scoped { path: self, len }
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn last(&self) -> Option<&Element> {
        self.elements.last()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    /// Sets the informational source label printed before the path.
    pub fn set_filename(&mut self, filename: Option<String>) -> &mut Self {
        self.filename = filename;
        self
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    pub fn style(&self) -> &dyn PathStyle {
        self.style.as_ref()
    }

    /// The formatted elements without the filename prefix.
    pub fn format(&self) -> String {
        self.style.format(&self.elements)
    }
}

impl Default for Path {
    fn default() -> Self {
        Self::new(Arc::new(DotNotation))
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.filename.as_deref() {
            Some(name) if !name.is_empty() => write!(f, "{name}: {}", self.format()),
            _ => f.write_str(&self.format()),
        }
    }
}

/// Paths are equal when their filenames and elements are; styles are not
/// compared.
impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        self.filename == other.filename && self.elements == other.elements
    }
}

impl Eq for Path {}

impl FromStr for Path {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Path::parse(Arc::new(DotNotation), s)
    }
}

impl Serialize for Path {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.format())
    }
}

impl<'de> Deserialize<'de> for Path {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Guard returned by [`Path::scoped`].
pub struct Scoped<'p> {
    path: &'p mut Path,
    len: usize,
}

impl Deref for Scoped<'_> {
    type Target = Path;

    fn deref(&self) -> &Path {
        &*self.path
    }
}

impl DerefMut for Scoped<'_> {
    fn deref_mut(&mut self) -> &mut Path {
        &mut *self.path
    }
}

impl Drop for Scoped<'_> {
    fn drop(&mut self) {
        self.path.truncate(self.len);
    }
}
