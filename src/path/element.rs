use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse element type; ranges and the array-end marker count as indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementType {
    Key,
    Index,
}

/// Which bounds of a [`Range`] were written out explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeTag {
    Full,    // [start:end]
    NoStart, // [:end]
    NoEnd,   // [start:]
    Empty,   // [:]
}

/// An array slice descriptor.
///
/// An unspecified bound is always stored as `0`, so two ranges compare equal
/// exactly when they print the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Bounds", into = "Bounds")]
pub struct Range {
    start: i64,
    end: i64,
    tag: RangeTag,
}

impl Range {
    pub fn full(start: i64, end: i64) -> Self {
        Self { start, end, tag: RangeTag::Full }
    }

    pub fn from_start(start: i64) -> Self {
        Self { start, end: 0, tag: RangeTag::NoEnd }
    }

    pub fn to_end(end: i64) -> Self {
        Self { start: 0, end, tag: RangeTag::NoStart }
    }

    pub fn empty() -> Self {
        Self { start: 0, end: 0, tag: RangeTag::Empty }
    }

    /// Builds a range from optional bounds, deriving the tag.
    pub fn new(start: Option<i64>, end: Option<i64>) -> Self {
        match (start, end) {
            (Some(s), Some(e)) => Self::full(s, e),
            (Some(s), None) => Self::from_start(s),
            (None, Some(e)) => Self::to_end(e),
            (None, None) => Self::empty(),
        }
    }

    pub fn start(&self) -> Option<i64> {
        match self.tag {
            RangeTag::Full | RangeTag::NoEnd => Some(self.start),
            RangeTag::NoStart | RangeTag::Empty => None,
        }
    }

    pub fn end(&self) -> Option<i64> {
        match self.tag {
            RangeTag::Full | RangeTag::NoStart => Some(self.end),
            RangeTag::NoEnd | RangeTag::Empty => None,
        }
    }

    pub fn tag(&self) -> RangeTag {
        self.tag
    }
}

// Serialized form; going through `Range::new` keeps the tag consistent.
#[derive(Serialize, Deserialize)]
struct Bounds {
    start: Option<i64>,
    end: Option<i64>,
}

impl From<Bounds> for Range {
    fn from(b: Bounds) -> Self {
        Range::new(b.start, b.end)
    }
}

impl From<Range> for Bounds {
    fn from(r: Range) -> Self {
        Bounds { start: r.start(), end: r.end() }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.tag {
            RangeTag::Full => write!(f, "{}:{}", self.start, self.end),
            RangeTag::NoEnd => write!(f, "{}:", self.start),
            RangeTag::NoStart => write!(f, ":{}", self.end),
            RangeTag::Empty => f.write_str(":"),
        }
    }
}

/// One segment of a [`Path`](super::Path).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    /// A map member.
    Key(String),
    /// An array position; negative values are left to the consumer.
    Index(i64),
    /// An array slice.
    Range(Range),
    /// One past the last array element, i.e. an append position.
    ArrayEnd,
}

impl Element {
    pub fn key(name: impl Into<String>) -> Self {
        Element::Key(name.into())
    }

    pub fn element_type(&self) -> ElementType {
        match self {
            Element::Key(_) => ElementType::Key,
            Element::Index(_) | Element::Range(_) | Element::ArrayEnd => ElementType::Index,
        }
    }
}

/// The bare form of the element: no brackets and no separator.
impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Key(k) => f.write_str(k),
            Element::Index(i) => write!(f, "{i}"),
            Element::Range(r) => fmt::Display::fmt(r, f),
            Element::ArrayEnd => f.write_str("-"),
        }
    }
}

impl From<Range> for Element {
    fn from(r: Range) -> Self {
        Element::Range(r)
    }
}

impl From<i64> for Element {
    fn from(i: i64) -> Self {
        Element::Index(i)
    }
}

impl From<&str> for Element {
    fn from(k: &str) -> Self {
        Element::Key(k.to_string())
    }
}

impl From<String> for Element {
    fn from(k: String) -> Self {
        Element::Key(k)
    }
}
