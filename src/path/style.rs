use std::fmt::{self, Write as _};

use super::element::{Element, ElementType};
use super::parsing::Parser;
use crate::errors::PathError;

/// Formatter and parser for the string form of a path.
///
/// Styles are stateless and shared between paths behind an `Arc`, so
/// implementations must be `Send + Sync`.
pub trait PathStyle: fmt::Debug + Send + Sync {
    /// Whether this style keeps element types.
    ///
    /// A non-strict style may hand every element back as a key, leaving the
    /// consumer to interpret it against the data it is walking.
    fn strict(&self) -> bool;

    fn format(&self, elements: &[Element]) -> String;

    fn parse(&self, value: &str) -> Result<Vec<Element>, PathError>;
}

/// Dotted keys with bracketed indices, e.g. `one.two[3][1:2][-]`.
///
/// Key names may escape `.`, `[`, `]` and `\` with a backslash when parsed.
/// Formatting writes keys verbatim.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DotNotation;

impl PathStyle for DotNotation {
    fn strict(&self) -> bool {
        true
    }

    fn format(&self, elements: &[Element]) -> String {
        let mut out = String::new();
        for (i, e) in elements.iter().enumerate() {
            // Writing into a String cannot fail.
            let _ = match e.element_type() {
                ElementType::Index => write!(out, "[{e}]"),
                ElementType::Key if i == 0 => write!(out, "{e}"),
                ElementType::Key => write!(out, ".{e}"),
            };
        }
        out
    }

    fn parse(&self, value: &str) -> Result<Vec<Element>, PathError> {
        let elements = Parser::new(value).parse_dot_notation()?;
        tracing::trace!(path = value, count = elements.len(), "parsed dot-notation path");
        Ok(elements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::element::Range;
    use pretty_assertions::assert_eq;

    #[test]
    fn strict() {
        assert!(DotNotation.strict());
    }

    #[test]
    fn format_empty() {
        assert_eq!(DotNotation.format(&[]), "");
    }

    #[test]
    fn format_array_start() {
        let elems = [
            Element::Index(1),
            Element::Index(2),
            Element::key("three"),
            Element::key("four"),
            Element::Index(5),
        ];
        assert_eq!(DotNotation.format(&elems), "[1][2].three.four[5]");
    }

    #[test]
    fn format_key_start() {
        let elems = [
            Element::key("one"),
            Element::key("two"),
            Element::key("three"),
            Element::Index(4),
            Element::key("five"),
        ];
        assert_eq!(DotNotation.format(&elems), "one.two.three[4].five");
    }

    #[test]
    fn format_ranges_and_array_end() {
        let elems = [
            Element::Range(Range::empty()),
            Element::key("a"),
            Element::Range(Range::from_start(2)),
            Element::Range(Range::to_end(-1)),
            Element::ArrayEnd,
        ];
        assert_eq!(DotNotation.format(&elems), "[:].a[2:][:-1][-]");
    }

    #[test]
    fn parse_empty() {
        assert_eq!(DotNotation.parse(""), Ok(vec![]));
    }

    #[test]
    fn parse_lone_dot() {
        assert_eq!(DotNotation.parse("."), Ok(vec![Element::key("")]));
    }

    #[test]
    fn parse_good() {
        assert_eq!(
            DotNotation.parse("one.two[3][1:2][-]"),
            Ok(vec![
                Element::key("one"),
                Element::key("two"),
                Element::Index(3),
                Element::Range(Range::full(1, 2)),
                Element::ArrayEnd,
            ])
        );
        assert_eq!(
            DotNotation.parse("[1][2].three"),
            Ok(vec![Element::Index(1), Element::Index(2), Element::key("three")])
        );
        assert_eq!(
            DotNotation.parse("one[:]"),
            Ok(vec![Element::key("one"), Element::Range(Range::empty())])
        );
    }

    #[test]
    fn parse_escapes() {
        assert_eq!(
            DotNotation.parse(r"one\.\[12\].two\\"),
            Ok(vec![Element::key("one.[12]"), Element::key(r"two\")])
        );
        assert_eq!(DotNotation.parse(r"a\.b"), Ok(vec![Element::key("a.b")]));
    }

    #[test]
    fn parse_bad_escape() {
        assert_eq!(DotNotation.parse(r"12\"), Err(PathError::InvalidEscape));
    }

    #[test]
    fn parse_unclosed_index() {
        assert_eq!(DotNotation.parse("one[123"), Err(PathError::UnmatchedOpenBracket));
    }

    #[test]
    fn parse_unmatched_close() {
        assert_eq!(DotNotation.parse("one.]1["), Err(PathError::UnmatchedCloseBracket));
    }

    #[test]
    fn parse_missing_sep() {
        assert_eq!(DotNotation.parse("one[12]two"), Err(PathError::MissingSep));
        assert_eq!(DotNotation.parse("one[2]three"), Err(PathError::MissingSep));
    }
}
