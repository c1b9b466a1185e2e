// src/path/parsing.rs
use super::element::{Element, Range};
use crate::errors::PathError;

/// Parses the text found between a pair of brackets.
///
/// The text is scanned for a `:` separator first; more than one separator is
/// rejected with [`PathError::BadRange`].
pub fn parse_index(text: &str) -> Result<Element, PathError> {
    let mut sep = None;
    for (i, c) in text.char_indices() {
        if c == ':' {
            if sep.is_some() {
                return Err(PathError::BadRange);
            }
            sep = Some(i);
        }
    }
    parse_index_ext(text, sep)
}

/// Parses bracket text when the separator position is already known.
///
/// `sep` is the byte offset of the single `:` in `text`, or `None` when there
/// is no separator. Use [`parse_index`] when the position is unknown.
pub fn parse_index_ext(text: &str, sep: Option<usize>) -> Result<Element, PathError> {
    if let Some(sep) = sep {
        return parse_range(text, sep);
    }

    let val = text.trim();
    if val == "-" {
        return Ok(Element::ArrayEnd);
    }
    val.parse::<i64>()
        .map(Element::Index)
        .map_err(|_| PathError::BadIndex)
}

/// Parses `start:end` where `sep` is the byte offset of the `:`.
///
/// Either side may be blank, which leaves that bound unspecified.
pub fn parse_range(text: &str, sep: usize) -> Result<Element, PathError> {
    let end_at = sep.checked_add(1);
    let (Some(start), Some(end)) = (text.get(..sep), end_at.and_then(|i| text.get(i..))) else {
        return Err(PathError::BadRange);
    };
    let start = parse_bound(start).map_err(|value| PathError::BadRangeStart { value })?;
    let end = parse_bound(end).map_err(|value| PathError::BadRangeEnd { value })?;
    Ok(Element::Range(Range::new(start, end)))
}

// Blank means unspecified; on failure the trimmed text is handed back.
fn parse_bound(text: &str) -> Result<Option<i64>, String> {
    let t = text.trim();
    if t.is_empty() {
        return Ok(None);
    }
    t.parse::<i64>().map(Some).map_err(|_| t.to_string())
}

/// Single-pass scanner over a dot-notation path string.
pub(crate) struct Parser<'a> {
    s: &'a str,
    i: usize,
}

impl<'a> Parser<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    pub fn parse_dot_notation(&mut self) -> Result<Vec<Element>, PathError> {
        let mut elements = Vec::new();
        let mut first = true;
        while let Some(c) = self.peek_char() {
            let elem = match c {
                '.' => {
                    self.bump(c);
                    self.parse_key()?
                }
                '[' => {
                    self.bump(c);
                    self.parse_bracket()?
                }
                ']' => return Err(PathError::UnmatchedCloseBracket),
                // Only the very first key may omit its leading dot.
                _ if first => self.parse_key()?,
                _ => return Err(PathError::MissingSep),
            };
            elements.push(elem);
            first = false;
        }
        Ok(elements)
    }

    // Stops at, but does not consume, the next unescaped `.`, `[` or `]`.
    fn parse_key(&mut self) -> Result<Element, PathError> {
        let mut key = String::new();
        while let Some(c) = self.peek_char() {
            match c {
                '.' | '[' | ']' => break,
                '\\' => {
                    self.bump(c);
                    let escaped = self.peek_char().ok_or(PathError::InvalidEscape)?;
                    key.push(escaped);
                    self.bump(escaped);
                }
                _ => {
                    key.push(c);
                    self.bump(c);
                }
            }
        }
        Ok(Element::Key(key))
    }

    fn parse_bracket(&mut self) -> Result<Element, PathError> {
        let content = self
            .capture_until(']')
            .ok_or(PathError::UnmatchedOpenBracket)?;
        self.bump(']');
        parse_index(content)
    }

    fn capture_until(&mut self, end: char) -> Option<&'a str> {
        let start = self.i;
        while let Some(c) = self.peek_char() {
            if c == end {
                return Some(&self.s[start..self.i]);
            }
            self.bump(c);
        }
        None
    }

    fn peek_char(&self) -> Option<char> {
        self.s[self.i..].chars().next()
    }

    fn bump(&mut self, c: char) {
        self.i += c.len_utf8();
    }
}
