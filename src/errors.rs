use std::fmt;

use itertools::Itertools;
use thiserror::Error;

/// Root categories used to match errors without caring about their payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidRange,
    InvalidIndex,
    InvalidPath,
    InvalidType,
    InvalidValue,
    MissingRequiredValue,
    Other,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorKind::InvalidRange => "invalid range",
            ErrorKind::InvalidIndex => "invalid index",
            ErrorKind::InvalidPath => "invalid path",
            ErrorKind::InvalidType => "invalid type",
            ErrorKind::InvalidValue => "invalid value",
            ErrorKind::MissingRequiredValue => "missing required value",
            ErrorKind::Other => "error",
        };
        f.write_str(s)
    }
}

// Errors produced while parsing a path string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("invalid range")]
    BadRange,

    #[error("invalid range; invalid start value {value:?}")]
    BadRangeStart { value: String },

    #[error("invalid range; invalid end value {value:?}")]
    BadRangeEnd { value: String },

    #[error("invalid index")]
    BadIndex,

    #[error("unmatched open bracket '['")]
    UnmatchedOpenBracket,

    #[error("unmatched closing bracket ']'")]
    UnmatchedCloseBracket,

    // A backslash was the last character of the input
    #[error("invalid escape")]
    InvalidEscape,

    // A key segment followed something other than `.`
    #[error("missing separator")]
    MissingSep,
}

impl PathError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PathError::BadRange | PathError::BadRangeStart { .. } | PathError::BadRangeEnd { .. } => {
                ErrorKind::InvalidRange
            }
            PathError::BadIndex => ErrorKind::InvalidIndex,
            PathError::UnmatchedOpenBracket
            | PathError::UnmatchedCloseBracket
            | PathError::InvalidEscape
            | PathError::MissingSep => ErrorKind::InvalidPath,
        }
    }
}

// Errors produced while coercing untyped values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    #[error("{}", invalid_type_message(.expected, .actual))]
    InvalidType {
        expected: Vec<&'static str>,
        actual: &'static str,
    },

    #[error("{}", enum_mismatch_message(.value, .allowed))]
    EnumMismatch { value: String, allowed: Vec<String> },

    #[error("missing required value {key:?}")]
    MissingRequiredValue { key: String },
}

impl ValueError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValueError::InvalidType { .. } => ErrorKind::InvalidType,
            ValueError::EnumMismatch { .. } => ErrorKind::InvalidValue,
            ValueError::MissingRequiredValue { .. } => ErrorKind::MissingRequiredValue,
        }
    }
}

fn invalid_type_message(expected: &[&'static str], actual: &str) -> String {
    match expected {
        [] => format!("invalid type {actual}"),
        [only] => format!("invalid type {actual}; expected {only}"),
        [a, b] => format!("invalid type {actual}; expected {a} or {b}"),
        [head @ .., last] => format!(
            "invalid type {actual}; expected {}, or {last}",
            head.iter().join(", ")
        ),
    }
}

fn enum_mismatch_message(value: &str, allowed: &[String]) -> String {
    match allowed {
        [] => format!("invalid value {value:?}"),
        [only] => format!("invalid value {value:?}; expected {only:?}"),
        [a, b] => format!("invalid value {value:?}; expected {a:?} or {b:?}"),
        [head @ .., last] => format!(
            "invalid value {value:?}; expected one of {}, or {last:?}",
            head.iter().map(|v| format!("{v:?}")).join(", ")
        ),
    }
}

/// Any error a [`Context`](crate::context::Context) can record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Path(#[from] PathError),

    #[error(transparent)]
    Value(#[from] ValueError),

    // Caller-supplied errors that are only ever displayed
    #[error("{0}")]
    Message(String),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Path(e) => e.kind(),
            Error::Value(e) => e.kind(),
            Error::Message(_) => ErrorKind::Other,
        }
    }
}

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Error::Message(msg.to_string())
    }
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Error::Message(msg)
    }
}

// Type alias for results that use `Error` as the error type
pub type Result<T> = std::result::Result<T, Error>;
