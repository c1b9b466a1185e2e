//! Typed extraction from loosely-typed JSON-like data, with path-tagged error
//! reporting.
//!
//! A walk over a `serde_json::Value` keeps a [`Context`]: keys and indices are
//! pushed onto its [`Path`] while descending, and every conversion failure is
//! recorded against the current location and forwarded to the configured
//! [`ErrorHandler`]s.
//!
//! ```
//! use json_map_unpack::{unpack, Context, ErrorPrinter};
//! use serde_json::json;
//!
//! let mut doc = match json!({"name": "svc", "ports": [80, "443"]}) {
//!     serde_json::Value::Object(m) => m,
//!     _ => unreachable!(),
//! };
//! let mut out = Vec::new();
//! {
//!     let mut ctx = Context::with_handler(ErrorPrinter::new(&mut out));
//!     let name: String = unpack::require(&mut ctx, &mut doc, "name");
//!     let ports: Vec<i64> = unpack::require_array_of(&mut ctx, &mut doc, "ports");
//!     assert_eq!(name, "svc");
//!     assert_eq!(ports, vec![80]);
//!     assert_eq!(ctx.error_count(), 1);
//! }
//! assert_eq!(String::from_utf8(out).unwrap(), "ports[1]: invalid type string; expected integer\n");
//! ```

pub mod access;
pub mod context;
pub mod errors;
pub mod path;
pub mod types;
pub mod unpack;

pub use context::{Context, ErrorCollector, ErrorDiscarder, ErrorHandler, ErrorPrinter, LogHandler, MultiHandler};
pub use errors::{Error, ErrorKind, PathError, Result, ValueError};
pub use path::{DotNotation, Element, ElementType, Path, PathStyle, Range, RangeTag};
pub use types::{Coerce, Null};
