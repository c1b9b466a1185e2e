//! Error bookkeeping for a single walk over untyped data.

pub mod handlers;

pub use handlers::{ErrorCollector, ErrorDiscarder, ErrorHandler, ErrorPrinter, LogHandler, MultiHandler};

use crate::errors::Error;
use crate::path::{Element, Path};

/// Pairs the current [`Path`] with an [`ErrorHandler`] and counts errors.
///
/// Reporting never fails and never aborts the walk: a caller records the
/// problem and moves on to the next value. A context is not meant to be
/// shared across threads; build one per walk instead.
pub struct Context<'h> {
    path: Path,
    handler: Option<Box<dyn ErrorHandler + 'h>>,
    error_count: usize,
    last_error: Option<Error>,
}

impl<'h> Context<'h> {
    /// Builds a context over a fresh dot-notation path.
    ///
    /// With no handlers errors are only counted; with several they are wrapped
    /// in a [`MultiHandler`] that keeps the given order.
    pub fn new(mut handlers: Vec<Box<dyn ErrorHandler + 'h>>) -> Self {
        let handler: Option<Box<dyn ErrorHandler + 'h>> = match handlers.len() {
            0 => None,
            1 => handlers.pop(),
            _ => Some(Box::new(MultiHandler::new(handlers))),
        };
        Self {
            path: Path::default(),
            handler,
            error_count: 0,
            last_error: None,
        }
    }

    pub fn with_handler(handler: impl ErrorHandler + 'h) -> Self {
        Self::new(vec![Box::new(handler)])
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn path_mut(&mut self) -> &mut Path {
        &mut self.path
    }

    pub fn has_handler(&self) -> bool {
        self.handler.is_some()
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn last_error(&self) -> Option<&Error> {
        self.last_error.as_ref()
    }

    /// Clears the count and last error; the path and handler are kept.
    pub fn reset(&mut self) {
        self.error_count = 0;
        self.last_error = None;
    }

    /// Records an error at the current path.
    pub fn error(&mut self, err: impl Into<Error>) {
        self.record(err.into(), None);
    }

    /// Records an error at the current path extended by `elem`.
    ///
    /// The handler sees the extended path; the context's path is unchanged
    /// once this returns.
    pub fn error_with(&mut self, err: impl Into<Error>, elem: impl Into<Element>) {
        self.record(err.into(), Some(elem.into()));
    }

    pub fn error_with_key(&mut self, err: impl Into<Error>, key: impl Into<String>) {
        self.error_with(err, Element::Key(key.into()));
    }

    pub fn error_with_index(&mut self, err: impl Into<Error>, idx: i64) {
        self.error_with(err, Element::Index(idx));
    }

    /// Unwraps `result`, recording the error if there is one.
    ///
    /// `Ok` is a no-op: nothing is counted and the path is never touched.
    pub fn check<T, E: Into<Error>>(&mut self, result: Result<T, E>) -> Option<T> {
        match result {
            Ok(v) => Some(v),
            Err(e) => {
                self.error(e);
                None
            }
        }
    }

    pub fn check_with<T, E: Into<Error>>(
        &mut self,
        result: Result<T, E>,
        elem: impl Into<Element>,
    ) -> Option<T> {
        match result {
            Ok(v) => Some(v),
            Err(e) => {
                self.error_with(e, elem);
                None
            }
        }
    }

    pub fn check_with_key<T, E: Into<Error>>(
        &mut self,
        result: Result<T, E>,
        key: impl Into<String>,
    ) -> Option<T> {
        match result {
            Ok(v) => Some(v),
            Err(e) => {
                self.error_with_key(e, key);
                None
            }
        }
    }

    pub fn check_with_index<T, E: Into<Error>>(&mut self, result: Result<T, E>, idx: i64) -> Option<T> {
        match result {
            Ok(v) => Some(v),
            Err(e) => {
                self.error_with_index(e, idx);
                None
            }
        }
    }

    /// Runs `f` with `elem` pushed onto the path, then truncates the path
    /// back to the length it had on entry.
    ///
    /// Anything `f` pushes is dropped. Elements that `f` pops from below the
    /// entry depth are not rebuilt.
    pub fn descend<R>(&mut self, elem: impl Into<Element>, f: impl FnOnce(&mut Self) -> R) -> R {
        let depth = self.path.len();
        self.path.add(elem);
        let out = f(self);
        self.path.truncate(depth);
        out
    }

    fn record(&mut self, err: Error, elem: Option<Element>) {
        self.error_count += 1;
        match elem {
            Some(elem) => {
                let path = self.path.scoped(elem);
                dispatch(&mut self.handler, &path, &err, self.error_count);
            }
            None => dispatch(&mut self.handler, &self.path, &err, self.error_count),
        }
        self.last_error = Some(err);
    }
}

impl Default for Context<'_> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

fn dispatch(handler: &mut Option<Box<dyn ErrorHandler + '_>>, path: &Path, err: &Error, count: usize) {
    tracing::debug!(path = %path, error = %err, count, "recorded error");
    if let Some(h) = handler.as_mut() {
        h.add(path, err);
    }
}
