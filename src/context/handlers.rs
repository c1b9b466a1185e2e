use std::io::Write;

use crate::errors::Error;
use crate::path::Path;

/// A sink for errors reported through a [`Context`](super::Context).
///
/// The path is borrowed for the duration of the call only; handlers that keep
/// it must clone it.
pub trait ErrorHandler {
    fn add(&mut self, path: &Path, err: &Error);
}

// Lets a caller keep ownership of a handler (and inspect it afterwards).
impl<H: ErrorHandler + ?Sized> ErrorHandler for &mut H {
    fn add(&mut self, path: &Path, err: &Error) {
        (**self).add(path, err);
    }
}

impl<H: ErrorHandler + ?Sized> ErrorHandler for Box<H> {
    fn add(&mut self, path: &Path, err: &Error) {
        (**self).add(path, err);
    }
}

/// Drops every error.
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorDiscarder;

impl ErrorHandler for ErrorDiscarder {
    fn add(&mut self, _path: &Path, _err: &Error) {}
}

/// Writes `"<path>: <message>\n"` per error to a stream.
#[derive(Debug)]
pub struct ErrorPrinter<W: Write> {
    stream: W,
}

impl<W: Write> ErrorPrinter<W> {
    pub fn new(stream: W) -> Self {
        Self { stream }
    }

    pub fn get_ref(&self) -> &W {
        &self.stream
    }

    pub fn into_inner(self) -> W {
        self.stream
    }
}

impl<W: Write> ErrorHandler for ErrorPrinter<W> {
    fn add(&mut self, path: &Path, err: &Error) {
        if let Err(e) = writeln!(self.stream, "{path}: {err}") {
            tracing::warn!(error = %e, path = %path, "failed to write error report");
        }
    }
}

/// Forwards every error to each child handler, in order.
#[derive(Default)]
pub struct MultiHandler<'h> {
    handlers: Vec<Box<dyn ErrorHandler + 'h>>,
}

impl<'h> MultiHandler<'h> {
    pub fn new(handlers: Vec<Box<dyn ErrorHandler + 'h>>) -> Self {
        Self { handlers }
    }

    pub fn push(&mut self, handler: impl ErrorHandler + 'h) {
        self.handlers.push(Box::new(handler));
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl ErrorHandler for MultiHandler<'_> {
    fn add(&mut self, path: &Path, err: &Error) {
        for h in &mut self.handlers {
            h.add(path, err);
        }
    }
}

/// Keeps a snapshot of the path alongside each error.
#[derive(Debug, Clone, Default)]
pub struct ErrorCollector {
    records: Vec<(Path, Error)>,
}

impl ErrorCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[(Path, Error)] {
        &self.records
    }

    pub fn into_records(self) -> Vec<(Path, Error)> {
        self.records
    }

    /// Renders the records the way [`ErrorPrinter`] would.
    pub fn messages(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|(path, err)| format!("{path}: {err}"))
            .collect()
    }
}

impl ErrorHandler for ErrorCollector {
    fn add(&mut self, path: &Path, err: &Error) {
        self.records.push((path.clone(), err.clone()));
    }
}

/// Emits each error as a `tracing` warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogHandler;

impl ErrorHandler for LogHandler {
    fn add(&mut self, path: &Path, err: &Error) {
        tracing::warn!(path = %path, kind = %err.kind(), "{err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::Element;
    use pretty_assertions::assert_eq;
    use std::io;

    fn one() -> Path {
        let mut p = Path::default();
        p.add("one");
        p
    }

    #[test]
    fn printer_writes_one_line_per_error() {
        let mut ep = ErrorPrinter::new(Vec::new());
        let mut p = one();
        ep.add(&p, &Error::from("error one"));
        p.add("two");
        ep.add(&p, &Error::from("error two"));
        assert_eq!(
            String::from_utf8(ep.into_inner()).unwrap(),
            "one: error one\none.two: error two\n"
        );
    }

    #[test]
    fn multi_handler_fans_out() {
        let mut sb1 = Vec::new();
        let mut sb2 = Vec::new();
        {
            let mut h = MultiHandler::default();
            h.push(ErrorPrinter::new(&mut sb1));
            h.push(ErrorPrinter::new(&mut sb2));
            assert_eq!(h.len(), 2);

            let mut p = one();
            h.add(&p, &Error::from("error one"));
            p.add("two");
            h.add(&p, &Error::from("error two"));
        }
        let expected = "one: error one\none.two: error two\n";
        assert_eq!(String::from_utf8(sb1).unwrap(), expected);
        assert_eq!(String::from_utf8(sb2).unwrap(), expected);
    }

    #[test]
    fn collector_snapshots_path() {
        let mut c = ErrorCollector::new();
        let mut p = one();
        c.add(&p, &Error::from("bad"));
        p.add(3i64);
        c.add(&p, &Error::from("worse"));
        p.clear();

        assert_eq!(c.records()[0].0.elements(), &[Element::key("one")]);
        assert_eq!(c.messages(), vec!["one: bad".to_string(), "one[3]: worse".to_string()]);
    }

    #[test]
    fn discarder_and_borrowed_handlers() {
        let mut c = ErrorCollector::new();
        {
            let mut h: Box<dyn ErrorHandler + '_> = Box::new(&mut c);
            h.add(&one(), &Error::from("x"));
            ErrorDiscarder.add(&one(), &Error::from("y"));
        }
        assert_eq!(c.records().len(), 1);
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn printer_survives_write_failures() {
        let mut ep = ErrorPrinter::new(Broken);
        ep.add(&one(), &Error::from("lost"));
        LogHandler.add(&one(), &Error::from("logged"));
    }
}
