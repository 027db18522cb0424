//! [Sink] is where printed sequences go: either a writer owned by the formatter (standard output
//! by default) or one borrowed from the caller for the formatter's lifetime.

use std::fmt;
use std::io;
use std::io::Write;
use std::ops::{Deref, DerefMut};

pub enum Sink<'w> {
    Owned(Box<dyn Write + 'w>),
    Borrowed(&'w mut (dyn Write + 'w)),
}

impl<'w> Sink<'w> {
    pub fn stdout() -> Self {
        Self::Owned(Box::new(io::stdout()))
    }

    /// A sink that takes ownership of `writer`.
    pub fn owned(writer: impl Write + 'w) -> Self {
        Self::Owned(Box::new(writer))
    }

    pub fn is_borrowed(&self) -> bool {
        matches!(self, Sink::Borrowed(_))
    }
}

impl Default for Sink<'_> {
    fn default() -> Self {
        Self::stdout()
    }
}

impl<'w> Deref for Sink<'w> {
    type Target = dyn Write + 'w;

    fn deref(&self) -> &Self::Target {
        match self {
            Sink::Owned(owned) => &**owned,
            Sink::Borrowed(borrowed) => &**borrowed,
        }
    }
}

impl<'w> DerefMut for Sink<'w> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        match self {
            Sink::Owned(owned) => &mut **owned,
            Sink::Borrowed(borrowed) => &mut **borrowed,
        }
    }
}

impl<'w, W: Write + 'w> From<&'w mut W> for Sink<'w> {
    fn from(writer: &'w mut W) -> Self {
        Self::Borrowed(writer)
    }
}

impl fmt::Debug for Sink<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sink::Owned(_) => f.write_str("Sink::Owned"),
            Sink::Borrowed(_) => f.write_str("Sink::Borrowed"),
        }
    }
}

/// Bridges a [fmt::Write] renderer onto an [io::Write] sink, retaining the first I/O error so
/// that it can be reported instead of the opaque [fmt::Error].
pub(crate) struct IoBridge<'a, W: Write + ?Sized> {
    inner: &'a mut W,
    pub(crate) error: Option<io::Error>,
}

impl<'a, W: Write + ?Sized> IoBridge<'a, W> {
    pub(crate) fn new(inner: &'a mut W) -> Self {
        Self { inner, error: None }
    }
}

impl<W: Write + ?Sized> fmt::Write for IoBridge<'_, W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.inner.write_all(s.as_bytes()).map_err(|err| {
            self.error.get_or_insert(err);
            fmt::Error
        })
    }
}

#[cfg(test)]
mod tests {
    use std::fmt::Write as _;

    use crate::testing::FailAfter;

    use super::*;

    #[test]
    fn borrowed_writes_through() {
        let mut buf: Vec<u8> = Vec::new();
        {
            let mut sink = Sink::from(&mut buf);
            assert!(sink.is_borrowed());
            sink.write_all(b"abc").unwrap();
        }
        assert_eq!(b"abc", &buf[..]);
    }

    #[test]
    fn owned_writes() {
        let mut sink = Sink::owned(Vec::<u8>::new());
        assert!(!sink.is_borrowed());
        sink.write_all(b"abc").unwrap();
    }

    #[test]
    fn default_is_stdout() {
        let sink = Sink::default();
        assert_eq!("Sink::Owned", format!("{sink:?}"));
    }

    #[test]
    fn bridge_retains_io_error() {
        let mut closed = FailAfter::new(0);
        let mut bridge = IoBridge::new(&mut closed);
        assert!(bridge.write_str("x").is_err());
        assert_eq!(io::ErrorKind::BrokenPipe, bridge.error.unwrap().kind());
    }

    #[test]
    fn bridge_passes_text_unchanged() {
        let mut buf: Vec<u8> = Vec::new();
        let mut bridge = IoBridge::new(&mut buf);
        bridge.write_str("naïve, ").unwrap();
        assert!(bridge.error.is_none());
        assert_eq!("naïve, ", String::from_utf8(buf).unwrap());
    }
}
