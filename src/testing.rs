//! Testing helpers.

use std::io;
use std::io::Write;

/// Converts captured sink bytes to text.
pub fn printed(buf: &[u8]) -> String {
    String::from_utf8(buf.to_vec()).expect("printed output is not UTF-8")
}

/// A sink that accepts `limit` bytes and then fails every write with [io::ErrorKind::BrokenPipe].
#[derive(Debug, Default)]
pub struct FailAfter {
    limit: usize,
    pub accepted: Vec<u8>,
}

impl FailAfter {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            accepted: vec![],
        }
    }
}

impl Write for FailAfter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let remaining = self.limit - self.accepted.len();
        if remaining == 0 {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"));
        }
        let len = usize::min(remaining, buf.len());
        self.accepted.extend_from_slice(&buf[..len]);
        Ok(len)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
