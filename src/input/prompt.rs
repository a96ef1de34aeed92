//! Line-based reading of operator input.
//!
//! The reader hands out one trimmed-of-newline line at a time and reports the
//! end of input as `Ok(None)`, so a closed stdin ends the shell instead of
//! spinning on empty reads.

use std::io::{self, BufRead};

#[derive(Debug)]
pub struct LineReader<R> {
    input: R,
    buf: String,
    lines_read: usize,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            buf: String::new(),
            lines_read: 0,
        }
    }

    /// Read the next line without its line terminator. `None` once the input is exhausted.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        self.buf.clear();
        if self.input.read_line(&mut self.buf)? == 0 {
            tracing::debug!(lines = self.lines_read, "end of input");
            return Ok(None);
        }
        self.lines_read += 1;

        let line = self.buf.trim_end_matches(['\r', '\n']);
        Ok(Some(line.to_string()))
    }

    pub fn lines_read(&self) -> usize {
        self.lines_read
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn strips_line_endings_and_reports_eof() {
        let mut r = LineReader::new(Cursor::new("1\r\nAlice Smith\n\nlast"));
        assert_eq!(r.read_line().unwrap().as_deref(), Some("1"));
        assert_eq!(r.read_line().unwrap().as_deref(), Some("Alice Smith"));
        assert_eq!(r.read_line().unwrap().as_deref(), Some(""));
        assert_eq!(r.read_line().unwrap().as_deref(), Some("last"));
        assert_eq!(r.read_line().unwrap(), None);
        assert_eq!(r.lines_read(), 4);
    }
}
