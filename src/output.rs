use crate::ansi;
use std::io::{self, Write};

/// Console output for the shell. Everything the operator sees goes through here.
pub struct Output<W> {
    out: W,
    color: bool,
}

impl<W: Write> Output<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    #[inline]
    pub fn color(&self) -> bool {
        self.color
    }

    /// Regular content line
    pub fn line(&mut self, s: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.out, "{}", s.as_ref())
    }

    /// Confirmation of a successful operation
    pub fn system(&mut self, s: impl AsRef<str>) -> io::Result<()> {
        let painted = ansi::paint(self.color, ansi::FG_GREEN, s.as_ref());
        writeln!(self.out, "{painted}")
    }

    /// Section title, preceded by an empty line
    pub fn heading(&mut self, title: &str) -> io::Result<()> {
        let painted = ansi::paint(self.color, &format!("{}{}", ansi::BOLD, ansi::FG_CYAN), &format!("===== {title} ====="));
        writeln!(self.out, "\n{painted}")
    }

    /// Recoverable problem reported back to the operator
    pub fn error(&mut self, s: impl AsRef<str>) -> io::Result<()> {
        let painted = ansi::paint(self.color, ansi::FG_RED, s.as_ref());
        writeln!(self.out, "{painted}")
    }

    /// Question without a trailing newline; flushed so it shows before input is read
    pub fn prompt(&mut self, s: &str) -> io::Result<()> {
        write!(self.out, "{s}")?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
