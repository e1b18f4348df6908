//! Presentation of operation outcomes
//!
//! Every operation returns a value implementing [`Report`]. The text form is
//! the one or two confirmation lines; the serde form backs `-o json|yaml`.

use serde::Serialize;
use std::io;

/// An operation outcome that can be rendered for a human
pub trait Report: Serialize {
    /// Write the confirmation line(s), each terminated by a newline
    fn write_text(&self, out: &mut dyn io::Write) -> io::Result<()>;

    /// Convenience wrapper collecting [`Report::write_text`] into a `String`
    ///
    /// Errors from `write_text` are passed through.
    fn to_text(&self) -> io::Result<String> {
        let mut buf = Vec::new();
        self.write_text(&mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
