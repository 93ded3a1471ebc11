//! Response bodies and protocol footers.

use std::fmt;
use std::io::{self, Write};

/// Lines a successful command prints before its footer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Response {
    lines: Vec<String>,
}

impl Response {
    /// A response with no output.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// A single-line response.
    #[must_use]
    pub fn line(line: impl Into<String>) -> Self {
        Self {
            lines: vec![line.into()],
        }
    }

    /// A multi-line response.
    #[must_use]
    pub fn lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn as_lines(&self) -> &[String] {
        &self.lines
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for line in &self.lines {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }
}

/// Terminating line of a command's output.
///
/// Clients read until a line starting with `=`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Footer {
    Success,
    Failure,
    /// A rejected `play`; carries `illegal move: <args> <reason>`.
    IllegalMove(String),
}

impl Footer {
    /// Write the footer followed by the blank separator line.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{self}")?;
        writeln!(out)
    }
}

impl fmt::Display for Footer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Footer::Success => f.write_str("= 1"),
            Footer::Failure => f.write_str("= -1"),
            Footer::IllegalMove(message) => write!(f, "= {message}"),
        }
    }
}
