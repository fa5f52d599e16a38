//! Source code representation and error rendering.

use std::{fmt, ops::Range};

/// A byte range into [`Source::content`].
pub type Span = Range<usize>;

/// Represents source code.
#[derive(Debug, Clone)]
pub struct Source<'a> {
    /// Display name used in diagnostics (usually the file path).
    pub name: String,
    /// Source code, with surrounding whitespace already stripped.
    pub content: &'a str,
}

impl<'a> Source<'a> {
    /// Create a new `Source` with the specified `content`.
    /// Surrounding whitespace is stripped; spans are relative to the stripped text.
    pub fn new(content: &'a str) -> Self {
        Self::with_name("<input>", content)
    }

    /// Create a new named `Source`.
    pub fn with_name(name: impl ToString, content: &'a str) -> Self {
        Self {
            name: name.to_string(),
            content: content.trim(),
        }
    }

    /// Returns the 1-based `(line, column)` of the byte `offset`.
    /// Offsets past the end of the content resolve to the position just after the last character.
    pub fn line_col(&self, offset: usize) -> (usize, usize) {
        let offset = offset.min(self.content.len());
        let before = &self.content[..floor_char_boundary(self.content, offset)];
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let column = before[line_start..].chars().count() + 1;
        (line, column)
    }

    /// Creates a [`Diagnostic`] for an error located at `span`.
    /// A `None` span points at the end of the input.
    pub fn diagnostic(&self, message: impl ToString, span: Option<Span>) -> Diagnostic {
        let offset = span.map_or(self.content.len(), |span| span.start);
        let (line, column) = self.line_col(offset);
        Diagnostic {
            message: message.to_string(),
            file: self.name.clone(),
            line,
            column,
        }
    }
}

impl<'a> From<&'a str> for Source<'a> {
    fn from(content: &'a str) -> Self {
        Source::new(content)
    }
}

fn floor_char_boundary(s: &str, mut offset: usize) -> usize {
    while !s.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

/// Represents a rendered syntax error (compile time error).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub message: String,
    pub file: String,
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "error: {message} at {file}:{line}:{column}",
            message = self.message,
            file = self.file,
            line = self.line,
            column = self.column
        )
    }
}

impl std::error::Error for Diagnostic {}
