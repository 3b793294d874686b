//! Source cursor bookkeeping
//!
//! A [`Position`] is an `index`/`line`/`column` triple plus shared handles to
//! the filename and the full source text. The lexer owns one live cursor and
//! advances it in place; tokens and errors keep cloned snapshots, so later
//! advances never move a span that has already been captured.

use std::fmt;
use std::sync::Arc;

/// A point in the source text.
///
/// `line` and `column` are zero-based. Cloning is cheap: the filename and the
/// text are reference-counted and never duplicated.
#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    pub index: usize,
    pub line: usize,
    pub column: usize,
    filename: Arc<str>,
    text: Arc<str>,
}

impl Position {
    pub fn new(
        index: usize,
        line: usize,
        column: usize,
        filename: Arc<str>,
        text: Arc<str>,
    ) -> Self {
        Self {
            index,
            line,
            column,
            filename,
            text,
        }
    }

    /// Cursor at the first character of `text`.
    pub fn start(filename: Arc<str>, text: Arc<str>) -> Self {
        Self::new(0, 0, 0, filename, text)
    }

    /// Step past `current_char`.
    ///
    /// Index and column always move by one; consuming a newline moves to the
    /// next line and resets the column. No bounds checking happens here.
    pub fn advance(&mut self, current_char: Option<char>) -> &mut Self {
        self.index += 1;
        self.column += 1;

        if current_char == Some('\n') {
            self.line += 1;
            self.column = 0;
        }

        self
    }

    /// A copy of this position moved one character forward.
    pub fn advanced(&self) -> Self {
        let mut next = self.clone();
        next.advance(None);
        next
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// The complete source text this position points into.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "File {}, line {}", self.filename, self.line + 1)
    }
}
