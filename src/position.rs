use serde::{Deserialize, Serialize};

/// Line/column location in a text buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed, in bytes)
    pub column: usize,
}

/// Half-open byte range `[start, end)` into a text buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start {} past end {}", start, end);
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Borrow the text this span covers
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end]
    }
}

/// Convert a byte offset into a line/column position
///
/// Offsets at or past the end of `text` resolve to the position just
/// after the last byte.
pub fn byte_to_position(text: &str, byte_offset: usize) -> Position {
    let offset = byte_offset.min(text.len());
    let before = &text.as_bytes()[..offset];

    let line = before.iter().filter(|&&b| b == b'\n').count() + 1;
    let line_start = before
        .iter()
        .rposition(|&b| b == b'\n')
        .map(|i| i + 1)
        .unwrap_or(0);

    Position {
        line,
        column: offset - line_start + 1,
    }
}

/// Resolve both ends of a span
pub fn span_to_positions(text: &str, span: Span) -> (Position, Position) {
    (byte_to_position(text, span.start), byte_to_position(text, span.end))
}

/// Inclusive line range covered by a span, for human-readable reports
///
/// A span ending right after a newline does not count the following line.
pub fn span_lines(text: &str, span: Span) -> (usize, usize) {
    let start = byte_to_position(text, span.start).line;
    let last_byte = if span.is_empty() { span.end } else { span.end - 1 };
    let end = byte_to_position(text, last_byte).line;
    (start, end.max(start))
}
