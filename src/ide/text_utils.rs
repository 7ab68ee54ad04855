//! Cursor-position text utilities shared by the IDE features.

use crate::base::{Position, Span};

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Extract the `[A-Za-z0-9_]+` word at a 0-indexed line/column position.
///
/// The cursor may sit on any character of the word or just past its end,
/// matching editor word-range semantics.
pub fn word_at_position(text: &str, line: usize, column: usize) -> Option<(String, Span)> {
    let line_text = text.lines().nth(line)?;
    let bytes = line_text.as_bytes();
    if column > bytes.len() {
        return None;
    }

    let anchor = if column < bytes.len() && is_word_byte(bytes[column]) {
        column
    } else if column > 0 && is_word_byte(bytes[column - 1]) {
        column - 1
    } else {
        return None;
    };

    let mut start = anchor;
    while start > 0 && is_word_byte(bytes[start - 1]) {
        start -= 1;
    }
    let mut end = anchor + 1;
    while end < bytes.len() && is_word_byte(bytes[end]) {
        end += 1;
    }

    let word = line_text[start..end].to_string();
    let span = Span::new(Position::new(line, start), Position::new(line, end));
    Some((word, span))
}
