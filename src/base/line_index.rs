//! Byte offset to line/column conversion.
//!
//! The lexer hands out byte offsets; AST nodes and diagnostics carry
//! 0-indexed line/column [`Position`]s. A `LineIndex` is built once per
//! parse and answers the conversion in O(log n).

use text_size::TextSize;

use super::Position;

/// Precomputed start offsets of every line in a source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    /// Byte offset of the first character of each line. `line_starts[0] == 0`.
    line_starts: Vec<TextSize>,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![TextSize::new(0)];
        for (i, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(TextSize::new(i as u32 + 1));
            }
        }
        Self { line_starts }
    }

    /// Convert a byte offset into a 0-indexed line/column position.
    ///
    /// Offsets past the end of the text map to the end of the last line.
    pub fn position(&self, offset: TextSize) -> Position {
        let line = self
            .line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);
        let column = u32::from(offset - self.line_starts[line]) as usize;
        Position::new(line, column)
    }

    /// Number of lines in the indexed text.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line() {
        let index = LineIndex::new("hello");
        assert_eq!(index.position(TextSize::new(0)), Position::new(0, 0));
        assert_eq!(index.position(TextSize::new(3)), Position::new(0, 3));
    }

    #[test]
    fn test_multi_line() {
        let index = LineIndex::new("ab\ncd\nef");
        assert_eq!(index.position(TextSize::new(0)), Position::new(0, 0));
        assert_eq!(index.position(TextSize::new(2)), Position::new(0, 2));
        assert_eq!(index.position(TextSize::new(3)), Position::new(1, 0));
        assert_eq!(index.position(TextSize::new(4)), Position::new(1, 1));
        assert_eq!(index.position(TextSize::new(6)), Position::new(2, 0));
    }

    #[test]
    fn test_offset_at_newline_belongs_to_ending_line() {
        let index = LineIndex::new("ab\ncd");
        // The '\n' itself is column 2 of line 0.
        assert_eq!(index.position(TextSize::new(2)), Position::new(0, 2));
    }

    #[test]
    fn test_line_count() {
        assert_eq!(LineIndex::new("").line_count(), 1);
        assert_eq!(LineIndex::new("a\nb\nc").line_count(), 3);
    }
}
