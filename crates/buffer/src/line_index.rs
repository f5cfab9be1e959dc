// Chunk: docs/chunks/flat_buffer_engine - Line boundaries over a form field value

//! Line index for locating line boundaries in a form field's value.
//!
//! Offsets are UTF-16 code units, the unit the DOM uses for `selectionStart`
//! and `selectionEnd`. Only `\n` separates lines; browsers normalize a
//! textarea's value to bare newlines.

/// Tracks line boundaries in a flat text buffer.
///
/// The line index keeps the offsets where each line starts, which gives
/// O(log n) lookup of the line containing an offset.
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// Offsets where each line starts. line_starts[0] = 0 always.
    line_starts: Vec<u32>,
    /// Total length in UTF-16 code units.
    total_len: u32,
}

impl LineIndex {
    /// Creates a line index for an empty buffer (one empty line).
    pub fn new() -> Self {
        Self {
            line_starts: vec![0],
            total_len: 0,
        }
    }

    /// Builds the index for the given text.
    pub fn build(text: &str) -> Self {
        let mut line_starts = vec![0];
        let mut offset: u32 = 0;
        for ch in text.chars() {
            offset += ch.len_utf16() as u32;
            if ch == '\n' {
                line_starts.push(offset);
            }
        }
        Self {
            line_starts,
            total_len: offset,
        }
    }

    /// Returns the number of lines. Always at least one.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Total length in UTF-16 code units.
    pub fn len(&self) -> u32 {
        self.total_len
    }

    pub fn is_empty(&self) -> bool {
        self.total_len == 0
    }

    /// Returns the offset where the given line starts, or None if out of bounds.
    pub fn line_start(&self, line: usize) -> Option<u32> {
        self.line_starts.get(line).copied()
    }

    /// Returns the offset of the end of the given line.
    ///
    /// For all lines except the last, this points at the newline.
    /// For the last line, this equals the buffer length.
    pub fn line_end(&self, line: usize) -> Option<u32> {
        if line >= self.line_count() {
            return None;
        }

        if line + 1 < self.line_count() {
            Some(self.line_starts[line + 1] - 1)
        } else {
            Some(self.total_len)
        }
    }

    /// Returns the line containing `offset`.
    ///
    /// An offset just past a newline belongs to the following line; offsets
    /// beyond the buffer clamp to the last line.
    pub fn line_at_offset(&self, offset: u32) -> usize {
        match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(line) => line.saturating_sub(1),
        }
    }

    /// Start of the line containing `offset`: just past the nearest newline
    /// before it, or 0.
    pub fn start_of_line_at(&self, offset: u32) -> u32 {
        self.line_start(self.line_at_offset(offset)).unwrap_or(0)
    }

    /// End of the line containing `offset`: the nearest newline at or after
    /// it, or the buffer length.
    pub fn end_of_line_at(&self, offset: u32) -> u32 {
        let line = self.line_at_offset(offset);
        self.line_end(line).unwrap_or(self.total_len)
    }
}

impl Default for LineIndex {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let index = LineIndex::new();
        assert_eq!(index.line_count(), 1);
        assert_eq!(index.line_start(0), Some(0));
        assert!(index.is_empty());
    }

    #[test]
    fn test_build_empty() {
        let index = LineIndex::build("");
        assert_eq!(index.line_count(), 1);
        assert_eq!(index.start_of_line_at(0), 0);
        assert_eq!(index.end_of_line_at(0), 0);
    }

    #[test]
    fn test_build_multiple_lines() {
        let index = LineIndex::build("hello\nworld\n");
        assert_eq!(index.line_count(), 3);
        assert_eq!(index.line_start(0), Some(0));
        assert_eq!(index.line_start(1), Some(6)); // After "hello\n"
        assert_eq!(index.line_start(2), Some(12)); // After "world\n"
        assert_eq!(index.len(), 12);
    }

    #[test]
    fn test_line_end() {
        let index = LineIndex::build("hello\nworld");
        assert_eq!(index.line_end(0), Some(5)); // "hello" ends before \n
        assert_eq!(index.line_end(1), Some(11));
        assert_eq!(index.line_end(2), None);
    }

    #[test]
    fn test_line_at_offset() {
        let index = LineIndex::build("hello\nworld\nfoo");

        assert_eq!(index.line_at_offset(0), 0); // 'h'
        assert_eq!(index.line_at_offset(5), 0); // '\n'
        assert_eq!(index.line_at_offset(6), 1); // 'w'
        assert_eq!(index.line_at_offset(11), 1); // '\n'
        assert_eq!(index.line_at_offset(12), 2); // 'f'
        assert_eq!(index.line_at_offset(99), 2); // past the end
    }

    #[test]
    fn test_boundaries_at_offset() {
        let index = LineIndex::build("ab\ncd\nef");
        assert_eq!(index.start_of_line_at(1), 0);
        assert_eq!(index.end_of_line_at(1), 2);
        assert_eq!(index.start_of_line_at(3), 3);
        assert_eq!(index.end_of_line_at(3), 5);
        assert_eq!(index.start_of_line_at(5), 3);
        assert_eq!(index.end_of_line_at(8), 8);
    }

    #[test]
    fn test_leading_newline() {
        // Caret at 0 sits on the empty first line, not after the newline
        let index = LineIndex::build("\nabc");
        assert_eq!(index.start_of_line_at(0), 0);
        assert_eq!(index.end_of_line_at(0), 0);
        assert_eq!(index.start_of_line_at(1), 1);
    }

    #[test]
    fn test_offsets_are_utf16_units() {
        // '😀' is two UTF-16 code units
        let index = LineIndex::build("😀a\nb");
        assert_eq!(index.line_end(0), Some(3));
        assert_eq!(index.line_start(1), Some(4));
        assert_eq!(index.len(), 5);
    }
}
