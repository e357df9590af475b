//! Line and column lookup for diagnostic positions.
//!
//! XLA positions count characters, not bytes, so every offset handled here
//! is a character offset. Lines and columns are 1-based.

/// Pre-computed line start table for repeated lookups on one source.
///
/// # Example
///
/// ```
/// use xla_diagnostic::span_utils::LineOffsetTable;
///
/// let source = "(a)\n(λ b)";
/// let table = LineOffsetTable::build(source);
///
/// assert_eq!(table.offset_to_line_col(0), (1, 1));
/// assert_eq!(table.offset_to_line_col(7), (2, 4)); // 'b'
/// ```
#[derive(Clone, Debug, Default)]
pub struct LineOffsetTable {
    /// Character offset of each line start; `offsets[0] == 0`.
    offsets: Vec<u32>,
    /// Total number of characters in the source.
    len: u32,
}

impl LineOffsetTable {
    /// Build the table in one pass over `source`.
    pub fn build(source: &str) -> Self {
        let mut offsets = vec![0u32];
        let mut len = 0u32;
        for c in source.chars() {
            len = len.saturating_add(1);
            if c == '\n' {
                offsets.push(len);
            }
        }
        LineOffsetTable { offsets, len }
    }

    /// 1-based line containing the character at `offset`.
    ///
    /// Offsets past the end map to the last line.
    #[inline]
    pub fn line_from_offset(&self, offset: u32) -> u32 {
        let line_idx = match self.offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        u32::try_from(line_idx).unwrap_or(u32::MAX - 1) + 1
    }

    /// 1-based (line, column) of the character at `offset`.
    pub fn offset_to_line_col(&self, offset: u32) -> (u32, u32) {
        let offset = offset.min(self.len);
        let line = self.line_from_offset(offset);
        let start = self.line_start_offset(line).unwrap_or(0);
        (line, offset - start + 1)
    }

    /// Character offset where a 1-based line starts.
    pub fn line_start_offset(&self, line: u32) -> Option<u32> {
        if line == 0 {
            return None;
        }
        self.offsets.get((line - 1) as usize).copied()
    }

    pub fn line_count(&self) -> usize {
        self.offsets.len()
    }

    /// Text of a 1-based line without its line terminator.
    pub fn line_text<'s>(&self, source: &'s str, line: u32) -> Option<&'s str> {
        if line == 0 {
            return None;
        }
        source
            .split('\n')
            .nth((line - 1) as usize)
            .map(|text| text.strip_suffix('\r').unwrap_or(text))
    }
}

/// 1-based (line, column) of a character offset.
///
/// For repeated lookups, use [`LineOffsetTable`] instead.
pub fn offset_to_line_col(source: &str, offset: u32) -> (u32, u32) {
    let mut line = 1u32;
    let mut col = 1u32;
    for c in source.chars().take(offset as usize) {
        if c == '\n' {
            line += 1;
            col = 1;
        } else {
            col += 1;
        }
    }
    (line, col)
}
