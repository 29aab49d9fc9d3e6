/// Converts a 1-based line and byte column (as reported by `serde_json`) back into a
/// byte offset. Positions past the end of the source are clamped to its length, and
/// offsets inside a multi-byte character move back to its first byte.
///
/// `serde_json` reports column 0 when the error sits right after a newline, so
/// column 0 maps to the start of the line.
pub fn offset_of(source: &str, line: usize, column: usize) -> usize {
    let line_start = if line <= 1 {
        0
    } else {
        match source.match_indices('\n').nth(line - 2) {
            Some((i, _)) => i + 1,
            None => return source.len(),
        }
    };

    let mut offset = (line_start + column.saturating_sub(1)).min(source.len());
    while !source.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}
