//! Line tokenizer shared by the directive parser and face references.

/// Everything from this character to the end of the line is ignored.
pub const COMMENT_MARKER: char = '#';

/// Split `line` into non-empty tokens separated by `separator`.
///
/// Scanning stops at the first [`COMMENT_MARKER`], so trailing comments on
/// data lines are dropped too. Runs of separators collapse into one split
/// point and tokens are returned verbatim, in order.
pub fn tokenize(line: &str, separator: char) -> impl Iterator<Item = &str> {
    let content = match line.find(COMMENT_MARKER) {
        Some(end) => &line[..end],
        None => line,
    };
    content.split(separator).filter(|token| !token.is_empty())
}
