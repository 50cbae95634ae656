//! Parsing of `require` directives from text file content.
//!
//! A directive occupies a single line. After trimming surrounding
//! whitespace, the line must begin with the literal keyword `require`
//! followed by whitespace, and the remainder (trimmed) must be a
//! double-quoted string. There is no escape processing: the reference is
//! the text between the first and last quote characters. Lines that do
//! not match this shape are not directives and are silently skipped —
//! malformed directives are never an error.

/// Parse a single line as a `require` directive.
///
/// Returns the quoted reference if the line is a well-formed directive,
/// `None` otherwise.
pub fn parse_directive(line: &str) -> Option<&str> {
    let rest = line.trim().strip_prefix("require")?;
    // The keyword must be followed by whitespace: `require"a"` and
    // `requires "a"` are both non-directives.
    if !rest.starts_with(|c: char| c.is_whitespace()) {
        return None;
    }
    let quoted = rest.trim();
    quoted.strip_prefix('"')?.strip_suffix('"')
}

/// Extract all `require` references from file content, lazily and in
/// declaration order.
///
/// Duplicate references are preserved here; deduplication happens later,
/// at edge-insertion time in the graph.
pub fn references(content: &str) -> impl Iterator<Item = &str> {
    content.lines().filter_map(parse_directive)
}
