//! Markdown escaping for report output.
//!
//! Company names, sectors and narrative text come from users or remote
//! providers and must not break the surrounding document structure.

/// Escape text for use inside a Markdown table cell.
///
/// Pipes would end the cell and newlines would end the row.
#[must_use]
pub fn escape_markdown_table(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '|' => result.push_str("\\|"),
            '\n' => result.push(' '),
            '\r' => {}
            '`' => result.push_str("\\`"),
            '[' => result.push_str("\\["),
            ']' => result.push_str("\\]"),
            _ => result.push(c),
        }
    }
    result
}

/// Escape text for inline Markdown (headings, list items).
#[must_use]
pub fn escape_markdown_inline(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '*' | '_' | '`' | '[' | ']' | '#' | '!' | '~' | '|' | '<' | '>' => {
                result.push('\\');
                result.push(c);
            }
            '\n' => result.push(' '),
            '\r' => {}
            _ => result.push(c),
        }
    }
    result
}

/// Escape a multi-paragraph block, keeping paragraph breaks.
#[must_use]
pub fn escape_markdown_block(s: &str) -> String {
    s.split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(escape_markdown_inline)
        .collect::<Vec<_>>()
        .join("\n\n")
}
