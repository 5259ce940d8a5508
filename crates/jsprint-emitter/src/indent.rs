//! Indentation utility.

/// One nesting level.
pub const INDENT_UNIT: &str = "  ";

/// Prefix every line of `text`, including the first and any empty lines,
/// with one [`INDENT_UNIT`].
pub fn indent(text: &str) -> String {
    indent_with(text, INDENT_UNIT)
}

/// Prefix every line of `text` with `unit`. Lines stay joined by `\n`; no
/// trailing newline is added or removed.
pub fn indent_with(text: &str, unit: &str) -> String {
    let line_count = memchr::memchr_iter(b'\n', text.as_bytes()).count() + 1;
    let mut out = String::with_capacity(text.len() + unit.len() * line_count);
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(unit);
        out.push_str(line);
    }
    out
}
