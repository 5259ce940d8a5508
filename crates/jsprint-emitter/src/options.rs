//! Printer configuration.

use serde::{Deserialize, Serialize};

use crate::indent::INDENT_UNIT;

/// Continuation indent for declarator lists that span several lines.
pub const CONTINUATION_INDENT: &str = "    ";

/// Whitespace settings for the printer.
///
/// The defaults reproduce conventional source layout: two-space nesting and a
/// four-space continuation for wrapped `var` declarator lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct PrintOptions {
    /// Prefix added per nesting level (blocks, switch cases).
    pub indent_unit: String,
    /// Prefix for continuation lines of a multi-line declarator list.
    pub continuation_indent: String,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            indent_unit: INDENT_UNIT.to_string(),
            continuation_indent: CONTINUATION_INDENT.to_string(),
        }
    }
}

impl PrintOptions {
    /// Use `width` spaces per nesting level.
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_unit = " ".repeat(width);
        self
    }
}
