//! Literal values.

use jsprint_ast::{LiteralValue, RegexLiteral};

pub(crate) fn emit_literal(value: &LiteralValue, regex: Option<&RegexLiteral>) -> String {
    if let Some(regex) = regex {
        return format!("/{}/{}", regex.pattern, regex.flags);
    }
    match value {
        LiteralValue::Null => "null".to_string(),
        LiteralValue::Boolean(value) => value.to_string(),
        LiteralValue::Number(value) => format_number(*value),
        LiteralValue::String(value) => quote_string(value),
    }
}

/// Format a number the way JavaScript's `String(n)` does.
pub(crate) fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        // -0 prints as 0
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        // Shortest round-trip digits, no exponent.
        return value.to_string();
    }

    // Exponent form; JavaScript spells out the sign of positive exponents.
    let formatted = format!("{value:e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => formatted,
    }
}

/// Single-quote `value`, escaping whatever would end or corrupt the literal.
pub(crate) fn quote_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(ch),
        }
    }
    out.push('\'');
    out
}
