use crate::emitter::literals::{emit_literal, format_number, quote_string};
use jsprint_ast::{LiteralValue, RegexLiteral};

#[test]
fn test_format_integers() {
    assert_eq!(format_number(0.0), "0");
    assert_eq!(format_number(-0.0), "0");
    assert_eq!(format_number(1.0), "1");
    assert_eq!(format_number(-42.0), "-42");
    assert_eq!(format_number(1e20), "100000000000000000000");
}

#[test]
fn test_format_fractions() {
    assert_eq!(format_number(0.5), "0.5");
    assert_eq!(format_number(2.25), "2.25");
    assert_eq!(format_number(0.000001), "0.000001");
}

#[test]
fn test_format_exponents() {
    assert_eq!(format_number(1e21), "1e+21");
    assert_eq!(format_number(-2.5e30), "-2.5e+30");
    assert_eq!(format_number(1e-7), "1e-7");
    assert_eq!(format_number(1.5e-10), "1.5e-10");
}

#[test]
fn test_format_non_finite() {
    assert_eq!(format_number(f64::NAN), "NaN");
    assert_eq!(format_number(f64::INFINITY), "Infinity");
    assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
}

#[test]
fn test_quote_plain_string() {
    assert_eq!(quote_string("bah"), "'bah'");
    assert_eq!(quote_string(""), "''");
}

#[test]
fn test_quote_escapes() {
    assert_eq!(quote_string("it's"), r"'it\'s'");
    assert_eq!(quote_string(r"a\b"), r"'a\\b'");
    assert_eq!(quote_string("a\nb"), r"'a\nb'");
    assert_eq!(quote_string("a\u{2028}b"), r"'a\u2028b'");
    // Double quotes need no escape inside single quotes
    assert_eq!(quote_string("say \"hi\""), "'say \"hi\"'");
}

#[test]
fn test_emit_primitive_literals() {
    assert_eq!(emit_literal(&LiteralValue::Null, None), "null");
    assert_eq!(emit_literal(&LiteralValue::Boolean(true), None), "true");
    assert_eq!(emit_literal(&LiteralValue::Boolean(false), None), "false");
    assert_eq!(emit_literal(&LiteralValue::Number(10.0), None), "10");
    assert_eq!(
        emit_literal(&LiteralValue::String("x".to_string()), None),
        "'x'"
    );
}

#[test]
fn test_emit_regex_literal() {
    let regex = RegexLiteral {
        pattern: "a+b".to_string(),
        flags: "g".to_string(),
    };
    assert_eq!(emit_literal(&LiteralValue::Null, Some(&regex)), "/a+b/g");
}
