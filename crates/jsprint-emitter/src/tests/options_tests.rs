use crate::options::PrintOptions;

#[test]
fn test_default_options() {
    let options = PrintOptions::default();
    assert_eq!(options.indent_unit, "  ");
    assert_eq!(options.continuation_indent, "    ");
}

#[test]
fn test_with_indent_width() {
    let options = PrintOptions::default().with_indent_width(4);
    assert_eq!(options.indent_unit, "    ");
    assert_eq!(options.continuation_indent, "    ");
}

#[test]
fn test_options_from_json_fill_defaults() {
    let options: PrintOptions = serde_json::from_str(r#"{ "indentUnit": "\t" }"#).unwrap();
    assert_eq!(options.indent_unit, "\t");
    assert_eq!(options.continuation_indent, "    ");
}

#[test]
fn test_options_reject_unknown_fields() {
    let result = serde_json::from_str::<PrintOptions>(r#"{ "tabSize": 2 }"#);
    assert!(result.is_err());
}

#[test]
fn test_options_serialize_camel_case() {
    let json = serde_json::to_value(PrintOptions::default()).unwrap();
    assert_eq!(json["indentUnit"], "  ");
    assert_eq!(json["continuationIndent"], "    ");
}
