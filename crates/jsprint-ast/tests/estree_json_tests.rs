//! Integration tests for reading acorn-shaped ESTree JSON

use jsprint_ast::{LiteralValue, Node, PropertyKind, VariableKind, from_json_str, from_json_value};
use serde_json::json;

#[test]
fn test_reads_variable_declaration_with_positions() {
    let tree = from_json_value(json!({
        "type": "Program",
        "start": 0,
        "end": 10,
        "sourceType": "script",
        "body": [{
            "type": "VariableDeclaration",
            "start": 0,
            "end": 10,
            "kind": "var",
            "declarations": [{
                "type": "VariableDeclarator",
                "id": { "type": "Identifier", "name": "a" },
                "init": { "type": "Literal", "value": 1, "raw": "1" }
            }]
        }]
    }))
    .expect("valid ESTree");

    let expected = Node::program(vec![Node::var_decl(
        VariableKind::Var,
        vec![Node::declarator("a", Some(Node::number(1.0)))],
    )]);
    assert_eq!(tree, expected);
}

#[test]
fn test_unknown_kind_becomes_unmodeled() {
    let tree = from_json_value(json!({
        "type": "Program",
        "body": [{
            "type": "ClassDeclaration",
            "id": { "type": "Identifier", "name": "A" },
            "body": { "type": "ClassBody", "body": [] }
        }]
    }))
    .expect("unknown kinds are not a JSON error");

    let Node::Program { body } = tree else {
        panic!("expected program");
    };
    assert_eq!(body[0], Node::unmodeled("ClassDeclaration"));
}

#[test]
fn test_method_definition_is_unmodeled() {
    let node = from_json_value(json!({
        "type": "MethodDefinition",
        "kind": "method",
        "static": false,
        "key": { "type": "Identifier", "name": "m" }
    }))
    .expect("valid JSON");
    assert_eq!(node.kind(), "MethodDefinition");
    assert!(matches!(node, Node::Unmodeled { .. }));
}

#[test]
fn test_missing_type_is_an_error() {
    let err = from_json_str(r#"{ "name": "a" }"#).unwrap_err();
    assert!(err.to_string().contains("type"), "{err}");
}

#[test]
fn test_non_string_type_is_an_error() {
    let err = from_json_str(r#"{ "type": 3 }"#).unwrap_err();
    assert!(err.to_string().contains("must be a string"), "{err}");
}

#[test]
fn test_malformed_modeled_kind_is_an_error() {
    // Identifier without a name
    assert!(from_json_str(r#"{ "type": "Identifier" }"#).is_err());
}

#[test]
fn test_literal_values() {
    let cases = [
        (json!(null), LiteralValue::Null),
        (json!(true), LiteralValue::Boolean(true)),
        (json!(2.5), LiteralValue::Number(2.5)),
        (json!("bah"), LiteralValue::String("bah".to_string())),
    ];
    for (value, expected) in cases {
        let node = from_json_value(json!({ "type": "Literal", "value": value })).unwrap();
        let Node::Literal { value, regex } = node else {
            panic!("expected literal");
        };
        assert_eq!(value, expected);
        assert!(regex.is_none());
    }
}

#[test]
fn test_regex_literal() {
    let node = from_json_value(json!({
        "type": "Literal",
        "value": {},
        "raw": "/ab+c/gi",
        "regex": { "pattern": "ab+c", "flags": "gi" }
    }))
    .unwrap();
    let Node::Literal { value, regex } = node else {
        panic!("expected literal");
    };
    assert_eq!(value, LiteralValue::Null);
    let regex = regex.expect("regex payload");
    assert_eq!(regex.pattern, "ab+c");
    assert_eq!(regex.flags, "gi");
}

#[test]
fn test_defaults_for_optional_flags() {
    let node = from_json_value(json!({
        "type": "FunctionDeclaration",
        "id": { "type": "Identifier", "name": "f" },
        "params": [],
        "body": { "type": "BlockStatement", "body": [] }
    }))
    .unwrap();
    let Node::FunctionDeclaration {
        generator,
        is_async,
        ..
    } = node
    else {
        panic!("expected function declaration");
    };
    assert!(!generator);
    assert!(!is_async);
}

#[test]
fn test_async_flag_is_read() {
    let node = from_json_value(json!({
        "type": "ArrowFunctionExpression",
        "async": true,
        "params": [],
        "body": { "type": "Identifier", "name": "x" }
    }))
    .unwrap();
    assert!(matches!(
        node,
        Node::ArrowFunctionExpression { is_async: true, .. }
    ));
}

#[test]
fn test_property_kinds() {
    let node = from_json_value(json!({
        "type": "Property",
        "kind": "get",
        "method": false,
        "key": { "type": "Identifier", "name": "x" },
        "value": { "type": "Identifier", "name": "y" }
    }))
    .unwrap();
    assert!(matches!(
        node,
        Node::Property {
            kind: PropertyKind::Get,
            ..
        }
    ));
}

#[test]
fn test_nested_unmodeled_child() {
    let node = from_json_value(json!({
        "type": "ExpressionStatement",
        "expression": { "type": "ObjectExpression", "properties": [] }
    }))
    .unwrap();
    let Node::ExpressionStatement { expression } = node else {
        panic!("expected expression statement");
    };
    assert_eq!(*expression, Node::unmodeled("ObjectExpression"));
}

#[test]
fn test_non_primitive_literal_without_regex_is_an_error() {
    for value in [json!({}), json!([1, 2])] {
        let err = from_json_value(json!({ "type": "Literal", "value": value })).unwrap_err();
        assert!(err.to_string().contains("literal value"), "{err}");
    }
}

#[test]
fn test_every_modeled_kind_decodes_to_its_variant() {
    for kind in Node::MODELED_KINDS {
        // Bare objects lack required fields; either way the kind is not unmodeled.
        if let Ok(node) = from_json_value(json!({ "type": kind })) {
            assert_eq!(node.kind(), *kind);
            assert!(!matches!(node, Node::Unmodeled { .. }), "{kind}");
        }
    }
    assert!(matches!(
        from_json_value(json!({ "type": "EmptyStatement" })).unwrap(),
        Node::EmptyStatement {}
    ));
}

#[test]
fn test_mistyped_fields_are_errors() {
    let err = from_json_value(json!({
        "type": "ArrowFunctionExpression",
        "async": "yes",
        "params": [],
        "body": { "type": "Identifier", "name": "x" }
    }))
    .unwrap_err();
    assert!(err.to_string().contains("async"), "{err}");

    let err = from_json_value(json!({ "type": "BlockStatement", "body": null })).unwrap_err();
    assert!(err.to_string().contains("body"), "{err}");

    let err = from_json_value(json!({ "type": "ExpressionStatement", "expression": 1 }))
        .unwrap_err();
    assert!(err.to_string().contains("node object"), "{err}");
}

#[test]
fn test_null_optional_children_are_absent() {
    let node = from_json_value(json!({
        "type": "ForStatement",
        "init": null,
        "test": null,
        "update": null,
        "body": { "type": "EmptyStatement" }
    }))
    .unwrap();
    assert!(matches!(
        node,
        Node::ForStatement {
            init: None,
            test: None,
            update: None,
            ..
        }
    ));
}

#[test]
fn test_deep_tree_from_json_text() {
    // `-(-(-(... x)))`, one JSON level per operator
    let depth = 2_000;
    let mut json = String::new();
    for _ in 0..depth {
        json.push_str(r#"{"type":"UnaryExpression","operator":"-","prefix":true,"argument":"#);
    }
    json.push_str(r#"{"type":"Identifier","name":"x"}"#);
    json.push_str(&"}".repeat(depth));

    let tree = from_json_str(&json).expect("depth is not a JSON error");
    let mut levels = 0;
    let mut node = &tree;
    while let Node::UnaryExpression { argument, .. } = node {
        levels += 1;
        node = &**argument;
    }
    assert_eq!(levels, depth);
    assert_eq!(*node, Node::id("x"));
}

#[test]
fn test_trailing_text_is_an_error() {
    assert!(from_json_str(r#"{ "type": "ThisExpression" } extra"#).is_err());
}
