//! Fail-fast tests: any unsupported node kind anywhere in the tree aborts
//! printing with `UnsupportedNodeKind` naming that kind.

use jsprint_ast::{Node, from_json_value};
use jsprint_emitter::{PrintJsonError, UnparseError, print, print_json};
use serde_json::{Value, json};

fn ident(name: &str) -> Value {
    json!({ "type": "Identifier", "name": name })
}

fn print_tree(tree: Value) -> Result<String, UnparseError> {
    let root = from_json_value(tree).expect("fixture should be valid JSON");
    print(&root)
}

#[test]
fn test_unmodeled_kind_fails() {
    let err = print_tree(json!({
        "type": "Program",
        "body": [{
            "type": "ClassDeclaration",
            "id": ident("A"),
            "body": { "type": "ClassBody", "body": [] }
        }]
    }))
    .unwrap_err();
    assert_eq!(err.kind(), "ClassDeclaration");
}

#[test]
fn test_method_definition_fails() {
    let err = print(&Node::unmodeled("MethodDefinition")).unwrap_err();
    assert_eq!(
        err,
        UnparseError::UnsupportedNodeKind {
            kind: "MethodDefinition".to_string()
        }
    );
    assert_eq!(err.to_string(), "unsupported node kind: MethodDefinition");
}

#[test]
fn test_explicitly_excluded_kinds_fail() {
    for kind in [
        "MethodDefinition",
        "ExportDeclaration",
        "ImportDeclaration",
        "ObjectExpression",
        "ObjectPattern",
        "ArrayExpression",
        "ArrayPattern",
        "ForOfStatement",
    ] {
        let err = print_tree(json!({ "type": kind })).unwrap_err();
        assert_eq!(err.kind(), kind);
    }
}

#[test]
fn test_deeply_nested_unsupported_kind_fails_whole_render() {
    // function f() { if (a) { x = []; } }
    let array = json!({ "type": "ArrayExpression", "elements": [] });
    let tree = json!({
        "type": "Program",
        "body": [{
            "type": "FunctionDeclaration",
            "id": ident("f"),
            "params": [],
            "body": {
                "type": "BlockStatement",
                "body": [{
                    "type": "IfStatement",
                    "test": ident("a"),
                    "consequent": {
                        "type": "BlockStatement",
                        "body": [{
                            "type": "ExpressionStatement",
                            "expression": {
                                "type": "AssignmentExpression",
                                "operator": "=",
                                "left": ident("x"),
                                "right": array
                            }
                        }]
                    },
                    "alternate": null
                }]
            }
        }]
    });
    let err = print_tree(tree).unwrap_err();
    assert_eq!(err.kind(), "ArrayExpression");
}

#[test]
fn test_object_literal_in_declaration_fails() {
    let err = print_tree(json!({
        "type": "VariableDeclaration",
        "kind": "var",
        "declarations": [{
            "type": "VariableDeclarator",
            "id": { "type": "ObjectPattern", "properties": [] },
            "init": { "type": "ObjectExpression", "properties": [] }
        }]
    }))
    .unwrap_err();
    // The first unsupported child in source order is reported.
    assert_eq!(err.kind(), "ObjectPattern");
}

#[test]
fn test_accessor_and_method_properties_fail() {
    for (kind, method) in [("get", false), ("set", false), ("init", true)] {
        let err = print_tree(json!({
            "type": "Property",
            "kind": kind,
            "method": method,
            "key": ident("k"),
            "value": ident("v")
        }))
        .unwrap_err();
        assert_eq!(err.kind(), "Property", "kind={kind} method={method}");
    }
}

#[test]
fn test_plain_property_prints() {
    let printed = print_tree(json!({
        "type": "Property",
        "kind": "init",
        "method": false,
        "shorthand": false,
        "computed": false,
        "key": ident("k"),
        "value": ident("v")
    }))
    .unwrap();
    assert_eq!(printed, "k: v");
}

#[test]
fn test_if_with_else_fails() {
    let err = print_tree(json!({
        "type": "IfStatement",
        "test": ident("a"),
        "consequent": { "type": "BlockStatement", "body": [] },
        "alternate": { "type": "BlockStatement", "body": [] }
    }))
    .unwrap_err();
    assert_eq!(err.kind(), "IfStatement");
}

#[test]
fn test_print_json_separates_json_and_unparse_errors() {
    let err = print_json("{ not json").unwrap_err();
    assert!(matches!(err, PrintJsonError::Json(_)), "{err:?}");

    let err = print_json(r#"{ "type": "ImportDeclaration", "specifiers": [] }"#).unwrap_err();
    match err {
        PrintJsonError::Unparse(err) => assert_eq!(err.kind(), "ImportDeclaration"),
        other => panic!("expected unparse error, got {other:?}"),
    }
}
