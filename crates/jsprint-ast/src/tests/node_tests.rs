use crate::node::{Node, VariableKind};

#[test]
fn test_kind_of_builders() {
    assert_eq!(Node::id("a").kind(), "Identifier");
    assert_eq!(Node::number(1.0).kind(), "Literal");
    assert_eq!(Node::this().kind(), "ThisExpression");
    assert_eq!(Node::block(vec![]).kind(), "BlockStatement");
    assert_eq!(
        Node::var_decl(VariableKind::Let, vec![]).kind(),
        "VariableDeclaration"
    );
}

#[test]
fn test_unmodeled_kind_is_preserved() {
    let node = Node::unmodeled("MethodDefinition");
    assert_eq!(node.kind(), "MethodDefinition");
    assert!(node.children().is_empty());
}

#[test]
fn test_every_modeled_kind_is_recognized() {
    for kind in Node::MODELED_KINDS {
        assert!(Node::is_modeled_kind(kind), "{kind} should be modeled");
    }
    for kind in [
        "MethodDefinition",
        "ImportDeclaration",
        "ExportDeclaration",
        "ObjectExpression",
        "ObjectPattern",
        "ArrayExpression",
        "ArrayPattern",
        "ForOfStatement",
    ] {
        assert!(!Node::is_modeled_kind(kind), "{kind} should not be modeled");
    }
}

#[test]
fn test_children_in_source_order() {
    let call = Node::call(Node::id("f"), vec![Node::id("a"), Node::id("b")]);
    let kinds: Vec<_> = call
        .children()
        .into_iter()
        .map(|child| match child {
            Node::Identifier { name } => name.as_str(),
            other => other.kind(),
        })
        .collect();
    assert_eq!(kinds, vec!["f", "a", "b"]);
}

#[test]
fn test_for_statement_children_skip_missing_parts() {
    let node = Node::ForStatement {
        init: None,
        test: Some(Box::new(Node::boolean(true))),
        update: None,
        body: Box::new(Node::block(vec![])),
    };
    let kinds: Vec<_> = node.children().into_iter().map(|child| child.kind()).collect();
    assert_eq!(kinds, vec!["Literal", "BlockStatement"]);
}

#[test]
fn test_variable_kind_keywords() {
    assert_eq!(VariableKind::Var.as_str(), "var");
    assert_eq!(VariableKind::Let.as_str(), "let");
    assert_eq!(VariableKind::Const.as_str(), "const");
}
