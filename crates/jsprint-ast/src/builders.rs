// =========================================================================
// Builder helpers for tree construction
// =========================================================================

use crate::node::{LiteralValue, Node, VariableKind};

impl Node {
    /// Create an identifier node
    pub fn id(name: impl Into<String>) -> Self {
        Self::Identifier { name: name.into() }
    }

    /// Create a string literal
    pub fn string(value: impl Into<String>) -> Self {
        Self::Literal {
            value: LiteralValue::String(value.into()),
            regex: None,
        }
    }

    /// Create a numeric literal
    pub const fn number(value: f64) -> Self {
        Self::Literal {
            value: LiteralValue::Number(value),
            regex: None,
        }
    }

    /// Create a boolean literal
    pub const fn boolean(value: bool) -> Self {
        Self::Literal {
            value: LiteralValue::Boolean(value),
            regex: None,
        }
    }

    /// Create `null`
    pub const fn null() -> Self {
        Self::Literal {
            value: LiteralValue::Null,
            regex: None,
        }
    }

    /// Create `this`
    pub const fn this() -> Self {
        Self::ThisExpression {}
    }

    /// Create a binary expression: `left op right`
    pub fn binary(left: Self, operator: impl Into<String>, right: Self) -> Self {
        Self::BinaryExpression {
            operator: operator.into(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Create a logical expression: `left && right`, `left || right`
    pub fn logical(left: Self, operator: impl Into<String>, right: Self) -> Self {
        Self::LogicalExpression {
            operator: operator.into(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Create a plain assignment: `target = value`
    pub fn assign(target: Self, value: Self) -> Self {
        Self::AssignmentExpression {
            operator: "=".to_string(),
            left: Box::new(target),
            right: Box::new(value),
        }
    }

    /// Create a property access: `object.property`
    pub fn member(object: Self, property: impl Into<String>) -> Self {
        Self::MemberExpression {
            object: Box::new(object),
            property: Box::new(Self::id(property)),
            computed: false,
        }
    }

    /// Create an element access: `object[index]`
    pub fn computed_member(object: Self, index: Self) -> Self {
        Self::MemberExpression {
            object: Box::new(object),
            property: Box::new(index),
            computed: true,
        }
    }

    /// Create a call expression: `callee(args)`
    pub fn call(callee: Self, arguments: Vec<Self>) -> Self {
        Self::CallExpression {
            callee: Box::new(callee),
            arguments,
        }
    }

    /// Create a new expression: `new Callee(args)`
    pub fn new_expr(callee: Self, arguments: Vec<Self>) -> Self {
        Self::NewExpression {
            callee: Box::new(callee),
            arguments: Some(arguments),
        }
    }

    /// Create an expression statement
    pub fn expr_stmt(expression: Self) -> Self {
        Self::ExpressionStatement {
            expression: Box::new(expression),
        }
    }

    /// Create a block
    pub const fn block(body: Vec<Self>) -> Self {
        Self::BlockStatement { body }
    }

    /// Create a return statement
    pub fn ret(argument: Option<Self>) -> Self {
        Self::ReturnStatement {
            argument: argument.map(Box::new),
        }
    }

    /// Create a variable declarator: `id = init`
    pub fn declarator(name: impl Into<String>, init: Option<Self>) -> Self {
        Self::VariableDeclarator {
            id: Box::new(Self::id(name)),
            init: init.map(Box::new),
        }
    }

    /// Create a variable declaration from declarators
    pub const fn var_decl(kind: VariableKind, declarations: Vec<Self>) -> Self {
        Self::VariableDeclaration { kind, declarations }
    }

    /// Create a program
    pub const fn program(body: Vec<Self>) -> Self {
        Self::Program { body }
    }

    /// Create a placeholder for a kind the model does not carry
    pub fn unmodeled(kind: impl Into<String>) -> Self {
        Self::Unmodeled { kind: kind.into() }
    }
}
