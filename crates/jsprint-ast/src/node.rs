//! ESTree node model.
//!
//! `Node` is a closed sum type over the ESTree kinds the unparser knows how to
//! carry. Every other kind lands in [`Node::Unmodeled`], which keeps only its
//! discriminant so the printer can report it.
//!
//! Field names follow ESTree (acorn/esprima output). JSON deserialization is
//! implemented in [`crate::json`].

use serde::Deserialize;
use smallvec::SmallVec;

/// Inline capacity for [`Node::children`]. Most nodes have at most four.
const CHILDREN_INLINE: usize = 4;

/// Direct children of a node, in source order.
pub type Children<'a> = SmallVec<[&'a Node; CHILDREN_INLINE]>;

/// A syntax tree node.
///
/// Deserialization from ESTree JSON lives in [`crate::json`]; it routes
/// unknown discriminants to `Unmodeled`.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    // =========================================================================
    // Program & statements
    // =========================================================================
    Program {
        body: Vec<Node>,
    },

    EmptyStatement {},

    ExpressionStatement {
        expression: Box<Node>,
    },

    BlockStatement {
        body: Vec<Node>,
    },

    ReturnStatement {
        argument: Option<Box<Node>>,
    },

    VariableDeclaration {
        kind: VariableKind,
        declarations: Vec<Node>,
    },

    VariableDeclarator {
        id: Box<Node>,
        init: Option<Box<Node>>,
    },

    WithStatement {
        object: Box<Node>,
        body: Box<Node>,
    },

    /// `alternate` is carried so the printer can reject it instead of
    /// silently dropping the else branch.
    IfStatement {
        test: Box<Node>,
        consequent: Box<Node>,
        alternate: Option<Box<Node>>,
    },

    ForStatement {
        init: Option<Box<Node>>,
        test: Option<Box<Node>>,
        update: Option<Box<Node>>,
        body: Box<Node>,
    },

    /// `each` marks the legacy SpiderMonkey `for each (... in ...)` form.
    ForInStatement {
        left: Box<Node>,
        right: Box<Node>,
        body: Box<Node>,
        each: bool,
    },

    WhileStatement {
        test: Box<Node>,
        body: Box<Node>,
    },

    DoWhileStatement {
        body: Box<Node>,
        test: Box<Node>,
    },

    BreakStatement {
        label: Option<Box<Node>>,
    },

    ContinueStatement {
        label: Option<Box<Node>>,
    },

    LabeledStatement {
        label: Box<Node>,
        body: Box<Node>,
    },

    TryStatement {
        block: Box<Node>,
        handler: Option<Box<Node>>,
        finalizer: Option<Box<Node>>,
    },

    /// `guard` is the SpiderMonkey `catch (e if cond)` extension.
    CatchClause {
        param: Option<Box<Node>>,
        guard: Option<Box<Node>>,
        body: Box<Node>,
    },

    ThrowStatement {
        argument: Box<Node>,
    },

    SwitchStatement {
        discriminant: Box<Node>,
        cases: Vec<Node>,
    },

    /// `test` is `None` for `default:`.
    SwitchCase {
        test: Option<Box<Node>>,
        consequent: Vec<Node>,
    },

    DebuggerStatement {},

    // =========================================================================
    // Functions
    // =========================================================================
    FunctionDeclaration {
        id: Option<Box<Node>>,
        params: Vec<Node>,
        body: Box<Node>,
        generator: bool,
        is_async: bool,
    },

    FunctionExpression {
        id: Option<Box<Node>>,
        params: Vec<Node>,
        body: Box<Node>,
        generator: bool,
        is_async: bool,
    },

    ArrowFunctionExpression {
        params: Vec<Node>,
        body: Box<Node>,
        is_async: bool,
    },

    YieldExpression {
        argument: Option<Box<Node>>,
        delegate: bool,
    },

    /// `all` is the draft `await*` form.
    AwaitExpression {
        argument: Option<Box<Node>>,
        all: bool,
    },

    // =========================================================================
    // Expressions
    // =========================================================================
    Identifier {
        name: String,
    },

    Literal {
        value: LiteralValue,
        regex: Option<RegexLiteral>,
    },

    ThisExpression {},

    BinaryExpression {
        operator: String,
        left: Box<Node>,
        right: Box<Node>,
    },

    LogicalExpression {
        operator: String,
        left: Box<Node>,
        right: Box<Node>,
    },

    AssignmentExpression {
        operator: String,
        left: Box<Node>,
        right: Box<Node>,
    },

    MemberExpression {
        object: Box<Node>,
        property: Box<Node>,
        computed: bool,
    },

    CallExpression {
        callee: Box<Node>,
        arguments: Vec<Node>,
    },

    /// `arguments` is `None` when the tree records `new A` without a list.
    NewExpression {
        callee: Box<Node>,
        arguments: Option<Vec<Node>>,
    },

    SequenceExpression {
        expressions: Vec<Node>,
    },

    UnaryExpression {
        operator: String,
        argument: Box<Node>,
        prefix: bool,
    },

    UpdateExpression {
        operator: String,
        argument: Box<Node>,
        prefix: bool,
    },

    ConditionalExpression {
        test: Box<Node>,
        consequent: Box<Node>,
        alternate: Box<Node>,
    },

    SpreadElement {
        argument: Box<Node>,
    },

    SpreadElementPattern {
        argument: Box<Node>,
    },

    SpreadProperty {
        argument: Box<Node>,
    },

    SpreadPropertyPattern {
        argument: Box<Node>,
    },

    Property {
        key: Box<Node>,
        value: Box<Node>,
        kind: PropertyKind,
        method: bool,
    },

    PropertyPattern {
        key: Box<Node>,
        pattern: Box<Node>,
    },

    /// Path segment: `.body`.
    Path {
        body: Box<Node>,
    },

    // =========================================================================
    // Draft module syntax
    // =========================================================================
    ModuleDeclaration {
        id: Box<Node>,
        source: Option<Box<Node>>,
        body: Option<Box<Node>>,
    },

    ModuleSpecifier {
        value: String,
    },

    ImportSpecifier {
        id: Box<Node>,
        name: Option<Box<Node>>,
    },

    ExportSpecifier {
        id: Box<Node>,
        name: Option<Box<Node>>,
    },

    ExportBatchSpecifier {},

    // =========================================================================
    // Anything else
    // =========================================================================
    /// A kind the model does not carry (`MethodDefinition`, `ObjectExpression`,
    /// `ForOfStatement`, ...). Only the discriminant is kept.
    Unmodeled { kind: String },
}


/// `var`, `let` or `const`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableKind {
    #[default]
    Var,
    Let,
    Const,
}

impl VariableKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Var => "var",
            Self::Let => "let",
            Self::Const => "const",
        }
    }
}

/// Object property kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyKind {
    #[default]
    Init,
    Get,
    Set,
}

/// Primitive value of a `Literal`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LiteralValue {
    #[default]
    Null,
    Boolean(bool),
    Number(f64),
    String(String),
}

/// Regular expression literal: `/pattern/flags`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegexLiteral {
    pub pattern: String,
    #[serde(default)]
    pub flags: String,
}

impl Node {
    /// Discriminants that deserialize into a modeled variant.
    pub const MODELED_KINDS: &'static [&'static str] = &[
        "Program",
        "EmptyStatement",
        "ExpressionStatement",
        "BlockStatement",
        "ReturnStatement",
        "VariableDeclaration",
        "VariableDeclarator",
        "WithStatement",
        "IfStatement",
        "ForStatement",
        "ForInStatement",
        "WhileStatement",
        "DoWhileStatement",
        "BreakStatement",
        "ContinueStatement",
        "LabeledStatement",
        "TryStatement",
        "CatchClause",
        "ThrowStatement",
        "SwitchStatement",
        "SwitchCase",
        "DebuggerStatement",
        "FunctionDeclaration",
        "FunctionExpression",
        "ArrowFunctionExpression",
        "YieldExpression",
        "AwaitExpression",
        "Identifier",
        "Literal",
        "ThisExpression",
        "BinaryExpression",
        "LogicalExpression",
        "AssignmentExpression",
        "MemberExpression",
        "CallExpression",
        "NewExpression",
        "SequenceExpression",
        "UnaryExpression",
        "UpdateExpression",
        "ConditionalExpression",
        "SpreadElement",
        "SpreadElementPattern",
        "SpreadProperty",
        "SpreadPropertyPattern",
        "Property",
        "PropertyPattern",
        "Path",
        "ModuleDeclaration",
        "ModuleSpecifier",
        "ImportSpecifier",
        "ExportSpecifier",
        "ExportBatchSpecifier",
    ];

    pub fn is_modeled_kind(kind: &str) -> bool {
        Self::MODELED_KINDS.contains(&kind)
    }

    /// The ESTree discriminant of this node.
    pub fn kind(&self) -> &str {
        match self {
            Self::Program { .. } => "Program",
            Self::EmptyStatement {} => "EmptyStatement",
            Self::ExpressionStatement { .. } => "ExpressionStatement",
            Self::BlockStatement { .. } => "BlockStatement",
            Self::ReturnStatement { .. } => "ReturnStatement",
            Self::VariableDeclaration { .. } => "VariableDeclaration",
            Self::VariableDeclarator { .. } => "VariableDeclarator",
            Self::WithStatement { .. } => "WithStatement",
            Self::IfStatement { .. } => "IfStatement",
            Self::ForStatement { .. } => "ForStatement",
            Self::ForInStatement { .. } => "ForInStatement",
            Self::WhileStatement { .. } => "WhileStatement",
            Self::DoWhileStatement { .. } => "DoWhileStatement",
            Self::BreakStatement { .. } => "BreakStatement",
            Self::ContinueStatement { .. } => "ContinueStatement",
            Self::LabeledStatement { .. } => "LabeledStatement",
            Self::TryStatement { .. } => "TryStatement",
            Self::CatchClause { .. } => "CatchClause",
            Self::ThrowStatement { .. } => "ThrowStatement",
            Self::SwitchStatement { .. } => "SwitchStatement",
            Self::SwitchCase { .. } => "SwitchCase",
            Self::DebuggerStatement {} => "DebuggerStatement",
            Self::FunctionDeclaration { .. } => "FunctionDeclaration",
            Self::FunctionExpression { .. } => "FunctionExpression",
            Self::ArrowFunctionExpression { .. } => "ArrowFunctionExpression",
            Self::YieldExpression { .. } => "YieldExpression",
            Self::AwaitExpression { .. } => "AwaitExpression",
            Self::Identifier { .. } => "Identifier",
            Self::Literal { .. } => "Literal",
            Self::ThisExpression {} => "ThisExpression",
            Self::BinaryExpression { .. } => "BinaryExpression",
            Self::LogicalExpression { .. } => "LogicalExpression",
            Self::AssignmentExpression { .. } => "AssignmentExpression",
            Self::MemberExpression { .. } => "MemberExpression",
            Self::CallExpression { .. } => "CallExpression",
            Self::NewExpression { .. } => "NewExpression",
            Self::SequenceExpression { .. } => "SequenceExpression",
            Self::UnaryExpression { .. } => "UnaryExpression",
            Self::UpdateExpression { .. } => "UpdateExpression",
            Self::ConditionalExpression { .. } => "ConditionalExpression",
            Self::SpreadElement { .. } => "SpreadElement",
            Self::SpreadElementPattern { .. } => "SpreadElementPattern",
            Self::SpreadProperty { .. } => "SpreadProperty",
            Self::SpreadPropertyPattern { .. } => "SpreadPropertyPattern",
            Self::Property { .. } => "Property",
            Self::PropertyPattern { .. } => "PropertyPattern",
            Self::Path { .. } => "Path",
            Self::ModuleDeclaration { .. } => "ModuleDeclaration",
            Self::ModuleSpecifier { .. } => "ModuleSpecifier",
            Self::ImportSpecifier { .. } => "ImportSpecifier",
            Self::ExportSpecifier { .. } => "ExportSpecifier",
            Self::ExportBatchSpecifier {} => "ExportBatchSpecifier",
            Self::Unmodeled { kind } => kind.as_str(),
        }
    }

    /// Direct children in source order.
    pub fn children(&self) -> Children<'_> {
        let mut out = Children::new();
        self.for_each_child(|child| out.push(child));
        out
    }

    /// Visit direct children in source order.
    pub fn for_each_child<'a>(&'a self, mut f: impl FnMut(&'a Node)) {
        match self {
            Self::Program { body } | Self::BlockStatement { body } => body.iter().for_each(f),
            Self::SequenceExpression { expressions } => expressions.iter().for_each(f),
            Self::VariableDeclaration { declarations, .. } => declarations.iter().for_each(f),

            Self::ExpressionStatement { expression } => f(expression),
            Self::ThrowStatement { argument }
            | Self::SpreadElement { argument }
            | Self::SpreadElementPattern { argument }
            | Self::SpreadProperty { argument }
            | Self::SpreadPropertyPattern { argument }
            | Self::UnaryExpression { argument, .. }
            | Self::UpdateExpression { argument, .. } => f(argument),
            Self::Path { body } => f(body),

            Self::ReturnStatement { argument }
            | Self::YieldExpression { argument, .. }
            | Self::AwaitExpression { argument, .. } => {
                if let Some(argument) = argument {
                    f(argument);
                }
            }
            Self::BreakStatement { label } | Self::ContinueStatement { label } => {
                if let Some(label) = label {
                    f(label);
                }
            }

            Self::VariableDeclarator { id, init } => {
                f(id);
                if let Some(init) = init {
                    f(init);
                }
            }
            Self::WithStatement { object, body } => {
                f(object);
                f(body);
            }
            Self::IfStatement {
                test,
                consequent,
                alternate,
            } => {
                f(test);
                f(consequent);
                if let Some(alternate) = alternate {
                    f(alternate);
                }
            }
            Self::ForStatement {
                init,
                test,
                update,
                body,
            } => {
                for part in [init, test, update].into_iter().flatten() {
                    f(part);
                }
                f(body);
            }
            Self::ForInStatement {
                left, right, body, ..
            } => {
                f(left);
                f(right);
                f(body);
            }
            Self::WhileStatement { test, body } => {
                f(test);
                f(body);
            }
            Self::DoWhileStatement { body, test } => {
                f(body);
                f(test);
            }
            Self::LabeledStatement { label, body } => {
                f(label);
                f(body);
            }
            Self::TryStatement {
                block,
                handler,
                finalizer,
            } => {
                f(block);
                for part in [handler, finalizer].into_iter().flatten() {
                    f(part);
                }
            }
            Self::CatchClause { param, guard, body } => {
                for part in [param, guard].into_iter().flatten() {
                    f(part);
                }
                f(body);
            }
            Self::SwitchStatement {
                discriminant,
                cases,
            } => {
                f(discriminant);
                cases.iter().for_each(f);
            }
            Self::SwitchCase { test, consequent } => {
                if let Some(test) = test {
                    f(test);
                }
                consequent.iter().for_each(f);
            }

            Self::FunctionDeclaration {
                id, params, body, ..
            }
            | Self::FunctionExpression {
                id, params, body, ..
            } => {
                if let Some(id) = id {
                    f(id);
                }
                params.iter().for_each(&mut f);
                f(body);
            }
            Self::ArrowFunctionExpression { params, body, .. } => {
                params.iter().for_each(&mut f);
                f(body);
            }

            Self::BinaryExpression { left, right, .. }
            | Self::LogicalExpression { left, right, .. }
            | Self::AssignmentExpression { left, right, .. } => {
                f(left);
                f(right);
            }
            Self::MemberExpression {
                object, property, ..
            } => {
                f(object);
                f(property);
            }
            Self::CallExpression { callee, arguments } => {
                f(callee);
                arguments.iter().for_each(f);
            }
            Self::NewExpression { callee, arguments } => {
                f(callee);
                if let Some(arguments) = arguments {
                    arguments.iter().for_each(f);
                }
            }
            Self::ConditionalExpression {
                test,
                consequent,
                alternate,
            } => {
                f(test);
                f(consequent);
                f(alternate);
            }
            Self::Property { key, value, .. } => {
                f(key);
                f(value);
            }
            Self::PropertyPattern { key, pattern } => {
                f(key);
                f(pattern);
            }

            Self::ModuleDeclaration { id, source, body } => {
                f(id);
                for part in [source, body].into_iter().flatten() {
                    f(part);
                }
            }
            Self::ImportSpecifier { id, name } | Self::ExportSpecifier { id, name } => {
                f(id);
                if let Some(name) = name {
                    f(name);
                }
            }

            Self::EmptyStatement {}
            | Self::DebuggerStatement {}
            | Self::ThisExpression {}
            | Self::ExportBatchSpecifier {}
            | Self::Identifier { .. }
            | Self::Literal { .. }
            | Self::ModuleSpecifier { .. }
            | Self::Unmodeled { .. } => {}
        }
    }
}
