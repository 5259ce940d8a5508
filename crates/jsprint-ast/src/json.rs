//! ESTree JSON ingestion.
//!
//! Trees come from an external parser (acorn, esprima) serialized as JSON.
//! The text is parsed once into a `serde_json::Value` with no nesting limit,
//! then every object is decoded by its `type`: modeled kinds become their
//! `Node` variant, any other kind becomes `Node::Unmodeled` so that printing
//! can name it. Fields are moved out of the parsed objects, never copied.

use serde::de::{Deserialize, DeserializeOwned, Deserializer, Error as _};
use serde_json::{Map, Value};
use tracing::trace;

use crate::node::{LiteralValue, Node, PropertyKind, RegexLiteral, VariableKind};

type Error = serde_json::Error;
type Result<T, E = Error> = std::result::Result<T, E>;

/// Remaining stack below which decoding moves to a fresh segment.
const STACK_RED_ZONE: usize = 64 * 1024;
/// Size of each additional stack segment.
const STACK_SEGMENT: usize = 1024 * 1024;

/// Parse an ESTree tree from JSON text.
///
/// Nesting depth is bounded only by memory; deep trees grow the stack on
/// demand instead of hitting the parser's default recursion limit.
pub fn from_json_str(json: &str) -> Result<Node> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    deserializer.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
    deserializer.end()?;
    decode(value)
}

/// Convert an already-parsed JSON value into a tree.
pub fn from_json_value(value: Value) -> Result<Node> {
    decode(value)
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        decode(value).map_err(D::Error::custom)
    }
}

fn decode(value: Value) -> Result<Node> {
    stacker::maybe_grow(STACK_RED_ZONE, STACK_SEGMENT, || decode_node(value))
}

fn decode_node(value: Value) -> Result<Node> {
    let Value::Object(object) = value else {
        return Err(Error::custom(format!(
            "expected an ESTree node object, found {}",
            describe(&value)
        )));
    };
    let mut fields = Fields { object };
    let kind = match fields.take("type") {
        Some(Value::String(kind)) => kind,
        Some(other) => {
            return Err(Error::custom(format!(
                "node `type` must be a string, found {}",
                describe(&other)
            )));
        }
        None => return Err(Error::missing_field("type")),
    };

    let node = match kind.as_str() {
        // Program & statements
        "Program" => Node::Program {
            body: fields.nodes("body")?,
        },
        "EmptyStatement" => Node::EmptyStatement {},
        "ExpressionStatement" => Node::ExpressionStatement {
            expression: fields.node("expression")?,
        },
        "BlockStatement" => Node::BlockStatement {
            body: fields.nodes("body")?,
        },
        "ReturnStatement" => Node::ReturnStatement {
            argument: fields.opt_node("argument")?,
        },
        "VariableDeclaration" => Node::VariableDeclaration {
            kind: fields.required::<VariableKind>("kind")?,
            declarations: fields.nodes("declarations")?,
        },
        "VariableDeclarator" => Node::VariableDeclarator {
            id: fields.node("id")?,
            init: fields.opt_node("init")?,
        },
        "WithStatement" => Node::WithStatement {
            object: fields.node("object")?,
            body: fields.node("body")?,
        },
        "IfStatement" => Node::IfStatement {
            test: fields.node("test")?,
            consequent: fields.node("consequent")?,
            alternate: fields.opt_node("alternate")?,
        },
        "ForStatement" => Node::ForStatement {
            init: fields.opt_node("init")?,
            test: fields.opt_node("test")?,
            update: fields.opt_node("update")?,
            body: fields.node("body")?,
        },
        "ForInStatement" => Node::ForInStatement {
            left: fields.node("left")?,
            right: fields.node("right")?,
            body: fields.node("body")?,
            each: fields.flag("each", false)?,
        },
        "WhileStatement" => Node::WhileStatement {
            test: fields.node("test")?,
            body: fields.node("body")?,
        },
        "DoWhileStatement" => Node::DoWhileStatement {
            body: fields.node("body")?,
            test: fields.node("test")?,
        },
        "BreakStatement" => Node::BreakStatement {
            label: fields.opt_node("label")?,
        },
        "ContinueStatement" => Node::ContinueStatement {
            label: fields.opt_node("label")?,
        },
        "LabeledStatement" => Node::LabeledStatement {
            label: fields.node("label")?,
            body: fields.node("body")?,
        },
        "TryStatement" => Node::TryStatement {
            block: fields.node("block")?,
            handler: fields.opt_node("handler")?,
            finalizer: fields.opt_node("finalizer")?,
        },
        "CatchClause" => Node::CatchClause {
            param: fields.opt_node("param")?,
            guard: fields.opt_node("guard")?,
            body: fields.node("body")?,
        },
        "ThrowStatement" => Node::ThrowStatement {
            argument: fields.node("argument")?,
        },
        "SwitchStatement" => Node::SwitchStatement {
            discriminant: fields.node("discriminant")?,
            cases: fields.nodes("cases")?,
        },
        "SwitchCase" => Node::SwitchCase {
            test: fields.opt_node("test")?,
            consequent: fields.nodes("consequent")?,
        },
        "DebuggerStatement" => Node::DebuggerStatement {},

        // Functions
        "FunctionDeclaration" => Node::FunctionDeclaration {
            id: fields.opt_node("id")?,
            params: fields.nodes("params")?,
            body: fields.node("body")?,
            generator: fields.flag("generator", false)?,
            is_async: fields.flag("async", false)?,
        },
        "FunctionExpression" => Node::FunctionExpression {
            id: fields.opt_node("id")?,
            params: fields.nodes("params")?,
            body: fields.node("body")?,
            generator: fields.flag("generator", false)?,
            is_async: fields.flag("async", false)?,
        },
        "ArrowFunctionExpression" => Node::ArrowFunctionExpression {
            params: fields.nodes("params")?,
            body: fields.node("body")?,
            is_async: fields.flag("async", false)?,
        },
        "YieldExpression" => Node::YieldExpression {
            argument: fields.opt_node("argument")?,
            delegate: fields.flag("delegate", false)?,
        },
        "AwaitExpression" => Node::AwaitExpression {
            argument: fields.opt_node("argument")?,
            all: fields.flag("all", false)?,
        },

        // Expressions
        "Identifier" => Node::Identifier {
            name: fields.string("name")?,
        },
        "Literal" => {
            let regex = fields.optional::<RegexLiteral>("regex")?;
            let value = literal_value(fields.take("value"), regex.is_some())?;
            Node::Literal { value, regex }
        }
        "ThisExpression" => Node::ThisExpression {},
        "BinaryExpression" => Node::BinaryExpression {
            operator: fields.string("operator")?,
            left: fields.node("left")?,
            right: fields.node("right")?,
        },
        "LogicalExpression" => Node::LogicalExpression {
            operator: fields.string("operator")?,
            left: fields.node("left")?,
            right: fields.node("right")?,
        },
        "AssignmentExpression" => Node::AssignmentExpression {
            operator: fields.string("operator")?,
            left: fields.node("left")?,
            right: fields.node("right")?,
        },
        "MemberExpression" => Node::MemberExpression {
            object: fields.node("object")?,
            property: fields.node("property")?,
            computed: fields.flag("computed", false)?,
        },
        "CallExpression" => Node::CallExpression {
            callee: fields.node("callee")?,
            arguments: fields.nodes("arguments")?,
        },
        "NewExpression" => Node::NewExpression {
            callee: fields.node("callee")?,
            arguments: fields.opt_nodes("arguments")?,
        },
        "SequenceExpression" => Node::SequenceExpression {
            expressions: fields.nodes("expressions")?,
        },
        "UnaryExpression" => Node::UnaryExpression {
            operator: fields.string("operator")?,
            argument: fields.node("argument")?,
            prefix: fields.flag("prefix", true)?,
        },
        "UpdateExpression" => Node::UpdateExpression {
            operator: fields.string("operator")?,
            argument: fields.node("argument")?,
            prefix: fields.flag("prefix", false)?,
        },
        "ConditionalExpression" => Node::ConditionalExpression {
            test: fields.node("test")?,
            consequent: fields.node("consequent")?,
            alternate: fields.node("alternate")?,
        },
        "SpreadElement" => Node::SpreadElement {
            argument: fields.node("argument")?,
        },
        "SpreadElementPattern" => Node::SpreadElementPattern {
            argument: fields.node("argument")?,
        },
        "SpreadProperty" => Node::SpreadProperty {
            argument: fields.node("argument")?,
        },
        "SpreadPropertyPattern" => Node::SpreadPropertyPattern {
            argument: fields.node("argument")?,
        },
        "Property" => Node::Property {
            key: fields.node("key")?,
            value: fields.node("value")?,
            kind: fields.optional::<PropertyKind>("kind")?.unwrap_or_default(),
            method: fields.flag("method", false)?,
        },
        "PropertyPattern" => Node::PropertyPattern {
            key: fields.node("key")?,
            pattern: fields.node("pattern")?,
        },
        "Path" => Node::Path {
            body: fields.node("body")?,
        },

        // Draft module syntax
        "ModuleDeclaration" => Node::ModuleDeclaration {
            id: fields.node("id")?,
            source: fields.opt_node("source")?,
            body: fields.opt_node("body")?,
        },
        "ModuleSpecifier" => Node::ModuleSpecifier {
            value: fields.string("value")?,
        },
        "ImportSpecifier" => Node::ImportSpecifier {
            id: fields.node("id")?,
            name: fields.opt_node("name")?,
        },
        "ExportSpecifier" => Node::ExportSpecifier {
            id: fields.node("id")?,
            name: fields.opt_node("name")?,
        },
        "ExportBatchSpecifier" => Node::ExportBatchSpecifier {},

        other => {
            trace!(kind = other, "unmodeled node kind");
            Node::unmodeled(other)
        }
    };
    Ok(node)
}

/// The fields of one node object, consumed as they are decoded.
struct Fields {
    object: Map<String, Value>,
}

impl Fields {
    fn take(&mut self, name: &str) -> Option<Value> {
        self.object.remove(name)
    }

    /// Present and non-null, or `None`.
    fn take_present(&mut self, name: &str) -> Option<Value> {
        self.take(name).filter(|value| !value.is_null())
    }

    fn node(&mut self, name: &'static str) -> Result<Box<Node>> {
        match self.take_present(name) {
            Some(value) => decode(value).map(Box::new),
            None => Err(Error::missing_field(name)),
        }
    }

    fn opt_node(&mut self, name: &str) -> Result<Option<Box<Node>>> {
        self.take_present(name)
            .map(|value| decode(value).map(Box::new))
            .transpose()
    }

    fn nodes(&mut self, name: &'static str) -> Result<Vec<Node>> {
        self.opt_nodes(name)?.ok_or_else(|| Error::missing_field(name))
    }

    fn opt_nodes(&mut self, name: &str) -> Result<Option<Vec<Node>>> {
        match self.take_present(name) {
            Some(Value::Array(items)) => items
                .into_iter()
                .map(decode)
                .collect::<Result<_>>()
                .map(Some),
            Some(other) => Err(Error::custom(format!(
                "field `{name}` must be an array of nodes, found {}",
                describe(&other)
            ))),
            None => Ok(None),
        }
    }

    fn string(&mut self, name: &'static str) -> Result<String> {
        match self.take(name) {
            Some(Value::String(value)) => Ok(value),
            Some(other) => Err(Error::custom(format!(
                "field `{name}` must be a string, found {}",
                describe(&other)
            ))),
            None => Err(Error::missing_field(name)),
        }
    }

    /// A boolean flag; absent or null means `default`.
    fn flag(&mut self, name: &str, default: bool) -> Result<bool> {
        match self.take_present(name) {
            Some(Value::Bool(value)) => Ok(value),
            Some(other) => Err(Error::custom(format!(
                "field `{name}` must be a boolean, found {}",
                describe(&other)
            ))),
            None => Ok(default),
        }
    }

    fn optional<T: DeserializeOwned>(&mut self, name: &str) -> Result<Option<T>> {
        self.take_present(name)
            .map(serde_json::from_value)
            .transpose()
    }

    fn required<T: DeserializeOwned>(&mut self, name: &'static str) -> Result<T> {
        self.optional(name)?.ok_or_else(|| Error::missing_field(name))
    }
}

/// `Literal.value`. Parsers serialize a `RegExp` value as `{}`, so a
/// non-primitive value is accepted only next to a `regex` payload.
fn literal_value(value: Option<Value>, has_regex: bool) -> Result<LiteralValue> {
    Ok(match value {
        None | Some(Value::Null) => LiteralValue::Null,
        Some(Value::Bool(value)) => LiteralValue::Boolean(value),
        Some(Value::Number(number)) => LiteralValue::Number(
            number
                .as_f64()
                .ok_or_else(|| Error::custom(format!("unrepresentable number {number}")))?,
        ),
        Some(Value::String(value)) => LiteralValue::String(value),
        Some(Value::Array(_) | Value::Object(_)) if has_regex => LiteralValue::Null,
        Some(other) => {
            return Err(Error::custom(format!(
                "literal value must be null, a boolean, a number or a string, found {}",
                describe(&other)
            )));
        }
    })
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
