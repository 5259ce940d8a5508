//! Node printer.
//!
//! `Printer::render` maps one node to source text. Children are rendered
//! through the `recurse` callback it is handed, so the printer never walks
//! the tree on its own; `Printer::print` supplies itself as that callback.
//!
//! Rendering is split by syntactic category:
//! - `statements`: program, blocks, declarations, control flow
//! - `expressions`: operators, member access, calls, properties
//! - `functions`: function declarations/expressions, arrows, yield, await
//! - `literals`: literal values and quoting
//! - `modules`: draft module declarations and specifiers

use jsprint_ast::{Node, ParentLookup};
use tracing::{debug, trace};

use crate::error::{Result, UnparseError};
use crate::indent::indent_with;
use crate::options::PrintOptions;

mod expressions;
mod functions;
pub(crate) mod literals;
mod modules;
mod statements;

const STACK_RED_ZONE: usize = 64 * 1024;
const STACK_SEGMENT: usize = 1024 * 1024;

/// Recursive print callback handed to [`Printer::render`].
pub type Recurse<'r> = dyn FnMut(&Node) -> Result<String> + 'r;

/// Renders syntax tree nodes back to source text.
pub struct Printer<'a> {
    parents: &'a dyn ParentLookup,
    options: PrintOptions,
}

impl<'a> Printer<'a> {
    pub fn new(parents: &'a dyn ParentLookup, options: PrintOptions) -> Self {
        Self { parents, options }
    }

    pub fn options(&self) -> &PrintOptions {
        &self.options
    }

    /// Render `node` and, through recursion, its whole subtree.
    pub fn print(&self, node: &Node) -> Result<String> {
        // One frame group per tree level; deep trees continue on a new segment.
        stacker::maybe_grow(STACK_RED_ZONE, STACK_SEGMENT, || {
            self.render(node, &mut |child: &Node| self.print(child))
        })
    }

    /// Render one node. Children are rendered by calling `p`.
    pub fn render(&self, node: &Node, p: &mut Recurse<'_>) -> Result<String> {
        trace!(kind = node.kind(), "render");
        match node {
            // Statements
            Node::Program { body } => join(body, "\n", p),
            Node::EmptyStatement {} => Ok(String::new()),
            Node::ExpressionStatement { expression } => Ok(format!("{};", p(expression)?)),
            Node::BlockStatement { body } => self.emit_block(body, p),
            Node::ReturnStatement { argument } => self.emit_return(argument.as_deref(), p),
            Node::VariableDeclaration { kind, declarations } => {
                self.emit_variable_declaration(node, *kind, declarations, p)
            }
            Node::VariableDeclarator { id, init } => {
                self.emit_variable_declarator(id, init.as_deref(), p)
            }
            Node::WithStatement { object, body } => {
                Ok(format!("with ({}) {}", p(object)?, p(body)?))
            }
            Node::IfStatement {
                test,
                consequent,
                alternate,
            } => self.emit_if(node, test, consequent, alternate.as_deref(), p),
            Node::ForStatement {
                init,
                test,
                update,
                body,
            } => self.emit_for(init.as_deref(), test.as_deref(), update.as_deref(), body, p),
            Node::ForInStatement {
                left,
                right,
                body,
                each,
            } => self.emit_for_in(left, right, body, *each, p),
            Node::WhileStatement { test, body } => {
                Ok(format!("while ({}) {}", p(test)?, p(body)?))
            }
            Node::DoWhileStatement { body, test } => self.emit_do_while(body, test, p),
            Node::BreakStatement { label } => self.emit_jump("break", label.as_deref(), p),
            Node::ContinueStatement { label } => self.emit_jump("continue", label.as_deref(), p),
            Node::LabeledStatement { label, body } => {
                Ok(format!("{}:\n{}", p(label)?, p(body)?))
            }
            Node::TryStatement {
                block,
                handler,
                finalizer,
            } => self.emit_try(block, handler.as_deref(), finalizer.as_deref(), p),
            Node::CatchClause { param, guard, body } => {
                self.emit_catch(param.as_deref(), guard.as_deref(), body, p)
            }
            Node::ThrowStatement { argument } => Ok(format!("throw {};", p(argument)?)),
            Node::SwitchStatement {
                discriminant,
                cases,
            } => self.emit_switch(discriminant, cases, p),
            Node::SwitchCase { test, consequent } => {
                self.emit_switch_case(test.as_deref(), consequent, p)
            }
            Node::DebuggerStatement {} => Ok("debugger;".to_string()),

            // Functions
            Node::FunctionDeclaration {
                id,
                params,
                body,
                generator,
                is_async,
            }
            | Node::FunctionExpression {
                id,
                params,
                body,
                generator,
                is_async,
            } => self.emit_function(id.as_deref(), params, body, *generator, *is_async, p),
            Node::ArrowFunctionExpression {
                params,
                body,
                is_async,
            } => self.emit_arrow_function(params, body, *is_async, p),
            Node::YieldExpression { argument, delegate } => {
                self.emit_yield(argument.as_deref(), *delegate, p)
            }
            Node::AwaitExpression { argument, all } => {
                self.emit_await(argument.as_deref(), *all, p)
            }

            // Expressions
            Node::Identifier { name } => Ok(name.clone()),
            Node::Literal { value, regex } => Ok(literals::emit_literal(value, regex.as_ref())),
            Node::ThisExpression {} => Ok("this".to_string()),
            Node::BinaryExpression {
                operator,
                left,
                right,
            }
            | Node::LogicalExpression {
                operator,
                left,
                right,
            }
            | Node::AssignmentExpression {
                operator,
                left,
                right,
            } => self.emit_binary(left, operator, right, p),
            Node::MemberExpression {
                object,
                property,
                computed,
            } => self.emit_member(object, property, *computed, p),
            Node::CallExpression { callee, arguments } => self.emit_call(callee, arguments, p),
            Node::NewExpression { callee, arguments } => {
                self.emit_new(callee, arguments.as_deref(), p)
            }
            Node::SequenceExpression { expressions } => join(expressions, ", ", p),
            Node::UnaryExpression {
                operator, argument, ..
            } => self.emit_unary(operator, argument, p),
            Node::UpdateExpression {
                operator,
                argument,
                prefix,
            } => self.emit_update(operator, argument, *prefix, p),
            Node::ConditionalExpression {
                test,
                consequent,
                alternate,
            } => self.emit_conditional(test, consequent, alternate, p),
            Node::SpreadElement { argument }
            | Node::SpreadElementPattern { argument }
            | Node::SpreadProperty { argument }
            | Node::SpreadPropertyPattern { argument } => Ok(format!("...{}", p(argument)?)),
            Node::Property {
                key,
                value,
                kind,
                method,
            } => self.emit_property(node, key, value, *kind, *method, p),
            Node::PropertyPattern { key, pattern } => {
                Ok(format!("{}: {}", p(key)?, p(pattern)?))
            }
            Node::Path { body } => Ok(format!(".{}", p(body)?)),

            // Draft module syntax
            Node::ModuleDeclaration { id, source, body } => {
                self.emit_module_declaration(id, source.as_deref(), body.as_deref(), p)
            }
            Node::ModuleSpecifier { value } => Ok(literals::quote_string(value)),
            Node::ImportSpecifier { id, name } | Node::ExportSpecifier { id, name } => {
                self.emit_specifier(id, name.as_deref(), p)
            }
            Node::ExportBatchSpecifier {} => Ok("*".to_string()),

            Node::Unmodeled { kind } => Err(self.unsupported(kind)),
        }
    }

    /// Build the error for a node that cannot be rendered.
    pub(crate) fn unsupported(&self, kind: &str) -> UnparseError {
        debug!(kind, "unsupported node kind");
        UnparseError::unsupported(kind)
    }

    /// Nest `text` one level deeper.
    pub(crate) fn indent(&self, text: &str) -> String {
        indent_with(text, &self.options.indent_unit)
    }
}

/// Render `nodes` in order and join them with `separator`.
pub(crate) fn join(nodes: &[Node], separator: &str, p: &mut Recurse<'_>) -> Result<String> {
    Ok(render_all(nodes, p)?.join(separator))
}

/// Render `nodes` in order. The first failure aborts the list.
pub(crate) fn render_all(nodes: &[Node], p: &mut Recurse<'_>) -> Result<Vec<String>> {
    nodes.iter().map(|node| p(node)).collect()
}
