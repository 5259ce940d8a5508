use jsprint_ast::{Node, PropertyKind};

use super::{Printer, Recurse, join};
use crate::error::Result;

impl<'a> Printer<'a> {
    // =========================================================================
    // Operators
    // =========================================================================

    /// Binary, logical and assignment expressions share one layout.
    pub(super) fn emit_binary(
        &self,
        left: &Node,
        operator: &str,
        right: &Node,
        p: &mut Recurse<'_>,
    ) -> Result<String> {
        Ok(format!("{} {operator} {}", p(left)?, p(right)?))
    }

    /// Keyword operators (`typeof`, `void`, `delete`) need a space before the
    /// operand; punctuators do not.
    pub(super) fn emit_unary(
        &self,
        operator: &str,
        argument: &Node,
        p: &mut Recurse<'_>,
    ) -> Result<String> {
        let mut code = operator.to_string();
        if operator.ends_with(|ch: char| ch.is_ascii_lowercase()) {
            code.push(' ');
        }
        code.push_str(&p(argument)?);
        Ok(code)
    }

    pub(super) fn emit_update(
        &self,
        operator: &str,
        argument: &Node,
        prefix: bool,
        p: &mut Recurse<'_>,
    ) -> Result<String> {
        let operand = p(argument)?;
        Ok(if prefix {
            format!("{operator}{operand}")
        } else {
            format!("{operand}{operator}")
        })
    }

    /// Always parenthesized so nesting never depends on precedence.
    pub(super) fn emit_conditional(
        &self,
        test: &Node,
        consequent: &Node,
        alternate: &Node,
        p: &mut Recurse<'_>,
    ) -> Result<String> {
        Ok(format!(
            "({} ? {} : {})",
            p(test)?,
            p(consequent)?,
            p(alternate)?
        ))
    }

    // =========================================================================
    // Access and calls
    // =========================================================================

    pub(super) fn emit_member(
        &self,
        object: &Node,
        property: &Node,
        computed: bool,
        p: &mut Recurse<'_>,
    ) -> Result<String> {
        let object = p(object)?;
        let property = p(property)?;
        Ok(if computed {
            format!("{object}[{property}]")
        } else {
            format!("{object}.{property}")
        })
    }

    pub(super) fn emit_call(
        &self,
        callee: &Node,
        arguments: &[Node],
        p: &mut Recurse<'_>,
    ) -> Result<String> {
        let callee = p(callee)?;
        Ok(format!("{callee}({})", join(arguments, ", ", p)?))
    }

    pub(super) fn emit_new(
        &self,
        callee: &Node,
        arguments: Option<&[Node]>,
        p: &mut Recurse<'_>,
    ) -> Result<String> {
        let mut code = format!("new {}", p(callee)?);
        if let Some(arguments) = arguments {
            code.push('(');
            code.push_str(&join(arguments, ", ", p)?);
            code.push(')');
        }
        Ok(code)
    }

    // =========================================================================
    // Properties
    // =========================================================================

    /// Only plain `key: value` properties are rendered. Methods and accessors
    /// are rejected.
    pub(super) fn emit_property(
        &self,
        node: &Node,
        key: &Node,
        value: &Node,
        kind: PropertyKind,
        method: bool,
        p: &mut Recurse<'_>,
    ) -> Result<String> {
        if method || kind != PropertyKind::Init {
            return Err(self.unsupported(node.kind()));
        }
        Ok(format!("{}: {}", p(key)?, p(value)?))
    }
}
