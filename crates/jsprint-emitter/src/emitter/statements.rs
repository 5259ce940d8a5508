use std::ptr;

use jsprint_ast::{Node, VariableKind};

use super::{Printer, Recurse, join, render_all};
use crate::error::Result;

impl<'a> Printer<'a> {
    // =========================================================================
    // Blocks
    // =========================================================================

    pub(super) fn emit_block(&self, body: &[Node], p: &mut Recurse<'_>) -> Result<String> {
        if body.is_empty() {
            return Ok("{}".to_string());
        }
        let statements = join(body, "\n", p)?;
        Ok(format!("{{\n{}\n}}", self.indent(&statements)))
    }

    pub(super) fn emit_return(&self, argument: Option<&Node>, p: &mut Recurse<'_>) -> Result<String> {
        let mut code = String::from("return");
        if let Some(argument) = argument {
            code.push(' ');
            code.push_str(&p(argument)?);
        }
        code.push(';');
        Ok(code)
    }

    // =========================================================================
    // Variable declarations
    // =========================================================================

    pub(super) fn emit_variable_declaration(
        &self,
        node: &Node,
        kind: VariableKind,
        declarations: &[Node],
        p: &mut Recurse<'_>,
    ) -> Result<String> {
        let printed = render_all(declarations, p)?;

        // Wrapped declarators continue on the next line.
        let separator = if printed.iter().any(|decl| decl.contains('\n')) {
            format!(",\n{}", self.options.continuation_indent)
        } else {
            ", ".to_string()
        };

        let mut code = format!("{} {}", kind.as_str(), printed.join(&separator));
        if !self.is_for_header(node) {
            code.push(';');
        }
        Ok(code)
    }

    pub(super) fn emit_variable_declarator(
        &self,
        id: &Node,
        init: Option<&Node>,
        p: &mut Recurse<'_>,
    ) -> Result<String> {
        match init {
            Some(init) => Ok(format!("{} = {}", p(id)?, p(init)?)),
            None => p(id),
        }
    }

    /// Whether `node` sits in the head of a `for`, `for-in` or `for-of` loop,
    /// where the loop syntax supplies the terminator.
    fn is_for_header(&self, node: &Node) -> bool {
        match self.parents.parent_of(node) {
            Some(Node::ForStatement { init: Some(init), .. }) => ptr::eq(&**init, node),
            Some(Node::ForInStatement { left, .. }) => ptr::eq(&**left, node),
            Some(Node::Unmodeled { kind }) => kind == "ForOfStatement",
            _ => false,
        }
    }

    // =========================================================================
    // Control flow
    // =========================================================================

    pub(super) fn emit_if(
        &self,
        node: &Node,
        test: &Node,
        consequent: &Node,
        alternate: Option<&Node>,
        p: &mut Recurse<'_>,
    ) -> Result<String> {
        if alternate.is_some() {
            return Err(self.unsupported(node.kind()));
        }
        Ok(format!("if ({}) {}", p(test)?, p(consequent)?))
    }

    pub(super) fn emit_for(
        &self,
        init: Option<&Node>,
        test: Option<&Node>,
        update: Option<&Node>,
        body: &Node,
        p: &mut Recurse<'_>,
    ) -> Result<String> {
        let mut code = String::from("for (");
        if let Some(init) = init {
            code.push_str(&p(init)?);
        }
        code.push(';');
        if let Some(test) = test {
            code.push(' ');
            code.push_str(&p(test)?);
        }
        code.push(';');
        if let Some(update) = update {
            code.push(' ');
            code.push_str(&p(update)?);
        }
        code.push_str(") ");
        code.push_str(&p(body)?);
        Ok(code)
    }

    pub(super) fn emit_for_in(
        &self,
        left: &Node,
        right: &Node,
        body: &Node,
        each: bool,
        p: &mut Recurse<'_>,
    ) -> Result<String> {
        let head = if each { "for each (" } else { "for (" };
        Ok(format!("{head}{} in {}) {}", p(left)?, p(right)?, p(body)?))
    }

    pub(super) fn emit_do_while(&self, body: &Node, test: &Node, p: &mut Recurse<'_>) -> Result<String> {
        let mut code = format!("do {}", p(body)?);
        // `while` stays on the closing-brace line; otherwise it starts a new one.
        if code.ends_with('}') {
            code.push_str(" while");
        } else {
            code.push_str("\nwhile");
        }
        code.push_str(&format!(" ({});", p(test)?));
        Ok(code)
    }

    /// `break` / `continue` with an optional label.
    pub(super) fn emit_jump(
        &self,
        keyword: &str,
        label: Option<&Node>,
        p: &mut Recurse<'_>,
    ) -> Result<String> {
        let mut code = keyword.to_string();
        if let Some(label) = label {
            code.push(' ');
            code.push_str(&p(label)?);
        }
        code.push(';');
        Ok(code)
    }

    // =========================================================================
    // Exceptions
    // =========================================================================

    pub(super) fn emit_try(
        &self,
        block: &Node,
        handler: Option<&Node>,
        finalizer: Option<&Node>,
        p: &mut Recurse<'_>,
    ) -> Result<String> {
        let mut code = format!("try {}", p(block)?);
        if let Some(handler) = handler {
            code.push(' ');
            code.push_str(&p(handler)?);
        }
        if let Some(finalizer) = finalizer {
            code.push_str(" finally ");
            code.push_str(&p(finalizer)?);
        }
        Ok(code)
    }

    pub(super) fn emit_catch(
        &self,
        param: Option<&Node>,
        guard: Option<&Node>,
        body: &Node,
        p: &mut Recurse<'_>,
    ) -> Result<String> {
        let Some(param) = param else {
            // Optional catch binding.
            return Ok(format!("catch {}", p(body)?));
        };
        let mut code = format!("catch ({}", p(param)?);
        if let Some(guard) = guard {
            code.push_str(" if ");
            code.push_str(&p(guard)?);
        }
        code.push_str(") ");
        code.push_str(&p(body)?);
        Ok(code)
    }

    // =========================================================================
    // Switch
    // =========================================================================

    pub(super) fn emit_switch(
        &self,
        discriminant: &Node,
        cases: &[Node],
        p: &mut Recurse<'_>,
    ) -> Result<String> {
        let mut code = format!("switch ({}) {{", p(discriminant)?);
        if !cases.is_empty() {
            code.push('\n');
            code.push_str(&self.indent(&join(cases, "\n", p)?));
            code.push('\n');
        }
        code.push('}');
        Ok(code)
    }

    pub(super) fn emit_switch_case(
        &self,
        test: Option<&Node>,
        consequent: &[Node],
        p: &mut Recurse<'_>,
    ) -> Result<String> {
        let mut code = match test {
            Some(test) => format!("case {}:", p(test)?),
            None => "default:".to_string(),
        };
        match consequent {
            [] => {}
            [only] => {
                code.push(' ');
                code.push_str(&p(only)?);
            }
            statements => {
                code.push('\n');
                code.push_str(&self.indent(&join(statements, "\n", p)?));
            }
        }
        Ok(code)
    }
}
