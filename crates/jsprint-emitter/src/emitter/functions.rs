use jsprint_ast::Node;

use super::{Printer, Recurse, join};
use crate::error::Result;

impl<'a> Printer<'a> {
    // =========================================================================
    // Functions
    // =========================================================================

    /// Function declarations and expressions:
    /// `async function* name(a, b) { ... }`
    pub(super) fn emit_function(
        &self,
        id: Option<&Node>,
        params: &[Node],
        body: &Node,
        generator: bool,
        is_async: bool,
        p: &mut Recurse<'_>,
    ) -> Result<String> {
        let mut code = String::new();
        if is_async {
            code.push_str("async ");
        }
        code.push_str("function");
        if generator {
            code.push('*');
        }
        if let Some(id) = id {
            code.push(' ');
            code.push_str(&p(id)?);
        }
        code.push('(');
        code.push_str(&join(params, ", ", p)?);
        code.push_str(") ");
        code.push_str(&p(body)?);
        Ok(code)
    }

    /// A lone parameter is written bare: `x => x`, `(a, b) => a`.
    pub(super) fn emit_arrow_function(
        &self,
        params: &[Node],
        body: &Node,
        is_async: bool,
        p: &mut Recurse<'_>,
    ) -> Result<String> {
        let mut code = String::new();
        if is_async {
            code.push_str("async ");
        }
        match params {
            [param] => code.push_str(&p(param)?),
            params => {
                code.push('(');
                code.push_str(&join(params, ", ", p)?);
                code.push(')');
            }
        }
        code.push_str(" => ");
        code.push_str(&p(body)?);
        Ok(code)
    }

    // =========================================================================
    // Suspension
    // =========================================================================

    pub(super) fn emit_yield(
        &self,
        argument: Option<&Node>,
        delegate: bool,
        p: &mut Recurse<'_>,
    ) -> Result<String> {
        let mut code = String::from("yield");
        if delegate {
            code.push('*');
        }
        if let Some(argument) = argument {
            code.push(' ');
            code.push_str(&p(argument)?);
        }
        Ok(code)
    }

    // NOTE: the operand follows `await` with no separating space. Existing
    // output depends on this layout, so it is kept as is.
    pub(super) fn emit_await(
        &self,
        argument: Option<&Node>,
        all: bool,
        p: &mut Recurse<'_>,
    ) -> Result<String> {
        let mut code = String::from("await");
        if all {
            code.push('*');
        }
        if let Some(argument) = argument {
            code.push_str(&p(argument)?);
        }
        Ok(code)
    }
}
