use jsprint_ast::Node;

use super::{Printer, Recurse};
use crate::error::Result;

impl<'a> Printer<'a> {
    // =========================================================================
    // Draft module syntax
    // =========================================================================

    /// `module m from 'src'`, or `module m` followed directly by its body.
    pub(super) fn emit_module_declaration(
        &self,
        id: &Node,
        source: Option<&Node>,
        body: Option<&Node>,
        p: &mut Recurse<'_>,
    ) -> Result<String> {
        let mut code = format!("module {}", p(id)?);
        if let Some(source) = source {
            code.push_str(" from ");
            code.push_str(&p(source)?);
        } else if let Some(body) = body {
            code.push_str(&p(body)?);
        }
        Ok(code)
    }

    /// Import/export specifier: `id` or `id as name`.
    pub(super) fn emit_specifier(
        &self,
        id: &Node,
        name: Option<&Node>,
        p: &mut Recurse<'_>,
    ) -> Result<String> {
        let mut code = p(id)?;
        if let Some(name) = name {
            code.push_str(" as ");
            code.push_str(&p(name)?);
        }
        Ok(code)
    }
}
