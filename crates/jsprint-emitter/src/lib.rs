//! ESTree-to-JavaScript unparser.
//!
//! This crate renders a syntax tree produced by an external ECMAScript parser
//! back to source text:
//! - Node printer (`Printer`, one template per supported node kind)
//! - Indentation utility (`indent`, `indent_with`)
//! - Printer configuration (`PrintOptions`)
//! - Errors (`UnparseError`, `PrintJsonError`)
//!
//! Unsupported node kinds fail with `UnparseError::UnsupportedNodeKind`;
//! nothing is rendered partially.

use jsprint_ast::{Node, ParentMap, from_json_str};
use tracing::debug_span;

pub mod emitter;
pub use emitter::{Printer, Recurse};

pub mod error;
pub use error::{PrintJsonError, Result, UnparseError};

pub mod indent;
pub use indent::{INDENT_UNIT, indent, indent_with};

pub mod options;
pub use options::PrintOptions;

/// Render `root` with default options.
pub fn print(root: &Node) -> Result<String> {
    print_with_options(root, PrintOptions::default())
}

/// Render `root`. Parent links are computed once up front.
pub fn print_with_options(root: &Node, options: PrintOptions) -> Result<String> {
    let _span = debug_span!("print", root = root.kind()).entered();
    let parents = ParentMap::build(root);
    Printer::new(&parents, options).print(root)
}

/// Read an ESTree tree from JSON and render it with default options.
pub fn print_json(json: &str) -> Result<String, PrintJsonError> {
    print_json_with_options(json, PrintOptions::default())
}

pub fn print_json_with_options(json: &str, options: PrintOptions) -> Result<String, PrintJsonError> {
    let root = from_json_str(json)?;
    Ok(print_with_options(&root, options)?)
}

#[cfg(test)]
#[path = "tests/indent_tests.rs"]
mod indent_tests;
#[cfg(test)]
#[path = "tests/literals_tests.rs"]
mod literals_tests;
#[cfg(test)]
#[path = "tests/options_tests.rs"]
mod options_tests;
