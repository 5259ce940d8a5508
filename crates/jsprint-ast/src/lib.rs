//! ESTree syntax tree model for the jsprint unparser.
//!
//! This crate provides the input side of the unparser:
//! - The node model (`Node`, a closed sum type over supported ESTree kinds)
//! - ESTree JSON ingestion (`from_json_str`, `from_json_value`)
//! - Builder helpers for constructing trees in code
//! - Parent lookup (`ParentLookup`, `ParentMap`, `NoParents`)

pub mod node;
pub use node::{Children, LiteralValue, Node, PropertyKind, RegexLiteral, VariableKind};

// JSON ingestion for parser output
pub mod json;
pub use json::{from_json_str, from_json_value};

mod builders;

// Parent side-table
pub mod parents;
pub use parents::{NoParents, ParentLookup, ParentMap};

#[cfg(test)]
#[path = "tests/node_tests.rs"]
mod node_tests;
#[cfg(test)]
#[path = "tests/parents_tests.rs"]
mod parents_tests;
