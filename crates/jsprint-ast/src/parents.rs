//! Parent lookup.
//!
//! Nodes carry no back-references. Code that needs ancestry asks a
//! [`ParentLookup`]; [`ParentMap`] answers from a side-table built in one pass
//! over the tree, keyed by node address.

use rustc_hash::FxHashMap;
use std::ptr;
use tracing::trace;

use crate::node::Node;

/// Finds the syntactic parent of a node.
pub trait ParentLookup {
    /// The parent of `node`, or `None` for the root or a node outside the tree.
    fn parent_of(&self, node: &Node) -> Option<&Node>;
}

/// A lookup that knows no parents. Every node is treated as a root.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoParents;

impl ParentLookup for NoParents {
    fn parent_of(&self, _node: &Node) -> Option<&Node> {
        None
    }
}

/// Parent side-table for one tree.
///
/// Entries are keyed by the child's address, so lookups only make sense for
/// node references borrowed from the same `root` the map was built from.
#[derive(Debug, Default)]
pub struct ParentMap<'a> {
    parents: FxHashMap<*const Node, &'a Node>,
}

impl<'a> ParentMap<'a> {
    pub fn build(root: &'a Node) -> Self {
        let mut parents = FxHashMap::default();
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            node.for_each_child(|child| {
                parents.insert(ptr::from_ref(child), node);
                stack.push(child);
            });
        }
        trace!(entries = parents.len(), "built parent map");
        Self { parents }
    }

    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }
}

impl ParentLookup for ParentMap<'_> {
    fn parent_of(&self, node: &Node) -> Option<&Node> {
        self.parents.get(&ptr::from_ref(node)).copied()
    }
}
