//! Recursive node tree model.
//!
//! # Responsibility
//! - Define the self-referential `Node` value carried inside every record.
//! - Provide constructors for fresh nodes and for decode/import paths.
//!
//! # Invariants
//! - `id` is assigned at construction and never changes afterwards.
//! - Child order is significant and preserved exactly.
//! - Children are owned exclusively by their parent, so cycles cannot exist.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for one tree node.
pub type NodeId = Uuid;

/// Tree node with an identifier and ordered children.
///
/// Equality is structural: ids must match and children must match pairwise,
/// in order, all the way down.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Node {
    id: NodeId,
    #[serde(default)]
    nodes: Vec<Node>,
}

impl Node {
    /// Creates a leaf node with a freshly generated id.
    pub fn new() -> Self {
        Self::with_id(Uuid::new_v4())
    }

    /// Creates a leaf node with a caller-provided id.
    pub fn with_id(id: NodeId) -> Self {
        Self::with_children(id, Vec::new())
    }

    /// Creates a node from an explicit id and already-built children.
    ///
    /// Used by the decode path, which builds leaves before their parents.
    pub fn with_children(id: NodeId, nodes: Vec<Node>) -> Self {
        Self { id, nodes }
    }

    /// Returns the node id.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns direct children in stored order.
    pub fn children(&self) -> &[Node] {
        &self.nodes
    }

    /// Returns whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Total number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.nodes.iter().map(Node::node_count).sum::<usize>()
    }

    /// Length of the longest root-to-leaf path; a leaf has depth 1.
    pub fn depth(&self) -> usize {
        1 + self.nodes.iter().map(Node::depth).max().unwrap_or(0)
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new()
    }
}
