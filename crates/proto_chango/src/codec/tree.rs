//! Recursive node tree codec.
//!
//! # Responsibility
//! - Map `Node` trees to `NodeMessage` trees and back.
//! - Encode/decode standalone `Node` messages.
//!
//! # Invariants
//! - Child order is preserved exactly in both directions.
//! - Decode builds children before their parent and only ever creates new
//!   nodes, so the result cannot contain cycles.
//! - Recursion depth equals tree depth; callers bound untrusted input.

use super::identifier::{decode_id, encode_id};
use super::wire::NodeMessage;
use super::{CodecError, CodecResult};
use crate::model::node::Node;
use log::{debug, warn};
use prost::Message;

/// Converts a node tree to its wire message, depth-first.
pub fn to_message(node: &Node) -> NodeMessage {
    NodeMessage {
        id: encode_id(node.id()),
        nodes: node.children().iter().map(to_message).collect(),
    }
}

/// Converts a wire message tree to a node tree.
///
/// # Errors
/// - `MalformedIdentifier` for the first invalid id found in pre-order.
pub fn from_message(message: &NodeMessage) -> CodecResult<Node> {
    let id = decode_id(&message.id)?;
    let nodes = message
        .nodes
        .iter()
        .map(from_message)
        .collect::<CodecResult<Vec<_>>>()?;
    Ok(Node::with_children(id, nodes))
}

/// Encodes a node tree as a standalone `Node` message.
pub fn encode_node(node: &Node) -> Vec<u8> {
    to_message(node).encode_to_vec()
}

/// Decodes a standalone `Node` message.
///
/// # Errors
/// - `MalformedTree` when the bytes are not a `Node` message.
/// - `MalformedIdentifier` when any id in the tree is invalid.
pub fn decode_node(bytes: &[u8]) -> CodecResult<Node> {
    let decoded = NodeMessage::decode(bytes)
        .map_err(CodecError::from)
        .and_then(|message| from_message(&message));
    match decoded {
        Ok(node) => {
            debug!(
                "event=node_decode module=codec status=ok bytes={} nodes={}",
                bytes.len(),
                node.node_count()
            );
            Ok(node)
        }
        Err(err) => {
            warn!(
                "event=node_decode module=codec status=error bytes={} error_code={}",
                bytes.len(),
                err.code()
            );
            Err(err)
        }
    }
}
