//! Node identifier text codec.
//!
//! Wire form is the 32-character lowercase hex rendering, no hyphens.

use super::{CodecError, CodecResult};
use crate::model::node::NodeId;
use uuid::Uuid;

/// Renders `id` as 32 lowercase hex characters.
pub fn encode_id(id: NodeId) -> String {
    id.simple().to_string()
}

/// Parses hex UUID text, hyphenated or not.
pub fn decode_id(text: &str) -> CodecResult<NodeId> {
    Uuid::parse_str(text).map_err(|source| CodecError::MalformedIdentifier {
        value: text.to_string(),
        source,
    })
}
