//! Record codec composing the tree and timestamp codecs.
//!
//! # Responsibility
//! - Encode a `Record` as one `Object` message with the root node embedded.
//! - Decode every field explicitly; nothing is defaulted on the way back.
//!
//! # Invariants
//! - `created_at` uses the inline-string surface, `updated_at` the
//!   nested-message surface; both share one normalization.
//! - Every decode failure is reported as `MalformedRecord` naming the field.

use super::wire::ObjectMessage;
use super::{timestamp, tree, CodecError, CodecResult, RecordField};
use crate::model::record::Record;
use log::{debug, warn};
use prost::Message;

/// Converts a record to its wire message.
pub fn to_message(record: &Record) -> ObjectMessage {
    ObjectMessage {
        node: Some(tree::to_message(record.node())),
        name: record.name().to_string(),
        created_at: timestamp::serialize_datetime(record.created_at()),
        updated_at: Some(timestamp::to_message(record.updated_at())),
    }
}

/// Converts a wire message to a record.
///
/// # Errors
/// - `MalformedRecord` with the failing field and the nested cause.
pub fn from_message(message: ObjectMessage) -> CodecResult<Record> {
    let node = message
        .node
        .as_ref()
        .ok_or(CodecError::MissingField("node"))
        .and_then(tree::from_message)
        .map_err(|err| err.in_record(RecordField::Node))?;
    let created_at = timestamp::deserialize_datetime(&message.created_at)
        .map_err(|err| err.in_record(RecordField::CreatedAt))?;
    let updated_at = message
        .updated_at
        .as_ref()
        .ok_or(CodecError::MissingField("updated_at"))
        .and_then(timestamp::from_message)
        .map_err(|err| err.in_record(RecordField::UpdatedAt))?;
    Ok(Record::with_timestamps(
        message.name,
        node,
        created_at,
        updated_at,
    ))
}

/// Encodes a record as an `Object` message.
pub fn encode_object(record: &Record) -> Vec<u8> {
    to_message(record).encode_to_vec()
}

/// Decodes an `Object` message.
///
/// # Errors
/// - `MalformedRecord { field: Message, .. }` when the bytes do not parse.
/// - `MalformedRecord { field: Node | CreatedAt | UpdatedAt, .. }` when one
///   field is missing or invalid.
pub fn decode_object(bytes: &[u8]) -> CodecResult<Record> {
    let decoded = ObjectMessage::decode(bytes)
        .map_err(|err| CodecError::from(err).in_record(RecordField::Message))
        .and_then(from_message);
    match decoded {
        Ok(record) => {
            debug!(
                "event=object_decode module=codec status=ok bytes={} nodes={}",
                bytes.len(),
                record.node().node_count()
            );
            Ok(record)
        }
        Err(err) => {
            let field = match &err {
                CodecError::MalformedRecord { field, .. } => field.as_str(),
                _ => "unknown",
            };
            warn!(
                "event=object_decode module=codec status=error bytes={} field={} error_code={}",
                bytes.len(),
                field,
                err.code()
            );
            Err(err)
        }
    }
}
