//! Lossless binary wire codecs for recursive node trees and named records.
//!
//! The wire format is protobuf-compatible (see [`codec::wire`]); timestamps
//! travel as ISO-8601 text with an explicit offset.

pub mod codec;
pub mod logging;
pub mod model;

pub use codec::identifier::{decode_id, encode_id};
pub use codec::record::{decode_object, encode_object};
pub use codec::timestamp::{
    decode_datetime, deserialize_datetime, encode_datetime, normalize, serialize_datetime,
};
pub use codec::tree::{decode_node, encode_node};
pub use codec::{CodecError, CodecResult, RecordField};
pub use logging::{default_log_level, init_logging, logging_status, LogTarget};
pub use model::clock::{Clock, FixedClock, SystemClock};
pub use model::node::{Node, NodeId};
pub use model::record::Record;
pub use model::timestamp::Timestamp;
