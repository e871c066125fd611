//! Timestamp normalization and its two wire surfaces.
//!
//! # Responsibility
//! - Normalize caller timestamps to an explicit offset before encoding.
//! - Render/parse the ISO-8601 text shared by both surfaces.
//! - Pack the text inline (record `created_at`) or inside a `DateTime`
//!   message (record `updated_at`, standalone codec).
//!
//! # Invariants
//! - Only offset-less values are coerced to UTC; resolved offsets are kept.
//! - Both surfaces apply the same normalization and rendering.
//! - Decoding keeps whatever offset was encoded.

use super::iso8601;
use super::wire::DateTimeMessage;
use super::{CodecError, CodecResult};
use crate::model::timestamp::Timestamp;
use chrono::{DateTime, FixedOffset, TimeZone, Timelike, Utc};
use log::{debug, warn};
use prost::Message;

const FORMAT_WHOLE_SECONDS: &str = "%Y-%m-%dT%H:%M:%S";
const FORMAT_MICROS: &str = "%Y-%m-%dT%H:%M:%S%.6f";
const FORMAT_NANOS: &str = "%Y-%m-%dT%H:%M:%S%.9f";
const OFFSET_MINUTES: &str = "%:z";
const OFFSET_SECONDS: &str = "%::z";

/// Resolves `value` to an explicit offset.
///
/// Offset-less values are taken as UTC wall-clock time. Values that already
/// carry an offset are returned unchanged.
pub fn normalize(value: &Timestamp) -> DateTime<FixedOffset> {
    match value {
        Timestamp::Naive(naive) => {
            debug!("event=timestamp_normalize module=codec status=ok reason=no_offset target=utc");
            Utc.from_utc_datetime(naive).fixed_offset()
        }
        Timestamp::Offset(resolved) => *resolved,
    }
}

/// Renders a normalized timestamp as ISO-8601 with `T` and an explicit offset.
///
/// The fraction is omitted when zero, six digits for whole microseconds and
/// nine digits otherwise. Offsets render as `+HH:MM` unless they carry
/// seconds.
pub fn format_iso(value: &DateTime<FixedOffset>) -> String {
    let nanos = value.nanosecond() % 1_000_000_000;
    let body = if nanos == 0 {
        FORMAT_WHOLE_SECONDS
    } else if nanos % 1_000 == 0 {
        FORMAT_MICROS
    } else {
        FORMAT_NANOS
    };
    let offset = if value.offset().local_minus_utc() % 60 == 0 {
        OFFSET_MINUTES
    } else {
        OFFSET_SECONDS
    };
    value.format(&format!("{body}{offset}")).to_string()
}

/// Inline-string surface: normalizes and renders `value`.
pub fn serialize_datetime(value: &Timestamp) -> String {
    format_iso(&normalize(value))
}

/// Inline-string surface: parses ISO-8601 text.
///
/// Text with an offset (or `Z`) yields `Timestamp::Offset` with that offset.
/// Well-formed text without an offset yields `Timestamp::Naive`; date-only
/// text is midnight. Every string `format_iso` renders parses back.
pub fn deserialize_datetime(text: &str) -> CodecResult<Timestamp> {
    let malformed = |reason| CodecError::MalformedTimestamp {
        value: text.to_string(),
        reason,
    };
    let parsed = iso8601::parse(text).map_err(malformed)?;
    match parsed.offset {
        None => Ok(Timestamp::Naive(parsed.local)),
        Some(offset) => offset
            .from_local_datetime(&parsed.local)
            .single()
            .map(Timestamp::Offset)
            .ok_or_else(|| malformed("instant is out of range")),
    }
}

/// Nested-message surface: wraps the rendered text in a `DateTime` message.
pub fn to_message(value: &Timestamp) -> DateTimeMessage {
    DateTimeMessage {
        value: serialize_datetime(value),
    }
}

/// Nested-message surface: reads the text out of a `DateTime` message.
pub fn from_message(message: &DateTimeMessage) -> CodecResult<Timestamp> {
    deserialize_datetime(&message.value)
}

/// Encodes one timestamp as a standalone `DateTime` message.
pub fn encode_datetime(value: &Timestamp) -> Vec<u8> {
    to_message(value).encode_to_vec()
}

/// Decodes a standalone `DateTime` message.
///
/// # Errors
/// - `MalformedTree` when the bytes are not a `DateTime` message.
/// - `MalformedTimestamp` when the embedded text is not ISO-8601.
pub fn decode_datetime(bytes: &[u8]) -> CodecResult<Timestamp> {
    let decoded = DateTimeMessage::decode(bytes)
        .map_err(CodecError::from)
        .and_then(|message| from_message(&message));
    match decoded {
        Ok(value) => {
            debug!(
                "event=datetime_decode module=codec status=ok bytes={}",
                bytes.len()
            );
            Ok(value)
        }
        Err(err) => {
            warn!(
                "event=datetime_decode module=codec status=error bytes={} error_code={}",
                bytes.len(),
                err.code()
            );
            Err(err)
        }
    }
}
