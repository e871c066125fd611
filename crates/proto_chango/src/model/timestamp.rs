//! Caller-facing point-in-time value.
//!
//! # Responsibility
//! - Distinguish wall-clock values without offset from offset-resolved ones.
//! - Resolve named-zone local times to a fixed offset at construction.
//!
//! # Invariants
//! - `Offset` values compare by instant, not by offset or rendering.
//! - A `Naive` value never compares equal to an `Offset` value.
//! - Zone names are not retained; only the resolved offset survives.

use crate::codec::timestamp::{deserialize_datetime, serialize_datetime};
use crate::codec::CodecError;
use chrono::{DateTime, FixedOffset, LocalResult, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};

/// Point in time before wire normalization.
///
/// Serialized through serde as the same ISO-8601 text used on the wire.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Timestamp {
    /// Wall-clock time with no offset information.
    Naive(NaiveDateTime),
    /// Time with a resolved UTC offset.
    Offset(DateTime<FixedOffset>),
}

impl Timestamp {
    /// Resolves a wall-clock time in `tz` to a fixed offset.
    ///
    /// - Single mapping: keeps the zone offset at that instant.
    /// - Ambiguous mapping (clocks moved back): takes the earliest offset.
    /// - No mapping (clocks moved forward): the offset is indeterminate, so
    ///   the value stays `Naive` and is later coerced to UTC on encode.
    pub fn zoned<Tz: TimeZone>(local: NaiveDateTime, tz: &Tz) -> Self {
        match tz.from_local_datetime(&local) {
            LocalResult::Single(resolved) => Self::Offset(resolved.fixed_offset()),
            LocalResult::Ambiguous(earliest, _) => Self::Offset(earliest.fixed_offset()),
            LocalResult::None => Self::Naive(local),
        }
    }

    /// Returns the resolved offset, if any.
    pub fn offset(&self) -> Option<FixedOffset> {
        match self {
            Self::Naive(_) => None,
            Self::Offset(value) => Some(*value.offset()),
        }
    }

    /// Returns whether this value carries no offset information.
    pub fn is_naive(&self) -> bool {
        matches!(self, Self::Naive(_))
    }
}

impl PartialEq for Timestamp {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Naive(left), Self::Naive(right)) => left == right,
            (Self::Offset(left), Self::Offset(right)) => left == right,
            _ => false,
        }
    }
}

impl Eq for Timestamp {}

impl From<NaiveDateTime> for Timestamp {
    fn from(value: NaiveDateTime) -> Self {
        Self::Naive(value)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Timestamp {
    fn from(value: DateTime<Tz>) -> Self {
        Self::Offset(value.fixed_offset())
    }
}

impl From<Timestamp> for String {
    fn from(value: Timestamp) -> Self {
        serialize_datetime(&value)
    }
}

impl TryFrom<String> for Timestamp {
    type Error = CodecError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        deserialize_datetime(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::Timestamp;
    use chrono::{FixedOffset, NaiveDate, TimeZone, Utc};

    #[test]
    fn offset_values_compare_by_instant() {
        let utc = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let plus_two = FixedOffset::east_opt(2 * 3600)
            .unwrap()
            .with_ymd_and_hms(2024, 1, 1, 14, 0, 0)
            .unwrap();
        assert_eq!(Timestamp::from(utc), Timestamp::from(plus_two));
    }

    #[test]
    fn naive_never_equals_offset() {
        let naive = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let aware = Utc.from_utc_datetime(&naive);
        assert_ne!(Timestamp::from(naive), Timestamp::from(aware));
        assert!(Timestamp::from(naive).is_naive());
        assert_eq!(Timestamp::from(naive).offset(), None);
    }

    #[test]
    fn zoned_fixed_offset_keeps_offset() {
        let local = NaiveDate::from_ymd_opt(2024, 3, 31)
            .unwrap()
            .and_hms_opt(2, 30, 0)
            .unwrap();
        let fixed = FixedOffset::west_opt(7 * 3600).unwrap();
        assert_eq!(
            Timestamp::zoned(local, &fixed).offset(),
            Some(FixedOffset::west_opt(7 * 3600).unwrap())
        );
    }
}
