//! Binary wire codecs for nodes, timestamps and records.
//!
//! # Responsibility
//! - Convert model values to and from the tagged binary wire format.
//! - Surface every decode failure as a typed `CodecError`.
//!
//! # Invariants
//! - Encoding is infallible and byte-exact for equal inputs.
//! - Decoding never panics and never returns a partially built value.
//! - No codec reads or writes process-wide state other than the logger.
//!
//! # See also
//! - `wire` for the message shapes and tag numbers.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod identifier;
pub(crate) mod iso8601;
pub mod record;
pub mod timestamp;
pub mod tree;
pub mod wire;

/// Result type used by codec decode operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Record field that failed to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordField {
    /// The outer record message itself.
    Message,
    /// Embedded root node.
    Node,
    /// Inline-string creation timestamp.
    CreatedAt,
    /// Embedded-message update timestamp.
    UpdatedAt,
}

impl RecordField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Message => "message",
            Self::Node => "node",
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
        }
    }
}

impl Display for RecordField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors from decode operations.
#[derive(Debug)]
pub enum CodecError {
    /// Identifier text is not a valid hex UUID.
    MalformedIdentifier {
        value: String,
        source: uuid::Error,
    },
    /// Timestamp text is not valid ISO-8601.
    MalformedTimestamp {
        value: String,
        reason: &'static str,
    },
    /// Bytes cannot be parsed as the expected message shape.
    MalformedTree(prost::DecodeError),
    /// Required embedded message is absent.
    MissingField(&'static str),
    /// Record decode failed in one field.
    MalformedRecord {
        field: RecordField,
        source: Box<CodecError>,
    },
}

impl CodecError {
    pub(crate) fn in_record(self, field: RecordField) -> Self {
        Self::MalformedRecord {
            field,
            source: Box::new(self),
        }
    }

    /// Stable short code for log lines.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MalformedIdentifier { .. } => "malformed_identifier",
            Self::MalformedTimestamp { .. } => "malformed_timestamp",
            Self::MalformedTree(_) => "malformed_tree",
            Self::MissingField(_) => "missing_field",
            Self::MalformedRecord { .. } => "malformed_record",
        }
    }
}

impl Display for CodecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedIdentifier { value, source } => {
                write!(f, "malformed identifier `{value}`: {source}")
            }
            Self::MalformedTimestamp { value, reason } => {
                write!(f, "malformed timestamp `{value}`: {reason}")
            }
            Self::MalformedTree(err) => write!(f, "malformed message: {err}"),
            Self::MissingField(name) => write!(f, "missing required field `{name}`"),
            Self::MalformedRecord { field, source } => {
                write!(f, "malformed record field `{field}`: {source}")
            }
        }
    }
}

impl Error for CodecError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::MalformedIdentifier { source, .. } => Some(source),
            Self::MalformedTimestamp { .. } => None,
            Self::MalformedTree(err) => Some(err),
            Self::MissingField(_) => None,
            Self::MalformedRecord { source, .. } => Some(source.as_ref()),
        }
    }
}

impl From<prost::DecodeError> for CodecError {
    fn from(value: prost::DecodeError) -> Self {
        Self::MalformedTree(value)
    }
}
