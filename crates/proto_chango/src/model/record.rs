//! Named record wrapping one node tree.
//!
//! # Responsibility
//! - Own a root `Node` together with a name and two timestamps.
//! - Stamp creation/update time from an injectable clock.
//!
//! # Invariants
//! - The root node is owned exclusively by the record.
//! - `created_at` and `updated_at` are independent fields.
//! - Records are immutable after construction.

use super::clock::{Clock, SystemClock};
use super::node::Node;
use super::timestamp::Timestamp;
use serde::{Deserialize, Serialize};

/// Named entity with a root node and creation/update timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: String,
    node: Node,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Record {
    /// Creates a record stamped with the current system time.
    pub fn new(name: impl Into<String>, node: Node) -> Self {
        Self::with_clock(name, node, &SystemClock)
    }

    /// Creates a record stamped from `clock`.
    ///
    /// The clock is read once; both timestamps receive the same instant.
    pub fn with_clock(name: impl Into<String>, node: Node, clock: &impl Clock) -> Self {
        let now = Timestamp::from(clock.now());
        Self::with_timestamps(name, node, now, now)
    }

    /// Creates a record with explicit timestamps.
    ///
    /// Used by the decode path, where every field comes from the wire.
    pub fn with_timestamps(
        name: impl Into<String>,
        node: Node,
        created_at: impl Into<Timestamp>,
        updated_at: impl Into<Timestamp>,
    ) -> Self {
        Self {
            name: name.into(),
            node,
            created_at: created_at.into(),
            updated_at: updated_at.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn node(&self) -> &Node {
        &self.node
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }
}
