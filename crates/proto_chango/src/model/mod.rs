//! In-memory domain model.
//!
//! # Responsibility
//! - Define the recursive `Node` tree and the `Record` that roots it.
//! - Define the pre-normalization `Timestamp` and the injectable `Clock`.
//!
//! # Invariants
//! - Values are immutable after construction.
//! - Ownership is strictly hierarchical: record -> root node -> children.

pub mod clock;
pub mod node;
pub mod record;
pub mod timestamp;
