//! Error types for store operations.
//!
//! Uses `thiserror` for ergonomic error definition. Every error is a local,
//! recoverable condition: a failed operation never leaves the store
//! partially mutated.

use thiserror::Error;

use crate::id::RecordId;
use crate::kind::EntityKind;

/// Result alias for store operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Insert supplied an id that is already present.
    #[error("duplicate id: {0}")]
    DuplicateId(RecordId),

    /// An operation named an id with no record behind it.
    #[error("record not found: {0}")]
    NotFound(RecordId),

    /// A reference field named a record that does not exist.
    #[error("dangling reference in `{field}`: {target}")]
    DanglingReference {
        /// The reference field that carried the bad id.
        field: &'static str,
        /// The id that resolved to nothing.
        target: RecordId,
    },

    /// A record or reference had a different kind than required.
    #[error("kind mismatch: expected {expected}, got {actual}")]
    KindMismatch {
        /// The kind the operation required.
        expected: EntityKind,
        /// The kind actually found.
        actual: EntityKind,
    },

    /// A second roster entry for the same (game, player) pair was rejected
    /// by policy.
    #[error("roster already exists for player {player} in game {game}")]
    DuplicateRoster {
        /// The game the roster belongs to.
        game: RecordId,
        /// The player already rostered.
        player: RecordId,
    },
}

impl Error {
    /// Creates a duplicate-id error.
    #[must_use]
    pub fn duplicate_id(id: RecordId) -> Self {
        Self::DuplicateId(id)
    }

    /// Creates a not-found error.
    #[must_use]
    pub fn not_found(id: RecordId) -> Self {
        Self::NotFound(id)
    }

    /// Creates a dangling-reference error.
    #[must_use]
    pub fn dangling(field: &'static str, target: RecordId) -> Self {
        Self::DanglingReference { field, target }
    }

    /// Creates a kind-mismatch error.
    #[must_use]
    pub fn kind_mismatch(expected: EntityKind, actual: EntityKind) -> Self {
        Self::KindMismatch { expected, actual }
    }
}
