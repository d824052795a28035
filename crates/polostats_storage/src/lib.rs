//! Records, relation schema, and the entity store for Polostats.
//!
//! This crate provides:
//! - [`model`] - The six record kinds and their builders
//! - [`schema`] - Relation declarations and deletion rules
//! - [`patch`] - Field-level updates with reference reassignment
//! - [`EntityStore`] - Referential-integrity engine with cascade deletion
//! - [`SharedStore`] - Readers-writer handle for concurrent use

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod model;
pub mod patch;
pub mod query;
pub mod schema;
pub mod shared;
pub mod store;

pub use model::{
    EventType, Game, GameEvent, GameRoster, GameStatus, Player, Record, Season, Team,
};
pub use patch::{
    GameEventPatch, GamePatch, GameRosterPatch, Patch, PlayerPatch, SeasonPatch, TeamPatch,
};
pub use schema::{OnDelete, RefField, Relation, RelationKind, StorePolicy};
pub use shared::SharedStore;
pub use store::EntityStore;
