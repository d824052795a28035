//! Polostats - Water polo statistics entity store
//!
//! This crate re-exports all layers of the Polostats system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: polostats_storage    — Records, relation schema, entity store
//! Layer 0: polostats_foundation — Core types (RecordId, EntityKind, Error)
//! ```

pub use polostats_foundation as foundation;
pub use polostats_storage as storage;
