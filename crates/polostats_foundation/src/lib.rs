//! Core identifiers, kinds, errors, and collections for polostats.
//!
//! This crate provides:
//! - [`RecordId`] - UUID-backed record identifiers
//! - [`EntityKind`] - Kind descriptors for the six record types
//! - [`Error`] - Error type for all store operations
//! - Collection aliases ([`IdMap`], [`RecordSet`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod collections;
mod error;
mod id;
mod kind;

pub use collections::{IdMap, RecordSet};
pub use error::{Error, Result};
pub use id::RecordId;
pub use kind::EntityKind;
