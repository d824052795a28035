//! Collection aliases over persistent data structures.
//!
//! The store keeps its arena and reverse indices in `im`'s ordered maps and
//! sets. Cloning is O(1) with structural sharing, so a caller can take a
//! consistent snapshot of the whole store for free, and ordered iteration
//! keeps cascade walks and query output deterministic.

use crate::id::RecordId;

/// Ordered map keyed by record id.
pub type IdMap<V> = im::OrdMap<RecordId, V>;

/// Ordered set of record ids.
pub type RecordSet = im::OrdSet<RecordId>;
