//! Thread-safe store handle.
//!
//! Wraps an [`EntityStore`] in a readers-writer lock so any number of
//! readers proceed in parallel while writers get exclusive access. A
//! poisoned lock is recovered rather than propagated: mutations are
//! validate-then-commit, so a panicking writer cannot leave the store
//! half-updated.

use std::sync::{Arc, PoisonError, RwLock};

use crate::store::EntityStore;

/// A cloneable, thread-safe handle to one store.
#[derive(Clone, Debug, Default)]
pub struct SharedStore {
    inner: Arc<RwLock<EntityStore>>,
}

impl SharedStore {
    /// Wraps a fresh empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing store.
    #[must_use]
    pub fn from_store(store: EntityStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    /// Runs a closure against a shared read guard.
    pub fn read<T>(&self, f: impl FnOnce(&EntityStore) -> T) -> T {
        let guard = self
            .inner
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    /// Runs a closure against an exclusive write guard.
    pub fn write<T>(&self, f: impl FnOnce(&mut EntityStore) -> T) -> T {
        let mut guard = self
            .inner
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    /// A point-in-time copy of the store. O(1) thanks to structural
    /// sharing; the snapshot never observes later writes.
    #[must_use]
    pub fn snapshot(&self) -> EntityStore {
        self.read(EntityStore::clone)
    }
}

impl From<EntityStore> for SharedStore {
    fn from(store: EntityStore) -> Self {
        Self::from_store(store)
    }
}
