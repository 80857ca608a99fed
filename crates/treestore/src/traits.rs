//! Store trait: the abstract interface every store variant satisfies.
//!
//! The trait is parameterized over an identifier type `K` with a total order
//! and a record type `V` from which an identifier can be read ([`HasId`]).
//! Callers program against this trait; [`TreeStore`](crate::TreeStore) is
//! the provided implementation.

use std::fmt;

use crate::error::{Result, StoreError};
use crate::watch::WatcherHandle;

/// Capability of a record to report its current identifier.
///
/// A record returning `None` is unsaved; saving it causes the store to
/// allocate an identifier. A record returning `Some` is addressable and is
/// stored (or overwritten) at that identifier.
pub trait HasId<K> {
    /// The record's current identifier, if it has one.
    fn id(&self) -> Option<&K>;
}

/// A store that holds records addressed by a unique, totally ordered id.
///
/// All operations are synchronous and run to completion; watcher callbacks
/// execute inline on the caller's thread after the mutation is applied.
///
/// # Design Notes
///
/// - **Change detection**: `save` of a value equal to what is already stored
///   at its id does not notify save watchers.
/// - **Two range shapes**: `ids`/`values` paginate by position
///   (offset + limit); `between` scans an inclusive id range. They serve
///   different callers and are deliberately not unified.
/// - **Ordering**: iteration order is always id order, never insertion
///   order. Alternative orders (e.g. case-insensitive strings) are expressed
///   as newtype ids with a custom `Ord`.
pub trait Store<K, V> {
    // ─────────────────────────────────────────────────────────────────────────
    // Record Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Fetch the record stored at `id`, if any.
    fn load(&self, id: &K) -> Option<V>;

    /// Fetch the record stored at `id`, failing with
    /// [`StoreError::NotFound`] when absent.
    fn load_or_fail(&self, id: &K) -> Result<V>
    where
        K: fmt::Display,
    {
        self.load(id).ok_or_else(|| StoreError::not_found(id))
    }

    /// Save or update a record, returning the stored record.
    ///
    /// For a record without an id the returned record differs from the input
    /// by carrying the newly allocated id.
    fn save(&self, value: V) -> Result<V>;

    /// Delete the record stored at `id`. No-op when absent.
    fn delete(&self, id: &K);

    // ─────────────────────────────────────────────────────────────────────────
    // Watchers
    // ─────────────────────────────────────────────────────────────────────────

    /// Register a watcher fired with each record after a changing save.
    ///
    /// Saving a value equal to what was already stored at its id fires no
    /// notification; a brand-new entry always fires.
    fn add_save_watcher(&self, watcher: Box<dyn Fn(&V)>) -> WatcherHandle;

    /// Register a watcher fired with each id after an actual deletion.
    fn add_delete_watcher(&self, watcher: Box<dyn Fn(&K)>) -> WatcherHandle;

    // ─────────────────────────────────────────────────────────────────────────
    // Range Queries
    // ─────────────────────────────────────────────────────────────────────────

    /// Total number of stored records.
    fn count(&self) -> usize;

    /// Up to `limit` ids in ascending order, skipping the first `offset`.
    fn ids(&self, offset: usize, limit: usize) -> Vec<K>;

    /// Up to `limit` records in ascending id order, skipping the first
    /// `offset`.
    fn values(&self, offset: usize, limit: usize) -> Vec<V>;

    /// All records with ids in `[from, to]` inclusive, in ascending order.
    ///
    /// Empty (not an error) when `from > to` or no ids fall in the range.
    fn between(&self, from: &K, to: &K) -> Vec<V>;

    // ─────────────────────────────────────────────────────────────────────────
    // Derived Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// The smallest id, or `None` when the store is empty.
    fn first_id(&self) -> Option<K> {
        self.ids(0, 1).into_iter().next()
    }

    /// The record with the smallest id, or `None` when the store is empty.
    fn first_value(&self) -> Option<V> {
        self.first_id().and_then(|id| self.load(&id))
    }

    /// Every record in the store, in ascending id order.
    fn all(&self) -> Vec<V> {
        self.values(0, usize::MAX)
    }
}
