//! `BTreeMap`-backed implementation of the [`Store`] trait.
//!
//! Entries are kept sorted by id, so pagination and inclusive range scans
//! walk the map in id order without collecting the whole structure. Saving a
//! record without an id runs the id allocator supplied at construction.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::ops::Bound;

use crate::error::{Result, StoreError};
use crate::traits::{HasId, Store};
use crate::watch::{WatcherHandle, Watchers};

/// Strategy that assigns a fresh id to an unsaved record.
///
/// Receives the current maximum id in the store (`None` when empty) and the
/// record, and returns the record carrying its new id. The canonical policy
/// is "max + 1, starting at a base value"; any deterministic policy works as
/// long as the returned record has an id.
pub type IdAllocator<K, V> = Box<dyn Fn(Option<&K>, V) -> V>;

/// An in-memory [`Store`] ordered by `K`'s `Ord`.
///
/// Single-threaded: interior mutability is `RefCell`, so all operations take
/// `&self` and watcher callbacks may re-enter the store (for example issue
/// another `save`) once the triggering mutation is applied. Mutating the
/// store from inside `ids`/`values`/`between` iteration is unsupported.
/// Callers sharing a store across threads must add their own exclusion layer
/// around the whole engine.
pub struct TreeStore<K, V> {
    /// Entries sorted by id from lowest to highest.
    id_to_value: RefCell<BTreeMap<K, V>>,
    id_allocator: IdAllocator<K, V>,
    save_watchers: Watchers<V>,
    delete_watchers: Watchers<K>,
}

impl<K, V> TreeStore<K, V>
where
    K: Ord + Clone + 'static,
    V: Clone + PartialEq + HasId<K> + 'static,
{
    /// Create an empty store with the given id allocation policy.
    pub fn new(id_allocator: impl Fn(Option<&K>, V) -> V + 'static) -> Self {
        Self {
            id_to_value: RefCell::new(BTreeMap::new()),
            id_allocator: Box::new(id_allocator),
            save_watchers: Watchers::new(),
            delete_watchers: Watchers::new(),
        }
    }

    /// Replace the entry at `id`, notifying save watchers only on change.
    fn update(&self, id: K, value: V) -> V {
        let previous = self.id_to_value.borrow_mut().insert(id, value.clone());
        if previous.as_ref() != Some(&value) {
            self.save_watchers.fire(&value);
        }
        value
    }

    /// Allocate an id for `value`, insert it, and notify save watchers.
    ///
    /// No attempt is made to avoid clashes: an allocator yielding an id that
    /// is already present overwrites that entry, exactly as an explicit
    /// update would.
    fn save_new(&self, value: V) -> Result<V> {
        let max = self.id_to_value.borrow().keys().next_back().cloned();
        let value = (self.id_allocator)(max.as_ref(), value);
        let id = match value.id() {
            Some(id) => id.clone(),
            None => return Err(StoreError::IdNotAllocated),
        };
        tracing::trace!("allocated id for unsaved record");
        self.id_to_value.borrow_mut().insert(id, value.clone());
        self.save_watchers.fire(&value);
        Ok(value)
    }
}

impl<K, V> Store<K, V> for TreeStore<K, V>
where
    K: Ord + Clone + 'static,
    V: Clone + PartialEq + HasId<K> + 'static,
{
    fn load(&self, id: &K) -> Option<V> {
        self.id_to_value.borrow().get(id).cloned()
    }

    fn save(&self, value: V) -> Result<V> {
        match value.id().cloned() {
            Some(id) => Ok(self.update(id, value)),
            None => self.save_new(value),
        }
    }

    fn delete(&self, id: &K) {
        let removed = self.id_to_value.borrow_mut().remove(id);
        if removed.is_some() {
            tracing::trace!("removed entry, notifying delete watchers");
            self.delete_watchers.fire(id);
        }
    }

    fn add_save_watcher(&self, watcher: Box<dyn Fn(&V)>) -> WatcherHandle {
        self.save_watchers.add(watcher)
    }

    fn add_delete_watcher(&self, watcher: Box<dyn Fn(&K)>) -> WatcherHandle {
        self.delete_watchers.add(watcher)
    }

    fn count(&self) -> usize {
        self.id_to_value.borrow().len()
    }

    fn ids(&self, offset: usize, limit: usize) -> Vec<K> {
        self.id_to_value
            .borrow()
            .keys()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect()
    }

    fn values(&self, offset: usize, limit: usize) -> Vec<V> {
        self.id_to_value
            .borrow()
            .values()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect()
    }

    fn between(&self, from: &K, to: &K) -> Vec<V> {
        // BTreeMap::range panics on an inverted range; the contract says
        // such a range is simply empty.
        if from > to {
            return Vec::new();
        }
        self.id_to_value
            .borrow()
            .range((Bound::Included(from), Bound::Included(to)))
            .map(|(_, value)| value.clone())
            .collect()
    }
}

// Lists values only, so keys need not be Debug.
impl<K, V: fmt::Debug> fmt::Debug for TreeStore<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.id_to_value.borrow().values())
            .finish()
    }
}
