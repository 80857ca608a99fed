//! # treestore
//!
//! An in-memory, order-preserving store: records addressed by a unique,
//! totally ordered id, with automatic id allocation, paginated and
//! range-bounded read views, and synchronous watcher notification on
//! mutation.
//!
//! ## Overview
//!
//! Callers program against the [`Store`] trait; [`TreeStore`] is the
//! provided implementation, backed by a `BTreeMap` sorted by id. A record
//! type declares how its id is read via [`HasId`]; records saved without an
//! id receive one from the allocation policy supplied at construction.
//! Save and delete watchers are held in two independent [`Watchers`]
//! registries and fire inline after a mutation actually changed something.
//!
//! ## Key Types
//!
//! - [`Store`] - trait every store variant satisfies, with derived
//!   operations (`first_id`, `first_value`, `all`) built on the primitives
//! - [`TreeStore`] - the `BTreeMap`-backed engine
//! - [`HasId`] - a record's capability to report its current id
//! - [`Watchers`] / [`WatcherHandle`] - fan-out notification and per-watcher
//!   cancellation
//! - [`StoreError`] - `NotFound` and allocator-contract failures
//!
//! ## Usage
//!
//! ```rust
//! use treestore::{HasId, Store, TreeStore};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Note {
//!     id: Option<u32>,
//!     text: String,
//! }
//!
//! impl HasId<u32> for Note {
//!     fn id(&self) -> Option<&u32> {
//!         self.id.as_ref()
//!     }
//! }
//!
//! // Allocate the next id above the current maximum, starting at 1.
//! let store = TreeStore::new(|max: Option<&u32>, note: Note| Note {
//!     id: Some(max.map_or(1, |max| max + 1)),
//!     ..note
//! });
//!
//! let saved = store.save(Note { id: None, text: "hello".into() }).unwrap();
//! assert_eq!(saved.id, Some(1));
//! assert_eq!(store.count(), 1);
//! ```
//!
//! ## Design Notes
//!
//! - **Change detection**: saving a value equal to what is already stored at
//!   its id fires no save watcher; a brand-new entry always fires
//! - **Single logical writer**: the engine is a sequential data structure
//!   with no internal locking; watcher callbacks run inline and may re-enter
//!   the store. Shared multi-threaded access needs an external lock around
//!   the whole engine
//! - **No persistence**: everything lives in memory for the lifetime of the
//!   store instance

pub mod error;
pub mod traits;
pub mod tree;
pub mod watch;

pub use error::{Result, StoreError};
pub use traits::{HasId, Store};
pub use tree::{IdAllocator, TreeStore};
pub use watch::{WatcherHandle, Watchers};
