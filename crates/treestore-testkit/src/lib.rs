//! # treestore-testkit
//!
//! Testing utilities for `treestore`.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Fixtures**: a concrete `UserId`/`User` store instantiation with the
//!   canonical max+1 allocation policy, and a [`WatcherLog`] capture helper
//! - **Generators**: proptest strategies for property-based testing
//!
//! ## Fixtures
//!
//! ```rust
//! use treestore::Store;
//! use treestore_testkit::fixtures::{user_store, User, WatcherLog};
//!
//! let store = user_store();
//! let log = WatcherLog::new();
//! store.add_save_watcher(log.watcher());
//!
//! let saved = store.save(User::unsaved("a@example.com")).unwrap();
//! assert_eq!(log.fired(), vec![saved]);
//! ```
//!
//! ## Property Testing
//!
//! Use the generators with proptest:
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use treestore::Store;
//! use treestore_testkit::{fixtures::user_store, generators};
//!
//! proptest! {
//!     #[test]
//!     fn save_then_load(user in generators::saved_user()) {
//!         let store = user_store();
//!         let saved = store.save(user.clone()).unwrap();
//!         prop_assert_eq!(store.load(&user.id.unwrap()), Some(saved));
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;

pub use fixtures::{next_user_id, user_store, User, UserId, WatcherLog};
