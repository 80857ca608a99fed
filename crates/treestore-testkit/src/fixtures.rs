//! Test fixtures and helpers.
//!
//! A concrete `UserId`/`User` instantiation of the store, plus a capture
//! helper for asserting on watcher notifications.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use treestore::{HasId, TreeStore};

/// Ordered id newtype used by the test fixtures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UserId(pub u32);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A record with an optional id and an email payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Option<UserId>,
    pub email: String,
}

impl User {
    /// A user that has not been saved yet (no id).
    pub fn unsaved(email: &str) -> Self {
        Self {
            id: None,
            email: email.to_string(),
        }
    }

    /// A user addressed by `id`.
    pub fn with_id(id: u32, email: &str) -> Self {
        Self {
            id: Some(UserId(id)),
            email: email.to_string(),
        }
    }
}

impl HasId<UserId> for User {
    fn id(&self) -> Option<&UserId> {
        self.id.as_ref()
    }
}

/// The canonical allocation policy: next id above the current maximum,
/// starting at 1 when the store is empty.
pub fn next_user_id(max: Option<&UserId>, user: User) -> User {
    User {
        id: Some(UserId(max.map_or(1, |id| id.0 + 1))),
        ..user
    }
}

/// An empty user store with the [`next_user_id`] policy.
pub fn user_store() -> TreeStore<UserId, User> {
    TreeStore::new(next_user_id)
}

/// Captures values delivered to a watcher so tests can assert on them.
///
/// Clones share the same underlying log.
#[derive(Debug, Clone)]
pub struct WatcherLog<T> {
    fired: Rc<RefCell<Vec<T>>>,
}

impl<T: Clone + 'static> WatcherLog<T> {
    /// Create an empty log.
    pub fn new() -> Self {
        Self {
            fired: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// A watcher callback that appends every delivered value to this log.
    pub fn watcher(&self) -> Box<dyn Fn(&T)> {
        let fired = Rc::clone(&self.fired);
        Box::new(move |value: &T| fired.borrow_mut().push(value.clone()))
    }

    /// Everything delivered so far, in delivery order.
    pub fn fired(&self) -> Vec<T> {
        self.fired.borrow().clone()
    }

    /// Number of deliveries so far.
    pub fn len(&self) -> usize {
        self.fired.borrow().len()
    }

    /// Whether nothing has been delivered yet.
    pub fn is_empty(&self) -> bool {
        self.fired.borrow().is_empty()
    }
}

impl<T: Clone + 'static> Default for WatcherLog<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use treestore::Store;

    use super::*;

    #[test]
    fn test_next_user_id_from_empty() {
        let allocated = next_user_id(None, User::unsaved("a@example.com"));
        assert_eq!(allocated, User::with_id(1, "a@example.com"));
    }

    #[test]
    fn test_next_user_id_above_max() {
        let allocated = next_user_id(Some(&UserId(334)), User::unsaved("a@example.com"));
        assert_eq!(allocated, User::with_id(335, "a@example.com"));
    }

    #[test]
    fn test_watcher_log_captures_saves() {
        let store = user_store();
        let log = WatcherLog::new();
        store.add_save_watcher(log.watcher());

        let saved = store.save(User::unsaved("a@example.com")).unwrap();
        assert_eq!(log.fired(), vec![saved]);
    }
}
