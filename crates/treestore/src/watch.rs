//! Watcher registry: synchronous fan-out notification.
//!
//! A [`Watchers`] holds an ordered list of callbacks. Registering a callback
//! returns a [`WatcherHandle`] that cancels that one registration without
//! affecting any other. Firing invokes every live callback in registration
//! order, on the caller's thread.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Cancellation handle returned by [`Watchers::add`].
///
/// Calling [`cancel`](WatcherHandle::cancel) marks the registration dead so
/// it receives no further notifications. Cancelling twice has no additional
/// effect. Dropping the handle without cancelling leaves the watcher live
/// for the lifetime of the registry.
#[derive(Debug)]
pub struct WatcherHandle {
    live: Rc<Cell<bool>>,
}

impl WatcherHandle {
    /// Stop the watcher from receiving further notifications. Idempotent.
    pub fn cancel(&self) {
        self.live.set(false);
    }

    /// Whether this registration has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        !self.live.get()
    }
}

struct WatcherEntry<T> {
    callback: Rc<dyn Fn(&T)>,
    live: Rc<Cell<bool>>,
}

/// An ordered registry of callbacks notified on [`fire`](Watchers::fire).
///
/// Single-threaded: the registry holds no locks, and callbacks run inline on
/// the firing thread. A callback may re-enter the registry (registering or
/// cancelling watchers) while a fire pass is in progress.
pub struct Watchers<T> {
    entries: RefCell<Vec<WatcherEntry<T>>>,
}

impl<T> Watchers<T> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: RefCell::new(Vec::new()),
        }
    }

    /// Register a callback, returning its cancellation handle.
    ///
    /// Entries cancelled earlier are pruned here, so a long-lived registry
    /// does not accumulate dead slots.
    pub fn add(&self, callback: impl Fn(&T) + 'static) -> WatcherHandle {
        let live = Rc::new(Cell::new(true));
        let mut entries = self.entries.borrow_mut();
        entries.retain(|entry| entry.live.get());
        entries.push(WatcherEntry {
            callback: Rc::new(callback),
            live: Rc::clone(&live),
        });
        WatcherHandle { live }
    }

    /// Invoke every live callback with `value`, in registration order.
    ///
    /// The live set is snapshotted before the first invocation: callbacks
    /// registered or cancelled during the pass do not change which callbacks
    /// this pass invokes.
    pub fn fire(&self, value: &T) {
        let snapshot: Vec<Rc<dyn Fn(&T)>> = self
            .entries
            .borrow()
            .iter()
            .filter(|entry| entry.live.get())
            .map(|entry| Rc::clone(&entry.callback))
            .collect();
        for callback in snapshot {
            callback(value);
        }
    }

    /// Number of live registrations.
    pub fn len(&self) -> usize {
        self.entries
            .borrow()
            .iter()
            .filter(|entry| entry.live.get())
            .count()
    }

    /// Whether no live registrations remain.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Default for Watchers<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder(fired: &Rc<RefCell<Vec<i32>>>) -> impl Fn(&i32) + 'static {
        let fired = Rc::clone(fired);
        move |value| fired.borrow_mut().push(*value)
    }

    #[test]
    fn test_fire_invokes_in_registration_order() {
        let watchers = Watchers::new();
        let fired = Rc::new(RefCell::new(Vec::new()));

        let order = Rc::clone(&fired);
        let _a = watchers.add(move |value: &i32| order.borrow_mut().push(*value * 10));
        let _b = watchers.add(recorder(&fired));

        watchers.fire(&7);
        assert_eq!(*fired.borrow(), vec![70, 7]);
    }

    #[test]
    fn test_cancel_stops_future_notifications() {
        let watchers = Watchers::new();
        let fired = Rc::new(RefCell::new(Vec::new()));

        let handle = watchers.add(recorder(&fired));
        watchers.fire(&1);
        handle.cancel();
        watchers.fire(&2);

        assert_eq!(*fired.borrow(), vec![1]);
        assert!(handle.is_cancelled());
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let watchers = Watchers::new();
        let fired = Rc::new(RefCell::new(Vec::new()));

        let handle = watchers.add(recorder(&fired));
        handle.cancel();
        handle.cancel();
        watchers.fire(&1);

        assert!(fired.borrow().is_empty());
    }

    #[test]
    fn test_cancel_only_affects_own_entry() {
        let watchers = Watchers::new();
        let fired = Rc::new(RefCell::new(Vec::new()));

        let first = watchers.add(recorder(&fired));
        let _second = watchers.add(recorder(&fired));
        first.cancel();
        watchers.fire(&3);

        assert_eq!(*fired.borrow(), vec![3]);
        assert_eq!(watchers.len(), 1);
    }

    #[test]
    fn test_cancel_during_fire_does_not_affect_current_pass() {
        let watchers: Rc<Watchers<i32>> = Rc::new(Watchers::new());
        let fired = Rc::new(RefCell::new(Vec::new()));

        let later: Rc<RefCell<Option<WatcherHandle>>> = Rc::new(RefCell::new(None));
        {
            let later = Rc::clone(&later);
            watchers.add(move |_: &i32| {
                if let Some(handle) = later.borrow().as_ref() {
                    handle.cancel();
                }
            });
        }
        *later.borrow_mut() = Some(watchers.add(recorder(&fired)));

        // First callback cancels the second mid-pass; the second still sees
        // this value since the pass snapshotted both.
        watchers.fire(&5);
        assert_eq!(*fired.borrow(), vec![5]);

        watchers.fire(&6);
        assert_eq!(*fired.borrow(), vec![5]);
    }

    #[test]
    fn test_add_during_fire_does_not_join_current_pass() {
        let watchers: Rc<Watchers<i32>> = Rc::new(Watchers::new());
        let fired = Rc::new(RefCell::new(Vec::new()));

        {
            let registry = Rc::clone(&watchers);
            let log = Rc::clone(&fired);
            let added = Cell::new(false);
            watchers.add(move |value: &i32| {
                log.borrow_mut().push(*value);
                if !added.get() {
                    added.set(true);
                    let log = Rc::clone(&log);
                    // Registered mid-pass; must not run for this value.
                    registry.add(move |value: &i32| log.borrow_mut().push(*value + 100));
                }
            });
        }

        watchers.fire(&1);
        assert_eq!(*fired.borrow(), vec![1]);

        watchers.fire(&2);
        assert_eq!(*fired.borrow(), vec![1, 2, 102]);
    }

    #[test]
    fn test_dead_entries_pruned_on_add() {
        let watchers: Watchers<i32> = Watchers::new();
        let handle = watchers.add(|_| {});
        handle.cancel();
        let _live = watchers.add(|_| {});
        assert_eq!(watchers.entries.borrow().len(), 1);
    }
}
