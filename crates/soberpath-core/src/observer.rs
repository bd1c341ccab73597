//! Subscriber registry shared by item stores and session controllers.
//!
//! Listeners are boxed callbacks keyed by a [`SubscriptionId`]. Notification
//! order is subscription order.

use serde::{Deserialize, Serialize};

/// Handle returned by `subscribe`, used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(u64);

pub struct Subscribers<L: ?Sized> {
    entries: Vec<(SubscriptionId, Box<L>)>,
    next_id: u64,
}

impl<L: ?Sized> Subscribers<L> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    pub fn add(&mut self, listener: Box<L>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    /// Returns `false` when the id was never registered or already removed.
    pub fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Box<L>> {
        self.entries.iter_mut().map(|(_, listener)| listener)
    }
}

impl<L: ?Sized> Default for Subscribers<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: ?Sized> std::fmt::Debug for Subscribers<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscribers")
            .field("count", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Listener = dyn FnMut(u32);

    #[test]
    fn ids_are_unique_and_removal_is_idempotent() {
        let mut subs: Subscribers<Listener> = Subscribers::new();
        let a = subs.add(Box::new(|_| {}));
        let b = subs.add(Box::new(|_| {}));
        assert_ne!(a, b);
        assert_eq!(subs.len(), 2);

        assert!(subs.remove(a));
        assert!(!subs.remove(a));
        assert_eq!(subs.len(), 1);
    }

    #[test]
    fn iter_mut_calls_in_subscription_order() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let log = Rc::new(RefCell::new(Vec::new()));
        let mut subs: Subscribers<Listener> = Subscribers::new();
        for tag in ["first", "second"] {
            let log = Rc::clone(&log);
            subs.add(Box::new(move |n| log.borrow_mut().push(format!("{tag}:{n}"))));
        }
        for listener in subs.iter_mut() {
            listener(7);
        }
        assert_eq!(*log.borrow(), vec!["first:7", "second:7"]);
    }
}
