//! Change notifications for task store consumers.
//!
//! # Responsibility
//! - Describe committed store mutations as `StoreEvent` values.
//! - Keep a registry of listeners keyed by `SubscriptionId`.
//!
//! # Invariants
//! - Listeners are invoked in subscription order.
//! - Events are emitted only for committed mutations, never for no-ops.

use crate::model::task::TaskId;
use std::collections::BTreeMap;

/// One committed mutation, with the position it touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    Added { id: TaskId, index: usize },
    Toggled { id: TaskId, index: usize, completed: bool },
    Deleted { id: TaskId, index: usize },
}

impl StoreEvent {
    pub fn task_id(&self) -> TaskId {
        match self {
            Self::Added { id, .. } | Self::Toggled { id, .. } | Self::Deleted { id, .. } => *id,
        }
    }

    /// Stable event name used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Added { .. } => "task_added",
            Self::Toggled { .. } => "task_toggled",
            Self::Deleted { .. } => "task_deleted",
        }
    }
}

/// Callback invoked after each committed mutation.
pub type TaskListener = Box<dyn Fn(&StoreEvent) + Send + Sync>;

/// Handle returned by `subscribe`, used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

#[derive(Default)]
pub(crate) struct Listeners {
    next_id: u64,
    entries: BTreeMap<SubscriptionId, TaskListener>,
}

impl Listeners {
    pub(crate) fn insert(&mut self, listener: TaskListener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.insert(id, listener);
        id
    }

    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        self.entries.remove(&id).is_some()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn notify(&self, event: &StoreEvent) {
        for listener in self.entries.values() {
            listener(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Listeners, StoreEvent};
    use std::sync::{Arc, Mutex};
    use uuid::Uuid;

    #[test]
    fn notify_reaches_listeners_in_subscription_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut listeners = Listeners::default();
        for tag in ["first", "second"] {
            let seen = Arc::clone(&seen);
            listeners.insert(Box::new(move |_event: &StoreEvent| {
                seen.lock().unwrap().push(tag);
            }));
        }

        listeners.notify(&StoreEvent::Added {
            id: Uuid::new_v4(),
            index: 0,
        });
        assert_eq!(*seen.lock().unwrap(), vec!["first", "second"]);
    }

    #[test]
    fn remove_is_reported_once() {
        let mut listeners = Listeners::default();
        let id = listeners.insert(Box::new(|_event: &StoreEvent| {}));
        assert_eq!(listeners.len(), 1);
        assert!(listeners.remove(id));
        assert!(!listeners.remove(id));
        assert_eq!(listeners.len(), 0);
    }
}
