//! Task store: the only mutator of the task sequence.
//!
//! # Responsibility
//! - Apply add/toggle/delete with the silent no-op policy.
//! - Publish committed mutations to subscribers and bump `revision`.
//!
//! # Invariants
//! - Ids are unique across every task this store has held.
//! - Blank titles never produce a task.
//! - Toggle replaces the record in place; callers never see a partial update.
//! - Unknown ids never raise errors.

use crate::model::task::{is_blank, Task, TaskId, TaskPriority};
use crate::repo::task_repo::{InMemoryTaskRepository, TaskRepository};
use crate::service::seed::sample_tasks;
use crate::service::subscription::{Listeners, StoreEvent, SubscriptionId, TaskListener};
use crate::view::projection::TaskStatistics;
use chrono::Utc;
use log::debug;
use std::collections::HashSet;
use uuid::Uuid;

/// Owner of the authoritative task sequence.
///
/// Built once by the host and handed to every consumer; there is no ambient
/// instance.
pub struct TaskStore<R: TaskRepository = InMemoryTaskRepository> {
    repo: R,
    listeners: Listeners,
    issued_ids: HashSet<TaskId>,
    revision: u64,
}

impl TaskStore<InMemoryTaskRepository> {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        Self::with_repository(InMemoryTaskRepository::new())
    }

    /// Creates an in-memory store holding the sample tasks.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        for task in sample_tasks() {
            store.issued_ids.insert(task.id());
            store.repo.append(task);
        }
        debug!(
            "event=store_seeded module=store status=ok count={}",
            store.repo.len()
        );
        store
    }
}

impl Default for TaskStore<InMemoryTaskRepository> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: TaskRepository> TaskStore<R> {
    /// Wraps an existing repository. Tasks already held count as issued ids.
    pub fn with_repository(repo: R) -> Self {
        let issued_ids = repo.as_slice().iter().map(Task::id).collect();
        Self {
            repo,
            listeners: Listeners::default(),
            issued_ids,
            revision: 0,
        }
    }

    /// Appends a new incomplete task.
    ///
    /// Returns the new id, or `None` when `title` is blank. A blank title is
    /// not an error: nothing is created and no event is published.
    pub fn add(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        priority: TaskPriority,
    ) -> Option<TaskId> {
        let title = title.into();
        if is_blank(&title) {
            debug!("event=task_add module=store status=skipped reason=blank_title");
            return None;
        }

        let id = self.fresh_id();
        self.repo
            .append(Task::with_id(id, title, description, priority, Utc::now()));
        let index = self.repo.len() - 1;
        self.commit(StoreEvent::Added { id, index });
        Some(id)
    }

    /// Flips `completed` on the task with `id`, keeping its position.
    ///
    /// Returns `false` without side effects when `id` is unknown.
    pub fn toggle_completion(&mut self, id: TaskId) -> bool {
        let Some(index) = self.repo.position(id) else {
            debug!("event=task_toggle module=store status=skipped reason=not_found");
            return false;
        };

        let toggled = self.repo.as_slice()[index].toggled();
        let completed = toggled.is_completed();
        self.repo.replace_at(index, toggled);
        self.commit(StoreEvent::Toggled {
            id,
            index,
            completed,
        });
        true
    }

    /// Removes the task with `id` permanently.
    ///
    /// Returns `false` without side effects when `id` is unknown.
    pub fn delete(&mut self, id: TaskId) -> bool {
        let Some(index) = self.repo.position(id) else {
            debug!("event=task_delete module=store status=skipped reason=not_found");
            return false;
        };

        self.repo.remove_at(index);
        self.commit(StoreEvent::Deleted { id, index });
        true
    }

    pub fn get_by_id(&self, id: TaskId) -> Option<&Task> {
        self.repo.get(id)
    }

    /// Current sequence in insertion order.
    pub fn list(&self) -> &[Task] {
        self.repo.as_slice()
    }

    pub fn len(&self) -> usize {
        self.repo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repo.is_empty()
    }

    /// Counter bumped once per committed mutation.
    ///
    /// Consumers that poll can re-render whenever it differs from the value
    /// they last rendered.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn statistics(&self) -> TaskStatistics {
        TaskStatistics::from_tasks(self.list())
    }

    /// Registers `listener` for every subsequent committed mutation.
    pub fn subscribe(&mut self, listener: TaskListener) -> SubscriptionId {
        self.listeners.insert(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.remove(id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    fn fresh_id(&mut self) -> TaskId {
        loop {
            let candidate = Uuid::new_v4();
            if self.issued_ids.insert(candidate) {
                return candidate;
            }
        }
    }

    fn commit(&mut self, event: StoreEvent) {
        self.revision += 1;
        debug!(
            "event={} module=store status=ok revision={} size={}",
            event.name(),
            self.revision,
            self.repo.len()
        );
        self.listeners.notify(&event);
    }
}

#[cfg(test)]
mod tests {
    use super::TaskStore;
    use crate::model::task::{Task, TaskPriority};
    use crate::repo::task_repo::{InMemoryTaskRepository, TaskRepository};
    use crate::service::subscription::StoreEvent;
    use std::sync::{Arc, Mutex};
    use uuid::Uuid;

    #[test]
    fn seeded_store_holds_three_samples_at_revision_zero() {
        let store = TaskStore::seeded();
        assert_eq!(store.len(), 3);
        assert_eq!(store.revision(), 0);
        assert!(store.list()[2].is_completed());
    }

    #[test]
    fn commit_bumps_revision_only_for_applied_mutations() {
        let mut store = TaskStore::new();
        assert!(store.add("  ", "ignored", TaskPriority::Low).is_none());
        assert!(!store.toggle_completion(Uuid::new_v4()));
        assert!(!store.delete(Uuid::new_v4()));
        assert_eq!(store.revision(), 0);

        let id = store.add("real", "", TaskPriority::Low).unwrap();
        store.toggle_completion(id);
        store.delete(id);
        assert_eq!(store.revision(), 3);
    }

    #[test]
    fn blank_adds_do_not_reserve_ids() {
        let mut store = TaskStore::new();
        for _ in 0..1000 {
            assert!(store.add("   ", "", TaskPriority::Low).is_none());
        }
        assert_eq!(store.len(), 0);
        assert_eq!(store.issued_ids.len(), 0);

        let mut seeded = TaskStore::seeded();
        let before = seeded.issued_ids.len();
        seeded.add("", "desc", TaskPriority::High);
        seeded.add("\t\n", "desc", TaskPriority::Medium);
        assert_eq!(seeded.issued_ids.len(), before);
    }

    #[test]
    fn listeners_see_positions_and_can_unsubscribe() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let mut store = TaskStore::seeded();
        let sink = Arc::clone(&events);
        let subscription = store.subscribe(Box::new(move |event: &StoreEvent| {
            sink.lock().unwrap().push(*event);
        }));

        let second = store.list()[1].id();
        store.toggle_completion(second);
        store.delete(second);
        assert_eq!(store.subscriber_count(), 1);
        assert!(store.unsubscribe(subscription));
        assert_eq!(store.subscriber_count(), 0);
        store.add("after unsubscribe", "", TaskPriority::High);

        let events = events.lock().unwrap();
        assert_eq!(
            *events,
            vec![
                StoreEvent::Toggled {
                    id: second,
                    index: 1,
                    completed: true,
                },
                StoreEvent::Deleted {
                    id: second,
                    index: 1,
                },
            ]
        );
    }

    #[test]
    fn with_repository_reserves_existing_ids() {
        let existing = Task::new("imported", "", TaskPriority::Medium);
        let mut repo = InMemoryTaskRepository::new();
        repo.append(existing.clone());

        let mut store = TaskStore::with_repository(repo);
        assert!(store.issued_ids.contains(&existing.id()));
        assert_eq!(store.get_by_id(existing.id()), Some(&existing));

        let added = store.add("fresh", "", TaskPriority::Low).unwrap();
        assert_ne!(added, existing.id());
        assert_eq!(store.len(), 2);
    }
}
