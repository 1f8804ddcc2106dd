//! Repository layer abstractions and storage implementations.
//!
//! # Responsibility
//! - Define the ordered-storage contract used by the task store.
//! - Isolate container details from store policy.
//!
//! # Invariants
//! - Repositories never reorder tasks.
//! - Only the in-memory implementation ships; nothing is persisted.

pub mod task_repo;
