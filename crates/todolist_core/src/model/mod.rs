//! Domain model for the to-do list.
//!
//! # Responsibility
//! - Define the task record consumed by store and view projections.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId`.
//! - Deletion is a hard removal; there are no tombstones.

pub mod task;
