//! Core use-case services.
//!
//! # Responsibility
//! - Own the task sequence and expose the allowed mutations.
//! - Keep UI/FFI layers decoupled from storage details.

pub mod seed;
pub mod subscription;
pub mod task_store;
