//! Render-ready projections for host UIs.
//!
//! # Responsibility
//! - Address the list and detail destinations by route path.
//! - Derive statistics, list rows and detail fields from store reads.
//!
//! # Invariants
//! - Nothing in this module mutates the store.
//! - Rendering, theming and dialog state stay in the host UI.

pub mod projection;
pub mod route;
