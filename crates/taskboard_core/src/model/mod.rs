//! Domain model for projects and their todos.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep field-level input normalization next to the data it produces.
//!
//! # Invariants
//! - Every domain object is identified by a stable uuid-backed id.
//! - Entities are only produced by their constructors, never assembled from
//!   arbitrary records by callers.

pub mod project;
pub mod todo;
