//! Snapshot persistence gateway.
//!
//! # Responsibility
//! - Define the load/save/clear contract for the whole-state snapshot.
//! - Keep encoding details out of service/business orchestration.
//!
//! # Invariants
//! - `load` never propagates failures: unreadable or corrupt state reads as
//!   "nothing saved", which triggers seeding upstream.
//! - `save` overwrites the previous snapshot completely; failures are logged
//!   and swallowed at this boundary.

use crate::model::project::ProjectId;
use crate::model::todo::TodoId;
use serde::{Deserialize, Serialize};

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

/// Plain persisted form of one todo.
///
/// Deliberately decoupled from the entity types: priority and due date stay
/// free strings here so snapshots written by older revisions (or hand-edited
/// ones) rehydrate with defaults instead of failing to decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoRecord {
    pub id: TodoId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub completed: bool,
}

/// Plain persisted form of one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: ProjectId,
    pub name: String,
    #[serde(default)]
    pub todos: Vec<TodoRecord>,
}

/// Full serializable state: every project with its todos, in order.
pub type Snapshot = Vec<ProjectRecord>;

/// Storage contract consumed by the app service.
///
/// Implementations are synchronous and assume a single exclusive client;
/// there is no concurrent mutator to guard against.
pub trait SnapshotStore {
    /// Returns the previously saved snapshot, or `None` when nothing was
    /// ever saved or the stored data is unreadable.
    fn load(&self) -> Option<Snapshot>;

    /// Persists the full state, replacing any previous snapshot. Best
    /// effort; failures stay inside the gateway.
    fn save(&self, snapshot: &Snapshot);

    /// Erases all persisted state. Used for resets, not by normal flows.
    fn clear(&self);
}
