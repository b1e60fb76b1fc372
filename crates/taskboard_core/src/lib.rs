//! Core domain logic for the taskboard task manager.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod service;
pub mod storage;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::project::{DuplicateTodo, Project, ProjectId};
pub use model::todo::{DateInput, Priority, Todo, TodoDraft, TodoId, TodoPatch};
pub use service::app_service::{AppError, AppService, RemovedProject, TodoWithProject};
pub use service::query::{search_todos, sort_todos, SortDirection, SortKey};
pub use storage::{JsonFileStore, MemoryStore, ProjectRecord, Snapshot, SnapshotStore, TodoRecord};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
