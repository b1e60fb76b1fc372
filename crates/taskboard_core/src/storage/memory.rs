//! In-memory snapshot store for tests and smoke probes.

use crate::storage::{Snapshot, SnapshotStore};
use std::cell::RefCell;

/// Snapshot store holding the last saved state in process memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RefCell<Option<Snapshot>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store pre-loaded with a snapshot, as if saved earlier.
    pub fn with_snapshot(snapshot: Snapshot) -> Self {
        Self {
            state: RefCell::new(Some(snapshot)),
        }
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> Option<Snapshot> {
        self.state.borrow().clone()
    }

    fn save(&self, snapshot: &Snapshot) {
        *self.state.borrow_mut() = Some(snapshot.clone());
    }

    fn clear(&self) {
        *self.state.borrow_mut() = None;
    }
}
