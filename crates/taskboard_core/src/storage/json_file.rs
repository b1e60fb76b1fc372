//! JSON-file snapshot store.
//!
//! # Responsibility
//! - Encode the snapshot as one JSON document at a caller-chosen path.
//! - Contain every I/O and decode failure inside the gateway.
//!
//! # Invariants
//! - A missing, unreadable, or undecodable file loads as `None`.
//! - Save creates the parent directory when needed and replaces the file
//!   atomically enough for a single-client store (write then rename is not
//!   required here; there is no concurrent reader).

use crate::storage::{Snapshot, SnapshotStore};
use log::warn;
use std::path::{Path, PathBuf};

/// Snapshot store backed by a single JSON file.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for JsonFileStore {
    fn load(&self) -> Option<Snapshot> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) => {
                if err.kind() != std::io::ErrorKind::NotFound {
                    warn!(
                        "event=snapshot_load module=storage status=error path={} error={err}",
                        self.path.display()
                    );
                }
                return None;
            }
        };

        match serde_json::from_str::<Snapshot>(&raw) {
            Ok(snapshot) => Some(snapshot),
            Err(err) => {
                warn!(
                    "event=snapshot_decode module=storage status=error path={} error={err}",
                    self.path.display()
                );
                None
            }
        }
    }

    fn save(&self, snapshot: &Snapshot) {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                if let Err(err) = std::fs::create_dir_all(parent) {
                    warn!(
                        "event=snapshot_save module=storage status=error path={} error={err}",
                        self.path.display()
                    );
                    return;
                }
            }
        }

        let encoded = match serde_json::to_string(snapshot) {
            Ok(encoded) => encoded,
            Err(err) => {
                warn!(
                    "event=snapshot_encode module=storage status=error path={} error={err}",
                    self.path.display()
                );
                return;
            }
        };

        if let Err(err) = std::fs::write(&self.path, encoded) {
            warn!(
                "event=snapshot_save module=storage status=error path={} error={err}",
                self.path.display()
            );
        }
    }

    fn clear(&self) {
        if let Err(err) = std::fs::remove_file(&self.path) {
            if err.kind() != std::io::ErrorKind::NotFound {
                warn!(
                    "event=snapshot_clear module=storage status=error path={} error={err}",
                    self.path.display()
                );
            }
        }
    }
}
