//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `taskboard_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use taskboard_core::{AppService, MemoryStore};

fn main() {
    let service = AppService::load(MemoryStore::new());
    let projects = service.projects();
    println!("taskboard_core version={}", taskboard_core::core_version());
    println!("taskboard_core seeded_projects={}", projects.len());
    if let Some(current) = service.current_project() {
        println!("taskboard_core current_project={}", current.name);
    }
}
