use taskboard_core::{AppError, AppService, MemoryStore};
use uuid::Uuid;

fn service() -> AppService<MemoryStore> {
    AppService::load(MemoryStore::new())
}

#[test]
fn fresh_service_seeds_one_default_project_and_selects_it() {
    let service = service();
    let projects = service.projects();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].name, "Default");

    let current = service.current_project().expect("current should be set");
    assert_eq!(current.id, projects[0].id);
}

#[test]
fn add_project_rejects_empty_and_duplicate_names() {
    let mut service = service();
    assert_eq!(
        service.add_project("   ").unwrap_err(),
        AppError::EmptyProjectName
    );

    let home = service.add_project("Home").unwrap();

    // Trim + case-insensitive collision against an existing name.
    let err = service.add_project("  HOME ").unwrap_err();
    match err {
        AppError::DuplicateProjectName { existing, name } => {
            assert_eq!(existing, home.id);
            assert_eq!(name, "HOME");
        }
        other => panic!("expected duplicate-name error, got {other:?}"),
    }
    assert_eq!(service.projects().len(), 2);
}

#[test]
fn update_project_excludes_self_from_duplicate_check() {
    let mut service = service();
    let work = service.add_project("Work").unwrap();

    // Re-casing your own name is allowed.
    let updated = service.update_project(work.id, "WORK").unwrap();
    assert_eq!(updated.name, "WORK");

    // Colliding with another project is not; the target keeps its name.
    let err = service.update_project(work.id, "default").unwrap_err();
    assert!(matches!(err, AppError::DuplicateProjectName { .. }));
    assert_eq!(service.project(work.id).unwrap().name, "WORK");
}

#[test]
fn update_project_reports_unknown_id() {
    let mut service = service();
    let err = service.update_project(Uuid::new_v4(), "anything").unwrap_err();
    assert!(matches!(err, AppError::ProjectNotFound(_)));
}

#[test]
fn last_project_cannot_be_removed() {
    let mut service = service();
    let only = service.projects()[0].id;
    assert_eq!(service.remove_project(only).unwrap_err(), AppError::LastProject);
    assert_eq!(service.projects().len(), 1);
}

#[test]
fn removing_the_current_project_falls_back_to_the_first() {
    let mut service = service();
    let errands = service.add_project("Errands").unwrap();
    assert!(service.set_current_project(errands.id));

    let removed = service.remove_project(errands.id).unwrap();
    assert_eq!(removed.name, "Errands");

    let first = service.projects()[0].id;
    assert_eq!(removed.new_current, Some(first));
    assert_eq!(service.current_project().unwrap().id, first);
}

#[test]
fn removing_a_non_current_project_keeps_the_selection() {
    let mut service = service();
    let keep = service.projects()[0].id;
    let doomed = service.add_project("Doomed").unwrap();

    service.remove_project(doomed.id).unwrap();
    assert_eq!(service.current_project().unwrap().id, keep);
}

#[test]
fn remove_project_cascades_todo_deletion() {
    let mut service = service();
    let doomed = service.add_project("Doomed").unwrap();
    service
        .add_todo_to_project(
            doomed.id,
            taskboard_core::TodoDraft {
                title: "gone with the project".to_string(),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(service.all_todos().len(), 1);

    service.remove_project(doomed.id).unwrap();
    assert!(service.all_todos().is_empty());
}

#[test]
fn set_current_project_fails_silently_for_unknown_id() {
    let mut service = service();
    let before = service.current_project().unwrap().id;
    assert!(!service.set_current_project(Uuid::new_v4()));
    assert_eq!(service.current_project().unwrap().id, before);
}
