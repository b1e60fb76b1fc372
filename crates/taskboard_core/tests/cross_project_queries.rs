use chrono::NaiveDate;
use taskboard_core::{
    search_todos, sort_todos, AppService, DateInput, MemoryStore, Priority, SortDirection,
    SortKey, TodoDraft,
};

fn draft(title: &str) -> TodoDraft {
    TodoDraft {
        title: title.to_string(),
        ..TodoDraft::default()
    }
}

/// Seeds two projects with two todos each and returns the loaded service.
fn populated() -> AppService<MemoryStore> {
    let mut service = AppService::load(MemoryStore::new());
    let work = service.add_project("Work").unwrap();
    let home = service.add_project("Home").unwrap();

    service
        .add_todo_to_project(
            work.id,
            TodoDraft {
                title: "Write report".to_string(),
                priority: Some(Priority::High),
                tags_text: Some("office, writing".to_string()),
                due_date: DateInput::Text("2025-01-01".to_string()),
                ..TodoDraft::default()
            },
        )
        .unwrap();
    service
        .add_todo_to_project(
            work.id,
            TodoDraft {
                title: "Plan sprint".to_string(),
                priority: Some(Priority::Low),
                tags_text: Some("office".to_string()),
                ..TodoDraft::default()
            },
        )
        .unwrap();
    service
        .add_todo_to_project(
            home.id,
            TodoDraft {
                title: "Buy milk".to_string(),
                description: "two litres".to_string(),
                tags_text: Some("errands".to_string()),
                due_date: DateInput::Text("2025-06-01".to_string()),
                ..TodoDraft::default()
            },
        )
        .unwrap();
    service
        .add_todo_to_project(
            home.id,
            TodoDraft {
                title: "Fix shelf".to_string(),
                priority: Some(Priority::High),
                ..TodoDraft::default()
            },
        )
        .unwrap();

    service
}

#[test]
fn all_todos_preserves_project_then_insertion_order() {
    let service = populated();
    let titles: Vec<String> = service
        .all_todos()
        .into_iter()
        .map(|todo| todo.title)
        .collect();
    // "Default" seed project is empty, then Work, then Home.
    assert_eq!(
        titles,
        vec!["Write report", "Plan sprint", "Buy milk", "Fix shelf"]
    );
}

#[test]
fn annotated_todos_carry_owning_project_without_mutating_state() {
    let service = populated();
    let annotated = service.all_todos_with_project();
    assert_eq!(annotated.len(), 4);
    assert_eq!(annotated[0].project_name, "Work");
    assert_eq!(annotated[2].project_name, "Home");

    // Annotation is a view; the stored todos are untouched.
    let stored = service.all_todos();
    assert_eq!(stored[0].title, annotated[0].todo.title);
}

#[test]
fn cross_project_tag_filter_uses_the_blank_means_all_convention() {
    let service = populated();
    assert_eq!(service.todos_by_tag("").len(), 4);
    assert_eq!(service.todos_by_tag("OFFICE").len(), 2);
    assert_eq!(service.todos_by_tag("errands").len(), 1);
    assert_eq!(service.todos_by_tag("nope").len(), 0);
}

#[test]
fn cross_project_priority_filter() {
    let service = populated();
    let high = service.todos_by_priority(Priority::High);
    assert_eq!(high.len(), 2);
    assert!(high.iter().all(|todo| todo.priority == Priority::High));
}

#[test]
fn all_tags_unions_and_sorts_across_projects() {
    let service = populated();
    assert_eq!(service.all_tags(), vec!["errands", "office", "writing"]);
}

#[test]
fn todos_due_on_matches_the_exact_calendar_date() {
    let service = populated();
    let june_first = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
    let due = service.todos_due_on(june_first);
    assert_eq!(due.len(), 1);
    assert_eq!(due[0].title, "Buy milk");

    let empty = service.todos_due_on(NaiveDate::from_ymd_opt(2025, 6, 2).unwrap());
    assert!(empty.is_empty());
}

#[test]
fn search_over_service_lists_matches_title_and_description() {
    let service = populated();
    let todos = service.all_todos();

    let by_title = search_todos(&todos, "milk");
    assert_eq!(by_title.len(), 1);

    let by_description = search_todos(&todos, "LITRES");
    assert_eq!(by_description.len(), 1);
    assert_eq!(by_description[0].title, "Buy milk");

    let identity = search_todos(&todos, "");
    assert_eq!(identity, todos);
}

#[test]
fn sorting_service_lists_keeps_undated_todos_last() {
    let service = populated();
    let sorted = sort_todos(&service.all_todos(), SortKey::DueDate, SortDirection::Desc);
    let titles: Vec<String> = sorted.into_iter().map(|todo| todo.title).collect();
    assert_eq!(titles[0], "Buy milk");
    assert_eq!(titles[1], "Write report");
    // Undated todos trail in both directions.
    assert_eq!(&titles[2..], ["Plan sprint", "Fix shelf"]);
}

#[test]
fn project_level_completion_filter_tracks_toggles() {
    let mut service = AppService::load(MemoryStore::new());
    let project = service.projects()[0].id;
    let done = service.add_todo_to_project(project, draft("done")).unwrap();
    service.add_todo_to_project(project, draft("open")).unwrap();
    service.toggle_todo(project, done.id).unwrap();

    let project_ref = service.project(project).unwrap();
    let completed = project_ref.todos_by_completion(true);
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].title, "done");
    assert_eq!(project_ref.todos_by_completion(false).len(), 1);
}
