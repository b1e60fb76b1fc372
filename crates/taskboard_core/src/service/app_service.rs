//! Application service owning all projects and the current selection.
//!
//! # Responsibility
//! - Orchestrate entity operations into caller-facing use cases.
//! - Persist the full snapshot after every successful mutation.
//! - Rehydrate persisted records with lenient defaults at startup.
//!
//! # Invariants
//! - At least one project always exists; the last one cannot be removed.
//! - Project names are unique under trim + case-insensitive comparison,
//!   excluding the project being renamed.
//! - `current` either points at a live project or is absent.

use crate::model::project::{DuplicateTodo, Project, ProjectId};
use crate::model::todo::{DateInput, Priority, Todo, TodoDraft, TodoId, TodoPatch};
use crate::storage::{ProjectRecord, Snapshot, SnapshotStore, TodoRecord};
use chrono::NaiveDate;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

const SEED_PROJECT_NAME: &str = "Default";

/// Failure values for app-service use cases.
///
/// All failures are values; nothing in this layer panics or aborts. The
/// variants carry enough context for a caller to render a precise message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Project name was empty after trimming.
    EmptyProjectName,
    /// Another project already holds this name (trim + case-insensitive).
    DuplicateProjectName { existing: ProjectId, name: String },
    /// No project with this id.
    ProjectNotFound(ProjectId),
    /// No todo with this id in the resolved project.
    TodoNotFound(TodoId),
    /// Removing the only remaining project is not allowed.
    LastProject,
    /// A todo with this id already exists in the target project.
    DuplicateTodo(TodoId),
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyProjectName => write!(f, "project name cannot be empty"),
            Self::DuplicateProjectName { name, .. } => {
                write!(f, "project name already in use: `{name}`")
            }
            Self::ProjectNotFound(id) => write!(f, "project not found: {id}"),
            Self::TodoNotFound(id) => write!(f, "todo not found: {id}"),
            Self::LastProject => write!(f, "cannot remove the last remaining project"),
            Self::DuplicateTodo(id) => write!(f, "todo already exists in project: {id}"),
        }
    }
}

impl Error for AppError {}

impl From<DuplicateTodo> for AppError {
    fn from(value: DuplicateTodo) -> Self {
        Self::DuplicateTodo(value.0)
    }
}

/// Result of a successful project removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovedProject {
    /// Name of the project that was removed, for caller messaging.
    pub name: String,
    /// Current project after removal, when the removed one was current.
    pub new_current: Option<ProjectId>,
}

/// A todo annotated with its owning project, for cross-project views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoWithProject {
    pub project_id: ProjectId,
    pub project_name: String,
    pub todo: Todo,
}

/// Domain service over an injected snapshot store.
///
/// One instance owns its in-memory state exclusively; hosting code creates
/// it once at startup and passes it to every operation.
pub struct AppService<S: SnapshotStore> {
    store: S,
    projects: Vec<Project>,
    current: Option<ProjectId>,
}

impl<S: SnapshotStore> AppService<S> {
    /// Loads persisted state or seeds a default project when nothing is
    /// loadable.
    ///
    /// The current project starts as the first loaded or seeded project.
    pub fn load(store: S) -> Self {
        match store.load() {
            Some(snapshot) if !snapshot.is_empty() => {
                let projects = rehydrate(snapshot);
                let current = projects.first().map(|project| project.id);
                info!(
                    "event=state_load module=service status=ok projects={}",
                    projects.len()
                );
                Self {
                    store,
                    projects,
                    current,
                }
            }
            _ => {
                let seed = Project::new(SEED_PROJECT_NAME);
                let current = Some(seed.id);
                info!("event=state_seed module=service status=ok");
                let service = Self {
                    store,
                    projects: vec![seed],
                    current,
                };
                service.persist();
                service
            }
        }
    }

    /// Creates and appends a new project.
    ///
    /// # Errors
    /// - [`AppError::EmptyProjectName`] when the trimmed name is empty.
    /// - [`AppError::DuplicateProjectName`] when another project holds the
    ///   same name under trim + case-insensitive comparison.
    pub fn add_project(&mut self, name: &str) -> Result<Project, AppError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(AppError::EmptyProjectName);
        }
        if let Some(existing) = self.find_by_name(trimmed, None) {
            return Err(AppError::DuplicateProjectName {
                existing: existing.id,
                name: trimmed.to_string(),
            });
        }

        let project = Project::new(trimmed);
        if self.current.is_none() {
            self.current = Some(project.id);
        }
        self.projects.push(project.clone());
        self.persist();
        Ok(project)
    }

    /// Renames a project in place.
    ///
    /// The duplicate check excludes the project being renamed, so re-saving
    /// an unchanged name (or only changing its case) succeeds.
    pub fn update_project(
        &mut self,
        project_id: ProjectId,
        new_name: &str,
    ) -> Result<Project, AppError> {
        let trimmed = new_name.trim();
        if trimmed.is_empty() {
            return Err(AppError::EmptyProjectName);
        }
        if !self.projects.iter().any(|project| project.id == project_id) {
            return Err(AppError::ProjectNotFound(project_id));
        }
        if let Some(existing) = self.find_by_name(trimmed, Some(project_id)) {
            return Err(AppError::DuplicateProjectName {
                existing: existing.id,
                name: trimmed.to_string(),
            });
        }

        let project = self
            .projects
            .iter_mut()
            .find(|project| project.id == project_id)
            .ok_or(AppError::ProjectNotFound(project_id))?;
        project.name = trimmed.to_string();
        let updated = project.clone();
        self.persist();
        Ok(updated)
    }

    /// Removes a project and every todo it owns.
    ///
    /// The last-project guard is checked first, so a one-project service
    /// always reports [`AppError::LastProject`] even for unknown ids.
    pub fn remove_project(&mut self, project_id: ProjectId) -> Result<RemovedProject, AppError> {
        if self.projects.len() <= 1 {
            return Err(AppError::LastProject);
        }
        let index = self
            .projects
            .iter()
            .position(|project| project.id == project_id)
            .ok_or(AppError::ProjectNotFound(project_id))?;

        let removed = self.projects.remove(index);
        if self.current == Some(project_id) {
            self.current = self.projects.first().map(|project| project.id);
        }
        self.persist();
        Ok(RemovedProject {
            name: removed.name,
            new_current: self.current,
        })
    }

    pub fn project(&self, project_id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == project_id)
    }

    /// Snapshot copy of all projects in display order.
    pub fn projects(&self) -> Vec<Project> {
        self.projects.clone()
    }

    pub fn current_project(&self) -> Option<&Project> {
        self.current.and_then(|id| self.project(id))
    }

    /// Switches the current project; returns `false` and stays unchanged
    /// when the id is unknown.
    pub fn set_current_project(&mut self, project_id: ProjectId) -> bool {
        if self.project(project_id).is_some() {
            self.current = Some(project_id);
            true
        } else {
            false
        }
    }

    /// Constructs a todo from the draft and appends it to the project.
    pub fn add_todo_to_project(
        &mut self,
        project_id: ProjectId,
        draft: TodoDraft,
    ) -> Result<Todo, AppError> {
        let project = self
            .projects
            .iter_mut()
            .find(|project| project.id == project_id)
            .ok_or(AppError::ProjectNotFound(project_id))?;

        let todo = Todo::new(draft);
        let created = todo.clone();
        project.add_todo(todo)?;
        self.persist();
        Ok(created)
    }

    pub fn remove_todo_from_project(
        &mut self,
        project_id: ProjectId,
        todo_id: TodoId,
    ) -> Result<(), AppError> {
        let project = self
            .projects
            .iter_mut()
            .find(|project| project.id == project_id)
            .ok_or(AppError::ProjectNotFound(project_id))?;

        if !project.remove_todo(todo_id) {
            return Err(AppError::TodoNotFound(todo_id));
        }
        self.persist();
        Ok(())
    }

    /// Applies a partial update to one todo.
    ///
    /// A comma-separated tag field in the patch is applied through the
    /// dedicated tag-text setter inside [`Todo::apply`], never through the
    /// structured-tags path.
    pub fn update_todo(
        &mut self,
        project_id: ProjectId,
        todo_id: TodoId,
        patch: TodoPatch,
    ) -> Result<Todo, AppError> {
        let project = self
            .projects
            .iter_mut()
            .find(|project| project.id == project_id)
            .ok_or(AppError::ProjectNotFound(project_id))?;
        let todo = project
            .todo_mut(todo_id)
            .ok_or(AppError::TodoNotFound(todo_id))?;

        todo.apply(patch);
        let updated = todo.clone();
        self.persist();
        Ok(updated)
    }

    pub fn toggle_todo(
        &mut self,
        project_id: ProjectId,
        todo_id: TodoId,
    ) -> Result<Todo, AppError> {
        let project = self
            .projects
            .iter_mut()
            .find(|project| project.id == project_id)
            .ok_or(AppError::ProjectNotFound(project_id))?;
        let todo = project
            .todo_mut(todo_id)
            .ok_or(AppError::TodoNotFound(todo_id))?;

        todo.toggle_complete();
        let toggled = todo.clone();
        self.persist();
        Ok(toggled)
    }

    /// Every todo across all projects, project order then insertion order.
    pub fn all_todos(&self) -> Vec<Todo> {
        self.projects
            .iter()
            .flat_map(|project| project.todos())
            .collect()
    }

    /// Every todo annotated with its owning project for cross-project views.
    ///
    /// Annotation clones; stored todos are never touched.
    pub fn all_todos_with_project(&self) -> Vec<TodoWithProject> {
        self.projects
            .iter()
            .flat_map(|project| {
                project.todos().into_iter().map(|todo| TodoWithProject {
                    project_id: project.id,
                    project_name: project.name.clone(),
                    todo,
                })
            })
            .collect()
    }

    /// Cross-project tag filter; a blank tag returns everything.
    pub fn todos_by_tag(&self, tag: &str) -> Vec<Todo> {
        if tag.trim().is_empty() {
            return self.all_todos();
        }
        self.all_todos()
            .into_iter()
            .filter(|todo| todo.has_tag(tag))
            .collect()
    }

    pub fn todos_by_priority(&self, level: Priority) -> Vec<Todo> {
        self.all_todos()
            .into_iter()
            .filter(|todo| todo.priority == level)
            .collect()
    }

    /// Union of every project's unique tags, ascending sorted.
    pub fn all_tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = self
            .projects
            .iter()
            .flat_map(|project| project.unique_tags())
            .collect();
        tags.sort();
        tags.dedup();
        tags
    }

    /// All todos due exactly on the given calendar date.
    pub fn todos_due_on(&self, date: NaiveDate) -> Vec<Todo> {
        self.all_todos()
            .into_iter()
            .filter(|todo| todo.due_date == Some(date))
            .collect()
    }

    fn find_by_name(&self, trimmed: &str, exclude: Option<ProjectId>) -> Option<&Project> {
        let needle = trimmed.to_lowercase();
        self.projects.iter().find(|project| {
            Some(project.id) != exclude && project.name.trim().to_lowercase() == needle
        })
    }

    fn persist(&self) {
        self.store.save(&snapshot_of(&self.projects));
    }
}

/// Builds the plain persisted form of the given projects.
fn snapshot_of(projects: &[Project]) -> Snapshot {
    projects
        .iter()
        .map(|project| ProjectRecord {
            id: project.id,
            name: project.name.clone(),
            todos: project
                .todos()
                .into_iter()
                .map(|todo| TodoRecord {
                    id: todo.id,
                    title: todo.title,
                    description: todo.description,
                    due_date: todo.due_date.map(|date| date.to_string()),
                    priority: Some(todo.priority.label().to_string()),
                    tags: todo.tags,
                    completed: todo.completed,
                })
                .collect(),
        })
        .collect()
}

/// Rebuilds entities from persisted records with lenient defaults.
///
/// Missing or unknown priority falls back to `Medium`, an unparseable stored
/// date reads as "no date", and absent tags read as empty. Stored ids are
/// kept as-is so references held by callers survive a reload.
fn rehydrate(snapshot: Snapshot) -> Vec<Project> {
    snapshot
        .into_iter()
        .map(|record| {
            let todos = record
                .todos
                .into_iter()
                .map(|todo| Todo {
                    id: todo.id,
                    title: todo.title,
                    description: todo.description,
                    due_date: todo
                        .due_date
                        .map(DateInput::Text)
                        .unwrap_or_default()
                        .normalize(),
                    priority: todo
                        .priority
                        .as_deref()
                        .and_then(Priority::parse)
                        .unwrap_or_default(),
                    tags: todo.tags,
                    completed: todo.completed,
                })
                .collect();
            Project::from_parts(record.id, record.name, todos)
        })
        .collect()
}
