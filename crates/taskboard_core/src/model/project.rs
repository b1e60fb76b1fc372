//! Project domain model.
//!
//! # Responsibility
//! - Own an insertion-ordered collection of todos.
//! - Guard todo-id uniqueness within one project.
//!
//! # Invariants
//! - `id` is stable and never reused for another project.
//! - No two todos in the same project share an id; a colliding add is
//!   rejected without mutation.
//! - Only constructors produce `Todo` values, so every element of `todos`
//!   is well-formed by construction.

use crate::model::todo::{Priority, Todo, TodoId};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a project.
pub type ProjectId = Uuid;

/// Rejection signal for [`Project::add_todo`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateTodo(pub TodoId);

impl Display for DuplicateTodo {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "todo already exists in project: {}", self.0)
    }
}

impl Error for DuplicateTodo {}

/// A named, ordered collection of todos with exclusive ownership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    todos: Vec<Todo>,
}

impl Project {
    /// Creates an empty project with a generated stable ID.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            todos: Vec::new(),
        }
    }

    /// Rebuilds a project from persisted parts, keeping stored identity.
    pub(crate) fn from_parts(id: ProjectId, name: String, todos: Vec<Todo>) -> Self {
        Self { id, name, todos }
    }

    /// Appends a todo at the end, preserving insertion order.
    ///
    /// # Errors
    /// Returns [`DuplicateTodo`] and leaves the collection untouched when a
    /// todo with the same id is already present.
    pub fn add_todo(&mut self, todo: Todo) -> Result<(), DuplicateTodo> {
        if self.todos.iter().any(|existing| existing.id == todo.id) {
            return Err(DuplicateTodo(todo.id));
        }
        self.todos.push(todo);
        Ok(())
    }

    /// Removes the matching todo; returns whether anything was removed.
    pub fn remove_todo(&mut self, todo_id: TodoId) -> bool {
        let before = self.todos.len();
        self.todos.retain(|todo| todo.id != todo_id);
        self.todos.len() != before
    }

    pub fn todo(&self, todo_id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == todo_id)
    }

    pub(crate) fn todo_mut(&mut self, todo_id: TodoId) -> Option<&mut Todo> {
        self.todos.iter_mut().find(|todo| todo.id == todo_id)
    }

    /// Returns a snapshot copy; caller mutation never reaches internal state.
    pub fn todos(&self) -> Vec<Todo> {
        self.todos.clone()
    }

    pub fn todo_count(&self) -> usize {
        self.todos.len()
    }

    pub fn todos_by_priority(&self, level: Priority) -> Vec<Todo> {
        self.todos
            .iter()
            .filter(|todo| todo.priority == level)
            .cloned()
            .collect()
    }

    pub fn todos_by_completion(&self, completed: bool) -> Vec<Todo> {
        self.todos
            .iter()
            .filter(|todo| todo.completed == completed)
            .cloned()
            .collect()
    }

    /// Case-insensitive tag filter.
    ///
    /// A blank filter returns every todo; "no filter" rather than "no match"
    /// is the convention reused by all tag filtering in the crate.
    pub fn todos_by_tag(&self, tag: &str) -> Vec<Todo> {
        if tag.trim().is_empty() {
            return self.todos();
        }
        self.todos
            .iter()
            .filter(|todo| todo.has_tag(tag))
            .cloned()
            .collect()
    }

    /// All distinct tags across contained todos, trimmed and sorted ascending.
    pub fn unique_tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = self
            .todos
            .iter()
            .flat_map(|todo| todo.tags.iter())
            .map(|tag| tag.trim().to_string())
            .collect();
        tags.sort();
        tags.dedup();
        tags
    }
}
