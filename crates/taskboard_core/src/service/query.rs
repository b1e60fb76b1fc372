//! List-level search and sort helpers.
//!
//! # Responsibility
//! - Provide pure functions over todo lists so callers can chain them with
//!   any filter output.
//!
//! # Invariants
//! - Inputs are never mutated; every function returns a fresh list.
//! - A blank search term is an identity filter, matching the blank-tag
//!   convention used by the model layer.
//! - Undated todos sort after all dated ones regardless of direction; that
//!   placement is a tie-break policy, not part of the sort key.

use crate::model::todo::Todo;
use std::cmp::Ordering;

/// Field a todo list can be sorted by.
///
/// Unknown field names fail at `parse`, so sorting itself never has an
/// "unknown field" case; the caller simply keeps the original order when
/// `parse` returns `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    DueDate,
    Priority,
}

impl SortKey {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "dueDate" | "due_date" => Some(Self::DueDate),
            "priority" => Some(Self::Priority),
            _ => None,
        }
    }
}

/// Sort direction; `Asc` is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Case-insensitive substring search over title and description.
///
/// A blank term returns the input unchanged.
pub fn search_todos(todos: &[Todo], term: &str) -> Vec<Todo> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return todos.to_vec();
    }
    todos
        .iter()
        .filter(|todo| {
            todo.title.to_lowercase().contains(&needle)
                || todo.description.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Stable sort over a copy of `todos`.
///
/// For `SortKey::DueDate`, dated todos compare chronologically and undated
/// ones always land at the end, in both directions. For `SortKey::Priority`,
/// high ranks before medium before low in ascending order.
pub fn sort_todos(todos: &[Todo], key: SortKey, direction: SortDirection) -> Vec<Todo> {
    let mut sorted = todos.to_vec();
    sorted.sort_by(|a, b| compare(a, b, key, direction));
    sorted
}

fn compare(a: &Todo, b: &Todo, key: SortKey, direction: SortDirection) -> Ordering {
    let ordering = match key {
        SortKey::DueDate => match (a.due_date, b.due_date) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Greater,
            (Some(_), None) => return Ordering::Less,
            (Some(left), Some(right)) => left.cmp(&right),
        },
        SortKey::Priority => a.priority.rank().cmp(&b.priority.rank()),
    };
    match direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}
