//! Todo domain model.
//!
//! # Responsibility
//! - Define the canonical task record owned by a project.
//! - Normalize loosely-validated form input (dates, priority, tags) into
//!   well-typed fields.
//!
//! # Invariants
//! - `id` is stable and never reused for another todo.
//! - `due_date` is either a valid calendar date or absent; unparseable input
//!   degrades to absent instead of failing.
//! - Field-level bad input never produces an error value (fail-soft policy,
//!   so callers stay free of per-field error plumbing).

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a todo.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TodoId = Uuid;

/// Task urgency level.
///
/// Invalid textual input cannot be represented; `Priority::parse` returns
/// `None` for anything outside the three levels and callers decide whether
/// that means "keep the previous value" or "use the default".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Parses a priority label case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    /// Stable lowercase label used in snapshots and display.
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Sort rank where `High` comes first.
    pub(crate) fn rank(self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
        }
    }
}

/// Due-date input as it arrives from a caller.
///
/// Form input is free text, sample/seed data is already structured, and an
/// explicit "no date" is a valid choice. The three cases are kept distinct so
/// a patch can tell "clear the date" apart from "date not mentioned".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DateInput {
    /// Already-structured calendar date.
    Date(NaiveDate),
    /// Raw text, typically from a form field.
    Text(String),
    /// Explicitly no date.
    #[default]
    None,
}

impl DateInput {
    /// Normalizes input to an optional calendar date.
    ///
    /// Accepts `YYYY-MM-DD` and RFC 3339 date-times (the date part is kept).
    /// Anything unparseable, including blank text, yields `None` rather than
    /// an error.
    pub fn normalize(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(date) => Some(*date),
            Self::Text(raw) => parse_date_text(raw),
            Self::None => None,
        }
    }
}

fn parse_date_text(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .map(|stamp| stamp.date_naive())
}

/// Create payload for a new todo.
///
/// Tags arrive as comma-separated text the way the form field delivers them;
/// the constructor runs them through the same splitter as
/// [`Todo::set_tags_from_text`].
#[derive(Debug, Clone, Default)]
pub struct TodoDraft {
    pub title: String,
    pub description: String,
    pub due_date: DateInput,
    /// `None` means "caller did not pick one" and falls back to `Medium`.
    pub priority: Option<Priority>,
    pub tags_text: Option<String>,
}

/// Partial update for an existing todo. Absent fields stay untouched.
#[derive(Debug, Clone, Default)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    /// `Some(DateInput::None)` clears the date; `None` leaves it alone.
    pub due_date: Option<DateInput>,
    pub priority: Option<Priority>,
    /// Structured tag replacement (trimmed, empties dropped).
    pub tags: Option<Vec<String>>,
    /// Comma-separated tag replacement. Takes precedence over `tags` when
    /// both are present so the two input formats are never double-processed.
    pub tags_text: Option<String>,
}

/// A single task with scheduling and classification attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub description: String,
    pub due_date: Option<NaiveDate>,
    pub priority: Priority,
    pub tags: Vec<String>,
    pub completed: bool,
}

impl Todo {
    /// Creates a new todo with a generated stable ID.
    ///
    /// `completed` starts as `false`; an omitted priority defaults to
    /// `Medium`.
    pub fn new(draft: TodoDraft) -> Self {
        let mut todo = Self {
            id: Uuid::new_v4(),
            title: draft.title,
            description: draft.description,
            due_date: draft.due_date.normalize(),
            priority: draft.priority.unwrap_or_default(),
            tags: Vec::new(),
            completed: false,
        };
        if let Some(text) = draft.tags_text.as_deref() {
            todo.set_tags_from_text(text);
        }
        todo
    }

    /// Flips the completion flag.
    pub fn toggle_complete(&mut self) {
        self.completed = !self.completed;
    }

    /// Applies only the fields present in `patch`.
    ///
    /// Title and description replace wholesale. A present `due_date`
    /// re-normalizes exactly as at construction, so explicit empty input
    /// clears the stored date. Priority is already typed; an absent value
    /// leaves the previous one in place.
    pub fn apply(&mut self, patch: TodoPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = due_date.normalize();
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(text) = patch.tags_text.as_deref() {
            self.set_tags_from_text(text);
        } else if let Some(tags) = patch.tags {
            self.tags = tags
                .iter()
                .map(|tag| tag.trim())
                .filter(|tag| !tag.is_empty())
                .map(str::to_string)
                .collect();
        }
    }

    /// Appends a tag unless it is blank or already present.
    ///
    /// The duplicate check is exact-string after trimming, so differently
    /// cased variants are kept as distinct tags.
    pub fn add_tag(&mut self, tag: &str) {
        let trimmed = tag.trim();
        if !trimmed.is_empty() && !self.tags.iter().any(|existing| existing == trimmed) {
            self.tags.push(trimmed.to_string());
        }
    }

    /// Removes an exact tag match; no-op when absent.
    pub fn remove_tag(&mut self, tag: &str) {
        let trimmed = tag.trim();
        self.tags.retain(|existing| existing != trimmed);
    }

    /// Renders tags as the comma-separated form-field representation.
    pub fn tags_text(&self) -> String {
        self.tags.join(", ")
    }

    /// Replaces the full tag set from comma-separated text.
    ///
    /// Segments are trimmed and empty segments dropped, so `"a, b ,, c"`
    /// becomes `["a", "b", "c"]`.
    pub fn set_tags_from_text(&mut self, text: &str) {
        self.tags = text
            .split(',')
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
            .collect();
    }

    /// Case-insensitive membership test against any tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        let needle = tag.trim().to_lowercase();
        self.tags
            .iter()
            .any(|existing| existing.to_lowercase() == needle)
    }
}
