use super::{Record, RecordId};
use crate::error::Result;
use crate::validate::{check_id, check_record_id, validate_description, validate_priority};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Priority {
    type Err = crate::validate::ValidationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        validate_priority(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: RecordId,
    description: String,
    priority: Priority,
    completed: bool,
}

#[derive(Debug, Clone)]
pub struct TaskDraft {
    pub description: String,
    pub priority: String,
}

impl TaskDraft {
    pub fn new(description: impl Into<String>, priority: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            priority: priority.into(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub description: Option<String>,
    pub priority: Option<String>,
    pub completed: Option<bool>,
}

/// On-disk shape of a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRow {
    pub task_id: i64,
    pub description: String,
    pub is_completed: bool,
    pub priority_level: String,
}

impl Task {
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn completed(&self) -> bool {
        self.completed
    }
}

impl Record for Task {
    type Draft = TaskDraft;
    type Patch = TaskPatch;
    type Row = TaskRow;

    const KIND: &'static str = "Task";
    const PLURAL: &'static str = "tasks";
    const COLLECTION: &'static str = "task list";

    fn create(id: RecordId, draft: TaskDraft) -> Result<Self> {
        let description = validate_description(&draft.description)?.to_string();
        let id = check_record_id(id)?;
        let priority = validate_priority(&draft.priority)?;

        Ok(Self {
            id,
            description,
            priority,
            completed: false,
        })
    }

    fn update(&mut self, patch: &TaskPatch) -> Result<()> {
        let description = patch
            .description
            .as_deref()
            .map(validate_description)
            .transpose()?;
        let priority = patch.priority.as_deref().map(validate_priority).transpose()?;

        if let Some(description) = description {
            self.description = description.to_string();
        }
        if let Some(priority) = priority {
            self.priority = priority;
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
        Ok(())
    }

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn label(&self) -> &str {
        &self.description
    }

    fn summary(&self) -> String {
        format!("'{}' (Priority: {})", self.description, self.priority)
    }

    fn is_completed(&self) -> Option<bool> {
        Some(self.completed)
    }

    fn to_row(&self) -> TaskRow {
        TaskRow {
            task_id: self.id as i64,
            description: self.description.clone(),
            is_completed: self.completed,
            priority_level: self.priority.to_string(),
        }
    }

    fn from_row(row: TaskRow) -> Result<Self> {
        let id = check_id(row.task_id)?;
        let mut task = Self::create(id, TaskDraft::new(row.description, row.priority_level))?;
        task.completed = row.is_completed;
        Ok(task)
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.completed { "[X]" } else { "[ ]" };
        write!(
            f,
            "{}. {} - {} {}",
            self.id, self.priority, mark, self.description
        )
    }
}
