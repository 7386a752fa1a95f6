//! Dated homework tasks shown on the student's week.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;
use crate::schedule::activities::{check_color, check_times, required};
use crate::timeline::time_to_minutes;

/// Colours offered when adding a task.
pub const TASK_PALETTE: [&str; 8] = [
    "#3B82F6", "#8B5CF6", "#EC4899", "#F59E0B", "#10B981", "#06B6D4", "#6366F1", "#EF4444",
];

/// Kind of homework item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaskType {
    /// A test or graded assessment
    Evaluation,
    /// Homework
    #[default]
    Devoir,
    Autre,
}

impl TaskType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Evaluation => "Évaluation",
            Self::Devoir => "Devoir",
            Self::Autre => "Autre",
        }
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for TaskType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "evaluation" => Ok(Self::Evaluation),
            "devoir" => Ok(Self::Devoir),
            "autre" => Ok(Self::Autre),
            other => Err(ValidationError::InvalidValue {
                field: "type",
                value: other.to_string(),
            }),
        }
    }
}

/// A one-off task pinned to a date and time range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub task_type: TaskType,
    pub title: String,
    pub time_start: String,
    pub time_end: String,
    pub color: String,
}

/// Owned task list with copy-on-write updates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    #[must_use]
    pub fn add(&self, task: Task) -> Self {
        let mut tasks = self.tasks.clone();
        tasks.push(task);
        Self { tasks }
    }

    #[must_use]
    pub fn remove(&self, id: &str) -> Self {
        Self {
            tasks: self.tasks.iter().filter(|t| t.id != id).cloned().collect(),
        }
    }

    /// Tasks on `date`, earliest first.
    pub fn for_date(&self, date: NaiveDate) -> Vec<&Task> {
        let mut tasks: Vec<_> = self.tasks.iter().filter(|t| t.date == date).collect();
        tasks.sort_by(|a, b| {
            time_to_minutes(&a.time_start)
                .total_cmp(&time_to_minutes(&b.time_start))
                .then_with(|| a.id.cmp(&b.id))
        });
        tasks
    }
}

impl From<Vec<Task>> for TaskList {
    fn from(tasks: Vec<Task>) -> Self {
        Self::new(tasks)
    }
}

/// Form data for a new task.
#[derive(Debug, Clone)]
pub struct NewTask {
    pub date: NaiveDate,
    pub task_type: TaskType,
    pub title: String,
    pub time_start: String,
    pub time_end: String,
    pub color: String,
}

impl NewTask {
    pub fn new(
        date: NaiveDate,
        title: impl Into<String>,
        time_start: impl Into<String>,
        time_end: impl Into<String>,
    ) -> Self {
        Self {
            date,
            task_type: TaskType::default(),
            title: title.into(),
            time_start: time_start.into(),
            time_end: time_end.into(),
            color: TASK_PALETTE[0].to_string(),
        }
    }

    pub fn with_type(mut self, task_type: TaskType) -> Self {
        self.task_type = task_type;
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn build(self) -> Result<Task, ValidationError> {
        let title = required("title", &self.title)?;
        check_times(&self.time_start, &self.time_end)?;
        let color = check_color("color", self.color)?;

        Ok(Task {
            id: format!("task_{}", Uuid::new_v4()),
            date: self.date,
            task_type: self.task_type,
            title,
            time_start: self.time_start,
            time_end: self.time_end,
            color,
        })
    }
}
