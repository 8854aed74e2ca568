// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt::Display, str::FromStr};

/// A unit of work on the launch checklist.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Task {
    /// Unique identifier.
    pub id: String,

    /// What needs to be done.
    pub title: String,

    /// Who is responsible.
    pub assignee: String,

    /// Current progress.
    pub status: TaskStatus,

    /// How urgent the task is.
    pub priority: Priority,

    /// The area of the campaign the task belongs to.
    pub category: TaskCategory,
}

/// The status of a task, cycled in a fixed order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Not started yet.
    #[default]
    Todo,

    /// Being worked on.
    InProgress,

    /// Finished.
    Done,
}

const STATUS_TODO: &str = "todo";
const STATUS_IN_PROGRESS: &str = "in-progress";
const STATUS_DONE: &str = "done";

impl TaskStatus {
    /// The status a task moves to when cycled: todo, in progress, done, and
    /// back to todo.
    pub fn next(self) -> Self {
        match self {
            TaskStatus::Todo => TaskStatus::InProgress,
            TaskStatus::InProgress => TaskStatus::Done,
            TaskStatus::Done => TaskStatus::Todo,
        }
    }
}

impl AsRef<str> for TaskStatus {
    fn as_ref(&self) -> &str {
        match self {
            TaskStatus::Todo => STATUS_TODO,
            TaskStatus::InProgress => STATUS_IN_PROGRESS,
            TaskStatus::Done => STATUS_DONE,
        }
    }
}

impl Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for TaskStatus {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            STATUS_TODO => Ok(TaskStatus::Todo),
            STATUS_IN_PROGRESS => Ok(TaskStatus::InProgress),
            STATUS_DONE => Ok(TaskStatus::Done),
            _ => Err(()),
        }
    }
}

/// Priority of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Must be done first.
    High,

    /// Normal priority.
    Medium,

    /// Can wait.
    Low,
}

impl Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        };
        write!(f, "{s}")
    }
}

/// The area of the campaign a task belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskCategory {
    /// Lead management.
    Crm,

    /// Copy and creative content.
    Content,

    /// Paid traffic.
    Traffic,

    /// Forms, logistics and everything else.
    Operations,
}

impl Display for TaskCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TaskCategory::Crm => "CRM",
            TaskCategory::Content => "Content",
            TaskCategory::Traffic => "Traffic",
            TaskCategory::Operations => "Operations",
        };
        write!(f, "{s}")
    }
}

/// Which tasks to show.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TaskFilter {
    /// Every task.
    #[default]
    All,

    /// Only tasks with the given status.
    Status(TaskStatus),
}

impl TaskFilter {
    /// Whether `task` passes the filter.
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Status(status) => task.status == *status,
        }
    }
}

impl From<Option<TaskStatus>> for TaskFilter {
    fn from(status: Option<TaskStatus>) -> Self {
        status.map_or(TaskFilter::All, TaskFilter::Status)
    }
}

/// The task list, owning its tasks for the lifetime of a session.
#[derive(Debug, Clone, Default)]
pub struct TaskBoard {
    tasks: Vec<Task>,
}

impl TaskBoard {
    /// Create a board from a list of tasks.
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// All tasks, in their original order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Tasks passing `filter`, in their original order.
    pub fn filter(&self, filter: TaskFilter) -> Vec<&Task> {
        self.tasks.iter().filter(|t| filter.matches(t)).collect()
    }

    /// Find a task by its id.
    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Advance the status of the task with `id` by one step.
    ///
    /// Returns the updated task, or `None` if no task has that id.
    pub fn cycle(&mut self, id: &str) -> Option<&Task> {
        let task = self.tasks.iter_mut().find(|t| t.id == id)?;
        let next = task.status.next();
        tracing::debug!(id, from = %task.status, to = %next, "cycling task status");
        task.status = next;
        Some(task)
    }

    /// Number of tasks with `status`.
    pub fn count(&self, status: TaskStatus) -> usize {
        self.tasks.iter().filter(|t| t.status == status).count()
    }

    /// Number of tasks on the board.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the board has no tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
