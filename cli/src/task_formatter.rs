// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::borrow::{Borrow, Cow};
use std::fmt;

use colored::Color;
use launchcmd_core::{Priority, Task, TaskStatus};

use crate::table::{PaddingDirection, Table, TableColumn, TableStyleBasic, TableStyleJson};
use crate::util::ArgOutputFormat;

#[derive(Debug)]
pub struct TaskFormatter {
    columns: Vec<TaskColumn>,
    format: ArgOutputFormat,
}

impl TaskFormatter {
    pub fn new() -> Self {
        Self {
            columns: vec![
                TaskColumn::Check,
                TaskColumn::Id,
                TaskColumn::Priority,
                TaskColumn::Category,
                TaskColumn::Title,
                TaskColumn::Assignee,
            ],
            format: ArgOutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: ArgOutputFormat) -> Self {
        self.format = format;
        if format == ArgOutputFormat::Json {
            // the checkbox is for humans, json gets the status name
            self.columns.retain(|c| !matches!(c, TaskColumn::Check));
            self.columns.insert(1, TaskColumn::Status);
        }
        self
    }

    pub fn format<'a, T: Borrow<Task>>(&'a self, tasks: &'a [T]) -> Display<'a, T> {
        Display {
            tasks,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a, T> {
    tasks: &'a [T],
    formatter: &'a TaskFormatter,
}

impl<T: Borrow<Task>> fmt::Display for Display<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let columns = &self.formatter.columns;
        match self.formatter.format {
            ArgOutputFormat::Json => write!(
                f,
                "{}",
                Table::new(TableStyleJson::new(), columns, self.tasks)
            ),
            ArgOutputFormat::Table => write!(
                f,
                "{}",
                Table::new(TableStyleBasic::new(), columns, self.tasks)
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskColumn {
    Assignee,
    Category,
    Check,
    Id,
    Priority,
    Status,
    Title,
}

impl<T: Borrow<Task>> TableColumn<T> for TaskColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            TaskColumn::Assignee => "Assignee",
            TaskColumn::Category => "Category",
            TaskColumn::Check => "Check",
            TaskColumn::Id => "ID",
            TaskColumn::Priority => "Priority",
            TaskColumn::Status => "Status",
            TaskColumn::Title => "Title",
        }
        .into()
    }

    fn format<'a>(&self, data: &'a T) -> Cow<'a, str> {
        let task: &Task = data.borrow();
        match self {
            TaskColumn::Assignee => task.assignee.as_str().into(),
            TaskColumn::Category => task.category.to_string().into(),
            TaskColumn::Check => match task.status {
                TaskStatus::Todo => "[ ]",
                TaskStatus::InProgress => "[~]",
                TaskStatus::Done => "[x]",
            }
            .into(),
            TaskColumn::Id => format!("#{}", task.id).into(),
            TaskColumn::Priority => task.priority.to_string().into(),
            TaskColumn::Status => task.status.as_ref().to_string().into(),
            TaskColumn::Title => task.title.as_str().into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            TaskColumn::Id => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn get_color(&self, data: &T) -> Option<Color> {
        let task: &Task = data.borrow();
        match self {
            TaskColumn::Check | TaskColumn::Title => match task.status {
                TaskStatus::Done => Some(Color::BrightBlack),
                TaskStatus::InProgress => Some(Color::Yellow),
                TaskStatus::Todo => None,
            },
            TaskColumn::Priority => match task.priority {
                Priority::High => Some(Color::Red),
                Priority::Medium => Some(Color::Yellow),
                Priority::Low => None,
            },
            _ => None,
        }
    }
}
