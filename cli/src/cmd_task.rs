// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{Arg, ArgMatches, Command, arg};
use colored::Colorize;
use launchcmd_core::{Campaign, TaskFilter, TaskStatus};

use crate::task_formatter::TaskFormatter;
use crate::util::ArgOutputFormat;

const STATUS_ALL: &str = "all";

#[derive(Debug, Clone, Copy)]
pub struct CmdTaskList {
    pub status: Option<TaskStatus>,
    pub output_format: ArgOutputFormat,
}

impl CmdTaskList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List tasks")
            .arg(arg_status())
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            status: get_status(matches),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run(self, campaign: &mut Campaign) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing tasks...");
        let board = campaign.tasks();
        let tasks = board.filter(TaskFilter::from(self.status));

        if self.output_format == ArgOutputFormat::Table {
            if tasks.is_empty() {
                println!("{}", "No tasks found".italic());
                return Ok(());
            }
            println!(
                "{} {} todo, {} in progress, {} done",
                "►".green(),
                board.count(TaskStatus::Todo),
                board.count(TaskStatus::InProgress),
                board.count(TaskStatus::Done),
            );
        }

        let formatter = TaskFormatter::new().with_output_format(self.output_format);
        println!("{}", formatter.format(&tasks));
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdTaskCycle {
    pub ids: Vec<String>,
    pub output_format: ArgOutputFormat,
}

impl CmdTaskCycle {
    pub const NAME: &str = "cycle";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Move tasks to their next status: todo, in progress, done, todo")
            .long_about(
                "\
Move tasks to their next status: todo, in progress, done, todo. Changes are kept in memory \
for this run only.",
            )
            .arg(arg!(<ID>... "The ids of the tasks to cycle"))
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        let ids = matches
            .get_many::<String>("ID")
            .map(|ids| ids.map(|id| id.trim_start_matches('#').to_string()).collect())
            .unwrap_or_default();

        Self {
            ids,
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run(self, campaign: &mut Campaign) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "cycling tasks...");
        if let Some(id) = self.ids.iter().find(|id| campaign.tasks().get(id).is_none()) {
            return Err(format!("Task not found: #{id}").into());
        }

        let mut updated = Vec::with_capacity(self.ids.len());
        for id in &self.ids {
            if let Some(task) = campaign.tasks_mut().cycle(id) {
                updated.push(task.clone());
            }
        }

        let formatter = TaskFormatter::new().with_output_format(self.output_format);
        println!("{}", formatter.format(&updated));
        Ok(())
    }
}

fn arg_status() -> Arg {
    arg!(-s --status <STATUS> "Only show tasks with this status")
        .value_parser([STATUS_ALL, "todo", "in-progress", "done"])
        .default_value(STATUS_ALL)
}

fn get_status(matches: &ArgMatches) -> Option<TaskStatus> {
    matches
        .get_one::<String>("status")
        .and_then(|s| s.parse().ok())
}
