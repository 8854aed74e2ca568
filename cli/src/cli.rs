// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use futures::{FutureExt, future::BoxFuture};
use launchcmd_core::{APP_NAME, Campaign};
use tracing_subscriber::EnvFilter;

use crate::cmd_dashboard::CmdDashboard;
use crate::cmd_draft::CmdDraft;
use crate::cmd_generate_completion::CmdGenerateCompletion;
use crate::cmd_lead::CmdLeadList;
use crate::cmd_schedule::CmdSchedule;
use crate::cmd_task::{CmdTaskCycle, CmdTaskList};
use crate::config::{Config, parse_config};

const LOG_ENV: &str = "LAUNCHCMD_LOG";

/// Run the LaunchCommand command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    init_tracing();
    match Cli::parse() {
        Ok(cli) => {
            if let Err(e) = cli.run().await {
                println!("{} {}", "Error:".red(), e);
            }
        }
        Err(e) => println!("{} {}", "Error:".red(), e),
    };
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Coordinate a product-launch campaign: schedule, tasks, leads and copy.")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false) // allow default to dashboard
            .arg_required_else_help(false)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/launchcmd/config.toml on Linux and \
MacOS, %APPDATA%/launchcmd/config.toml on Windows. Built-in defaults are used when no file exists.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .subcommand(CmdDashboard::command())
            .subcommand(
                Command::new("task")
                    .alias("t")
                    .about("Manage the launch checklist")
                    .arg_required_else_help(true)
                    .subcommand_required(true)
                    .subcommand(CmdTaskList::command())
                    .subcommand(CmdTaskCycle::command()),
            )
            .subcommand(CmdSchedule::command())
            .subcommand(
                Command::new("lead")
                    .alias("l")
                    .about("Browse the lead list")
                    .arg_required_else_help(true)
                    .subcommand_required(true)
                    .subcommand(CmdLeadList::command()),
            )
            .subcommand(CmdDraft::command())
            .subcommand(CmdGenerateCompletion::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdDashboard::NAME, matches)) => Dashboard(CmdDashboard::from(matches)),
            Some(("task", matches)) => match matches.subcommand() {
                Some((CmdTaskList::NAME, matches)) => TaskList(CmdTaskList::from(matches)),
                Some((CmdTaskCycle::NAME, matches)) => TaskCycle(CmdTaskCycle::from(matches)),
                _ => unreachable!(),
            },
            Some((CmdSchedule::NAME, matches)) => Schedule(CmdSchedule::from(matches)?),
            Some(("lead", matches)) => match matches.subcommand() {
                Some((CmdLeadList::NAME, matches)) => LeadList(CmdLeadList::from(matches)),
                _ => unreachable!(),
            },
            Some((CmdDraft::NAME, matches)) => Draft(CmdDraft::from(matches)),
            Some((CmdGenerateCompletion::NAME, matches)) => {
                GenerateCompletion(CmdGenerateCompletion::from(matches))
            }
            None => Dashboard(CmdDashboard),
            _ => unreachable!(),
        };

        let config = matches.get_one("config").cloned();
        Ok(Cli { config, command })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Show the dashboard
    Dashboard(CmdDashboard),

    /// List tasks
    TaskList(CmdTaskList),

    /// Advance task statuses
    TaskCycle(CmdTaskCycle),

    /// Show the content calendar
    Schedule(CmdSchedule),

    /// List leads
    LeadList(CmdLeadList),

    /// Draft marketing copy
    Draft(CmdDraft),

    /// Generate shell completion
    GenerateCompletion(CmdGenerateCompletion),
}

impl Commands {
    /// Run the command with the given configuration
    #[rustfmt::skip]
    pub async fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            Dashboard(a) => Self::run_with(config, |x, _| a.run(x).boxed()).await,
            TaskList(a)  => Self::run_with(config, |x, _| a.run(x).boxed()).await,
            TaskCycle(a) => Self::run_with(config, |x, _| a.run(x).boxed()).await,
            Schedule(a)  => Self::run_with(config, |x, c| a.run(x, c).boxed()).await,
            LeadList(a)  => Self::run_with(config, |x, _| a.run(x).boxed()).await,
            Draft(a)     => Self::run_with(config, |x, c| a.run(x, c).boxed()).await,
            GenerateCompletion(a) => a.run(),
        }
    }

    async fn run_with<F>(config: Option<PathBuf>, f: F) -> Result<(), Box<dyn Error>>
    where
        F: for<'a> FnOnce(&'a mut Campaign, &'a Config) -> BoxFuture<'a, Result<(), Box<dyn Error>>>,
    {
        tracing::debug!("parsing configuration...");
        let config = parse_config(config).await?;
        let mut campaign = Campaign::new(config.core.clone())?;

        f(&mut campaign, &config).await
    }
}
