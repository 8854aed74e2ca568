// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::fmt::Write;

use clap::{ArgMatches, Command};
use colored::Colorize;
use launchcmd_core::{Campaign, PhaseStatus, TaskStatus, distribution};
use unicode_width::UnicodeWidthStr;

use crate::event_formatter::{EventColumn, EventFormatter};
use crate::util::progress_bar;

const BAR_WIDTH: usize = 20;
const UPCOMING_MAX: usize = 3;

#[derive(Debug, Default, Clone, Copy)]
pub struct CmdDashboard;

impl CmdDashboard {
    pub const NAME: &str = "dashboard";

    pub fn command() -> Command {
        Command::new(Self::NAME).about(
            "Show the dashboard: countdown, KPIs, phases, leads, today's schedule and tasks",
        )
    }

    pub fn from(_matches: &ArgMatches) -> Self {
        CmdDashboard
    }

    /// Show every section of the dashboard.
    pub async fn run(self, campaign: &mut Campaign) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "generating dashboard...");

        let sections = [
            overview(campaign)?,
            kpis(campaign)?,
            phases(campaign)?,
            leads(campaign)?,
            schedule(campaign)?,
            tasks(campaign)?,
        ];
        println!("{}", sections.join("\n"));
        Ok(())
    }
}

fn overview(campaign: &Campaign) -> Result<String, Box<dyn Error>> {
    let mut out = String::new();
    let phase = campaign
        .active_phase()
        .map_or("No active phase", |p| p.name.as_str());
    writeln!(out, "🚀 {} {}", "LaunchCommand".bold(), phase.italic())?;

    let countdown = campaign.countdown()?;
    if countdown.is_over() {
        writeln!(out, " {} {}", "►".green(), "The launch is live".green().bold())?;
    } else {
        writeln!(out, " {} Launch in {}", "►".green(), countdown.to_string().bold())?;
    }
    Ok(out)
}

fn kpis(campaign: &Campaign) -> Result<String, Box<dyn Error>> {
    let mut out = String::new();
    writeln!(out, "📈 {}", "KPIs".bold())?;

    let metrics = campaign.metrics();
    let width = metrics.iter().map(|m| m.label.width()).max().unwrap_or(0);
    for m in metrics {
        let percent = m.progress();
        writeln!(
            out,
            " {label}{fill} {bar} {current}/{target} {unit} ({percent:.0}%)",
            label = m.label,
            fill = " ".repeat(width - m.label.width()),
            bar = progress_bar(percent, BAR_WIDTH).cyan(),
            current = m.current,
            target = m.target,
            unit = m.unit,
        )?;
    }
    Ok(out)
}

fn phases(campaign: &Campaign) -> Result<String, Box<dyn Error>> {
    let mut out = String::new();
    writeln!(out, "🧭 {}", "Phases".bold())?;
    for phase in campaign.phases() {
        let line = format!("{} ({})", phase.name, phase.date_range);
        match phase.status {
            PhaseStatus::Completed => writeln!(out, " {} {}", "✔".green(), line.bright_black())?,
            PhaseStatus::Active => {
                writeln!(out, " {} {}", "►".green(), line.bold())?;
                writeln!(out, "   {}", phase.description.italic())?;
            }
            PhaseStatus::Upcoming => writeln!(out, " · {line}")?,
        }
    }
    Ok(out)
}

fn leads(campaign: &Campaign) -> Result<String, Box<dyn Error>> {
    let mut out = String::new();
    writeln!(out, "👥 {}", "Lead distribution".bold())?;

    let shares = distribution(campaign.metrics());
    let width = shares.iter().map(|s| s.label.width()).max().unwrap_or(0);
    for share in &shares {
        writeln!(
            out,
            " {label}{fill} {value:>4} {percent:>5.1}%",
            label = share.label,
            fill = " ".repeat(width - share.label.width()),
            value = share.value,
            percent = share.percent,
        )?;
    }

    let seats = campaign.seats();
    writeln!(
        out,
        " {} {}/{} seats taken, {} left",
        "►".green(),
        seats.selected,
        seats.capacity,
        seats.remaining()
    )?;
    Ok(out)
}

fn schedule(campaign: &Campaign) -> Result<String, Box<dyn Error>> {
    let mut out = String::new();
    writeln!(out, "🗓️ {}", "Schedule".bold())?;

    let today = campaign.today();
    let events = campaign.schedule();
    let todays: Vec<_> = events.iter().filter(|e| e.is_today(today)).cloned().collect();
    let upcoming: Vec<_> = events
        .iter()
        .filter(|e| e.date() > today)
        .take(UPCOMING_MAX)
        .cloned()
        .collect();

    let formatter = EventFormatter::new(today).with_columns(vec![
        EventColumn::Date,
        EventColumn::Time,
        EventColumn::Channel,
        EventColumn::Title,
    ]);

    writeln!(out, " {} {}", "►".green(), "Today".italic())?;
    if todays.is_empty() {
        writeln!(out, "{}", "Nothing scheduled".italic())?;
    } else {
        write!(out, "{}", formatter.format(&todays))?;
    }

    if !upcoming.is_empty() {
        writeln!(out, " {} {}", "►".green(), "Next".italic())?;
        write!(out, "{}", formatter.format(&upcoming))?;
    }
    Ok(out)
}

fn tasks(campaign: &Campaign) -> Result<String, Box<dyn Error>> {
    let mut out = String::new();
    let board = campaign.tasks();
    writeln!(out, "✅ {}", "Tasks".bold())?;
    writeln!(
        out,
        " {} todo, {} in progress, {} done of {}",
        board.count(TaskStatus::Todo),
        board.count(TaskStatus::InProgress),
        board.count(TaskStatus::Done),
        board.len(),
    )?;
    Ok(out)
}
