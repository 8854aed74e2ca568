// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg, value_parser};
use colored::Colorize;
use launchcmd_core::{Campaign, CampaignWindow, ConfigDate, ScheduleEvent};

use crate::config::Config;
use crate::event_formatter::EventFormatter;
use crate::util::{ArgOutputFormat, parse_date};

#[derive(Debug, Clone, Copy)]
pub struct CmdSchedule {
    pub year: Option<i32>,
    pub from: Option<ConfigDate>,
    pub to: Option<ConfigDate>,
    pub upcoming: bool,
    pub output_format: ArgOutputFormat,
}

impl CmdSchedule {
    pub const NAME: &str = "schedule";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("cal")
            .about("Show the content calendar")
            .long_about(
                "\
Show the content calendar: the kickoff events followed by the recurring content of the \
campaign window. Dates are YYYY-MM-DD or MM-DD, the latter in the campaign year.",
            )
            .arg(
                arg!(-y --year <YEAR> "Generate the calendar of another campaign year")
                    .value_parser(value_parser!(i32)),
            )
            .arg(arg!(--from <DATE> "First day of recurring content"))
            .arg(arg!(--to <DATE> "Last day of recurring content, inclusive"))
            .arg(arg!(-u --upcoming "Hide entries before today"))
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        let date = |id: &str| {
            matches
                .get_one::<String>(id)
                .map(|s| parse_date(s))
                .transpose()
        };

        Ok(Self {
            year: matches.get_one("year").copied(),
            from: date("from")?,
            to: date("to")?,
            upcoming: matches.get_flag("upcoming"),
            output_format: ArgOutputFormat::from(matches),
        })
    }

    pub async fn run(self, campaign: &mut Campaign, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "generating schedule...");
        let window = self.window(campaign, config)?;
        let events = self.events(campaign, window);

        if self.output_format == ArgOutputFormat::Table {
            if events.is_empty() {
                println!("{}", "No schedule entries found".italic());
                return Ok(());
            }
            println!(
                "{} {} to {}, kickoff {}",
                "►".green(),
                window.start.format("%Y-%m-%d"),
                window.end.format("%Y-%m-%d"),
                window.kickoff.format("%Y-%m-%d"),
            );
        }

        let formatter = EventFormatter::new(campaign.today()).with_output_format(self.output_format);
        println!("{}", formatter.format(&events));
        Ok(())
    }

    /// The window to generate, the configured one unless overridden.
    fn window(&self, campaign: &Campaign, config: &Config) -> Result<CampaignWindow, Box<dyn Error>> {
        let (year, mut window) = match self.year {
            Some(year) => (year, config.core.schedule.window(year)?),
            None => (campaign.config().year(campaign.today()), campaign.window()),
        };

        if let Some(from) = self.from {
            window.start = from.resolve(year)?;
        }
        if let Some(to) = self.to {
            window.end = to.resolve(year)?;
        }
        if window.start > window.end {
            tracing::warn!(start = %window.start, end = %window.end, "empty recurrence window");
        }
        Ok(window)
    }

    fn events(&self, campaign: &Campaign, window: CampaignWindow) -> Vec<ScheduleEvent> {
        let today = campaign.today();
        let mut events = campaign.clone().with_window(window).schedule();
        if self.upcoming {
            events.retain(|e| !e.is_past(today));
        }
        events
    }
}
