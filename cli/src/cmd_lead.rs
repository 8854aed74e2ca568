// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg};
use colored::Colorize;
use launchcmd_core::{Campaign, SeatStats};

use crate::lead_formatter::LeadFormatter;
use crate::util::ArgOutputFormat;

#[derive(Debug, Clone)]
pub struct CmdLeadList {
    pub search: Option<String>,
    pub output_format: ArgOutputFormat,
}

impl CmdLeadList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List leads")
            .arg(arg!(-s --search <TERM> "Only show leads whose name or status contains the term"))
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            search: matches.get_one::<String>("search").cloned(),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub async fn run(self, campaign: &mut Campaign) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing leads...");
        let leads = campaign
            .leads()
            .search(self.search.as_deref().unwrap_or_default());

        let formatter = LeadFormatter::new().with_output_format(self.output_format);
        match self.output_format {
            ArgOutputFormat::Json => println!("{}", formatter.format(&leads)),
            ArgOutputFormat::Table => {
                if leads.is_empty() {
                    println!("{}", "No leads found".italic());
                } else {
                    print!("{}", formatter.format(&leads));
                }
                println!();
                println!("{}", format_seats(campaign.seats()));
            }
        }
        Ok(())
    }
}

fn format_seats(seats: SeatStats) -> String {
    format!(
        "{} {}/{} seats taken, {} left",
        "►".green(),
        seats.selected,
        seats.capacity,
        seats.remaining()
    )
}
