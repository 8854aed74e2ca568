// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg, value_parser};
use colored::Colorize;
use launchcmd_copywriter::{CampaignContext, CopyMode, Copywriter, CopywriterError, GeminiClient};
use launchcmd_core::{Campaign, next_launch};

use crate::config::Config;

const LAUNCH_CITY: &str = "São Paulo";

#[derive(Debug, Clone)]
pub struct CmdDraft {
    pub mode: CopyMode,
    pub details: String,
}

impl CmdDraft {
    pub const NAME: &str = "draft";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Draft marketing copy with the text-generation provider")
            .arg(
                arg!(<MODE> "The kind of copy to draft")
                    .value_parser(value_parser!(CopyMode)),
            )
            .arg(arg!(<DETAILS>... "What the copy should be about"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        let mode = matches
            .get_one::<CopyMode>("MODE")
            .copied()
            .unwrap_or_default();

        let details = matches
            .get_many::<String>("DETAILS")
            .map(|words| words.cloned().collect::<Vec<_>>().join(" "))
            .unwrap_or_default();

        Self { mode, details }
    }

    pub async fn run(self, campaign: &mut Campaign, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(mode = %self.mode, "drafting copy...");
        let context = campaign_context(campaign)?;

        let copy = match GeminiClient::new(config.copywriter.clone()) {
            Ok(client) => {
                Copywriter::with_context(client, context)
                    .draft(self.mode, &self.details)
                    .await
            }
            Err(e) => Err(e),
        };

        println!("{}", format_draft(copy));
        Ok(())
    }
}

/// The drafted copy, or an inline message when drafting failed.
fn format_draft(copy: Result<String, CopywriterError>) -> String {
    match copy {
        Ok(copy) => copy,
        Err(e) => format!("{} {}", "Could not draft copy:".yellow(), e),
    }
}

/// The prompt context for the current state of the campaign.
fn campaign_context(campaign: &Campaign) -> Result<CampaignContext, Box<dyn Error>> {
    let config = campaign.config();
    let launch = next_launch(&config.launch, campaign.now().naive_local())?;

    let mut context = CampaignContext {
        date: format!("{} in {LAUNCH_CITY}", launch.format("%B %-d, %Y at %H:%M")),
        seats: config.seat_capacity,
        ..CampaignContext::default()
    };
    if let Some(phase) = campaign.active_phase() {
        context.phase.clone_from(&phase.name);
    }
    Ok(context)
}

#[cfg(test)]
mod tests {
    use chrono::{Local, TimeZone};
    use launchcmd_copywriter::CopywriterConfig;
    use launchcmd_core::{Config as CoreConfig, ConfigDate};

    use super::*;

    #[test]
    fn test_parse_joins_details() {
        let cmd = Command::new("test").subcommand(CmdDraft::command());
        let matches = cmd
            .try_get_matches_from(["test", "draft", "instagram", "last", "10", "seats"])
            .unwrap();
        let sub = matches.subcommand_matches("draft").unwrap();
        let parsed = CmdDraft::from(sub);
        assert_eq!(parsed.mode, CopyMode::Instagram);
        assert_eq!(parsed.details, "last 10 seats");
    }

    #[test]
    fn test_parse_requires_details() {
        let cmd = Command::new("test").subcommand(CmdDraft::command());
        assert!(cmd.try_get_matches_from(["test", "draft", "email"]).is_err());
    }

    #[test]
    fn test_parse_unknown_mode() {
        let cmd = Command::new("test").subcommand(CmdDraft::command());
        assert!(
            cmd.try_get_matches_from(["test", "draft", "tiktok", "hello"])
                .is_err()
        );
    }

    #[test]
    fn test_campaign_context() {
        let now = Local.with_ymd_and_hms(2026, 2, 10, 12, 0, 0).unwrap();
        let config = CoreConfig {
            seat_capacity: 12,
            ..CoreConfig::default()
        };
        let campaign = Campaign::with_now(config, now).unwrap();

        let context = campaign_context(&campaign).unwrap();
        assert_eq!(context.phase, "Phase 2: Awareness");
        assert_eq!(context.date, "March 19, 2026 at 19:00 in São Paulo");
        assert_eq!(context.seats, 12);
        assert_eq!(context.tone, CampaignContext::default().tone);
    }

    #[test]
    fn test_campaign_context_after_launch() {
        let now = Local.with_ymd_and_hms(2026, 3, 20, 8, 0, 0).unwrap();
        let campaign = Campaign::with_now(CoreConfig::default(), now).unwrap();
        let context = campaign_context(&campaign).unwrap();
        assert_eq!(context.date, "March 19, 2027 at 19:00 in São Paulo");
    }

    #[tokio::test]
    async fn test_missing_api_key_is_reported_inline() {
        colored::control::set_override(false);
        let client = GeminiClient::new(CopywriterConfig::default()).unwrap();
        let copy = Copywriter::new(client)
            .draft(CopyMode::Email, "early bird")
            .await;

        assert!(matches!(copy, Err(CopywriterError::MissingApiKey)));
        assert_eq!(
            format_draft(copy),
            format!("Could not draft copy: {}", CopywriterError::MissingApiKey)
        );
    }

    #[test]
    fn test_format_draft_passes_copy_through() {
        let copy = Ok("Subject: Last seats".to_string());
        assert_eq!(format_draft(copy), "Subject: Last seats");
    }

    #[test]
    fn test_leap_day_launch_builds_context() {
        let now = Local.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap();
        let mut config = CoreConfig::default();
        config.launch.date = ConfigDate::MonthDay { month: 2, day: 29 };
        let campaign = Campaign::with_now(config, now).unwrap();

        let context = campaign_context(&campaign).unwrap();
        assert_eq!(context.date, "February 29, 2028 at 19:00 in São Paulo");
    }
}
