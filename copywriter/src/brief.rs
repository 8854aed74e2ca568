// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt::{self, Display};
use std::str::FromStr;

/// The kind of copy to draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum CopyMode {
    /// A short persuasive email.
    #[default]
    Email,

    /// An Instagram caption.
    Instagram,

    /// Ad headline and body options.
    Ads,
}

const MODE_EMAIL: &str = "email";
const MODE_INSTAGRAM: &str = "instagram";
const MODE_ADS: &str = "ads";

impl CopyMode {
    /// What the model is asked to do in this mode.
    #[must_use]
    pub fn instruction(self) -> &'static str {
        match self {
            CopyMode::Email => "Write a short, persuasive email with a subject line.",
            CopyMode::Instagram => "Write an Instagram post caption with hashtags.",
            CopyMode::Ads => "Write 3 headline and body options for an ad (Meta Ads).",
        }
    }
}

impl AsRef<str> for CopyMode {
    fn as_ref(&self) -> &str {
        match self {
            CopyMode::Email => MODE_EMAIL,
            CopyMode::Instagram => MODE_INSTAGRAM,
            CopyMode::Ads => MODE_ADS,
        }
    }
}

impl Display for CopyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for CopyMode {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            MODE_EMAIL => Ok(CopyMode::Email),
            MODE_INSTAGRAM => Ok(CopyMode::Instagram),
            MODE_ADS => Ok(CopyMode::Ads),
            _ => Err(()),
        }
    }
}

/// Facts about the campaign every prompt starts with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignContext {
    /// Current phase of the launch plan.
    pub phase: String,
    /// What the copy should make people do.
    pub goal: String,
    /// The launch event.
    pub event: String,
    /// When and where the event takes place.
    pub date: String,
    /// Number of in-person seats.
    pub seats: u32,
    /// Tone of voice.
    pub tone: String,
}

impl Default for CampaignContext {
    fn default() -> Self {
        Self {
            phase: "Phase 2: Awareness".to_string(),
            goal: "bring people into a WhatsApp group and have them apply through a form"
                .to_string(),
            event: "Device launch cocktail".to_string(),
            date: "March 19 in São Paulo".to_string(),
            seats: 30,
            tone: "sophisticated, urgent, exclusive".to_string(),
        }
    }
}

impl Display for CampaignContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "You are a copywriting expert for high-end product launches (High Copy)."
        )?;
        writeln!(f, "We are in {}. The goal is to {}.", self.phase, self.goal)?;
        writeln!(f, "Event: {}.", self.event)?;
        writeln!(f, "Date: {}.", self.date)?;
        writeln!(f, "In-person seats: only {} selected guests.", self.seats)?;
        write!(f, "Tone of voice: {}.", self.tone)
    }
}

/// A drafting request: campaign context, mode and the user's details.
#[derive(Debug, Clone, Copy)]
pub struct CopyBrief<'a> {
    /// The campaign context.
    pub context: &'a CampaignContext,
    /// The kind of copy.
    pub mode: CopyMode,
    /// Free-form details from the user.
    pub details: &'a str,
}

impl CopyBrief<'_> {
    /// The full prompt sent to the generator.
    #[must_use]
    pub fn prompt(&self) -> String {
        format!(
            "{}\n\nTask: {}\nUser details: {}",
            self.context,
            self.mode.instruction(),
            self.details
        )
    }
}
