// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::{Deserialize, de};

use crate::CampaignWindow;

/// The name of the LaunchCommand application.
pub const APP_NAME: &str = "launchcmd";

const DEFAULT_SEAT_CAPACITY: u32 = 30;

/// Configuration for the campaign.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    /// Campaign year used to resolve month/day dates, defaults to the
    /// current year.
    #[serde(default)]
    pub year: Option<i32>,

    /// Number of seats at the in-person launch event.
    #[serde(default = "default_seat_capacity")]
    pub seat_capacity: u32,

    /// Bounds of the content calendar.
    #[serde(default)]
    pub schedule: ScheduleConfig,

    /// When the launch event takes place.
    #[serde(default)]
    pub launch: LaunchConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            year: None,
            seat_capacity: DEFAULT_SEAT_CAPACITY,
            schedule: ScheduleConfig::default(),
            launch: LaunchConfig::default(),
        }
    }
}

impl Config {
    /// The campaign year, falling back to the year of `today`.
    pub fn year(&self, today: NaiveDate) -> i32 {
        self.year.unwrap_or_else(|| today.year())
    }

    /// Resolve the schedule bounds into a concrete window.
    pub fn window(&self, today: NaiveDate) -> Result<CampaignWindow, Box<dyn Error>> {
        self.schedule.window(self.year(today))
    }
}

fn default_seat_capacity() -> u32 {
    DEFAULT_SEAT_CAPACITY
}

/// Dates the content calendar is generated between.
#[derive(Debug, Clone, Copy, serde::Deserialize)]
pub struct ScheduleConfig {
    /// Date of the fixed kickoff events.
    #[serde(default = "ScheduleConfig::default_kickoff")]
    pub kickoff: ConfigDate,

    /// First day of recurring content.
    #[serde(default = "ScheduleConfig::default_start")]
    pub start: ConfigDate,

    /// Last day of recurring content, inclusive.
    #[serde(default = "ScheduleConfig::default_end")]
    pub end: ConfigDate,
}

impl ScheduleConfig {
    const fn default_kickoff() -> ConfigDate {
        ConfigDate::MonthDay { month: 1, day: 30 }
    }

    const fn default_start() -> ConfigDate {
        ConfigDate::MonthDay { month: 2, day: 2 }
    }

    const fn default_end() -> ConfigDate {
        ConfigDate::MonthDay { month: 3, day: 19 }
    }

    /// Resolve the bounds against `year`.
    pub fn window(&self, year: i32) -> Result<CampaignWindow, Box<dyn Error>> {
        Ok(CampaignWindow {
            kickoff: self.kickoff.resolve(year)?,
            start: self.start.resolve(year)?,
            end: self.end.resolve(year)?,
        })
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            kickoff: Self::default_kickoff(),
            start: Self::default_start(),
            end: Self::default_end(),
        }
    }
}

/// Date and time of the launch event.
#[derive(Debug, Clone, Copy, serde::Deserialize)]
pub struct LaunchConfig {
    /// The event date. A month/day date moves to the next year once it has
    /// passed.
    #[serde(default = "LaunchConfig::default_date")]
    pub date: ConfigDate,

    /// Local start time of the event.
    #[serde(
        default = "LaunchConfig::default_time",
        deserialize_with = "deserialize_time"
    )]
    pub time: NaiveTime,
}

impl LaunchConfig {
    const fn default_date() -> ConfigDate {
        ConfigDate::MonthDay { month: 3, day: 19 }
    }

    fn default_time() -> NaiveTime {
        NaiveTime::from_hms_opt(19, 0, 0).unwrap_or_default()
    }
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            date: Self::default_date(),
            time: Self::default_time(),
        }
    }
}

/// A date in the config, either a full date or a month/day pair resolved
/// against the campaign year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigDate {
    /// A month and a day, e.g. "03-19".
    MonthDay {
        /// Month, from 1 to 12.
        month: u32,
        /// Day of the month.
        day: u32,
    },

    /// A full date, e.g. "2026-03-19".
    Date(NaiveDate),
}

impl ConfigDate {
    /// The date in `year`. A full date ignores `year`.
    pub fn resolve(&self, year: i32) -> Result<NaiveDate, Box<dyn Error>> {
        match *self {
            ConfigDate::Date(date) => Ok(date),
            ConfigDate::MonthDay { month, day } => NaiveDate::from_ymd_opt(year, month, day)
                .ok_or_else(|| format!("{month:02}-{day:02} does not exist in {year}").into()),
        }
    }

    /// Whether the date carries its own year.
    pub fn has_year(&self) -> bool {
        matches!(self, ConfigDate::Date(_))
    }
}

impl FromStr for ConfigDate {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Ok(ConfigDate::Date(date));
        }

        let (m, d) = s
            .split_once('-')
            .ok_or_else(|| format!("Invalid date format: {s}"))?;
        let month: u32 = m.trim().parse()?;
        let day: u32 = d.trim().parse()?;

        // 2000 is a leap year, so Feb 29 is accepted here and checked on resolve
        if NaiveDate::from_ymd_opt(2000, month, day).is_none() {
            return Err(format!("Invalid month/day: {s}").into());
        }
        Ok(ConfigDate::MonthDay { month, day })
    }
}

impl fmt::Display for ConfigDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigDate::MonthDay { month, day } => write!(f, "{month:02}-{day:02}"),
            ConfigDate::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
        }
    }
}

impl<'de> serde::Deserialize<'de> for ConfigDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct DateVisitor;

        impl de::Visitor<'_> for DateVisitor {
            type Value = ConfigDate;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str(r#"a date string like "03-19" or "2026-03-19""#)
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                value
                    .parse()
                    .map_err(|e: Box<dyn Error>| de::Error::custom(e.to_string()))
            }
        }

        deserializer.deserialize_str(DateVisitor)
    }
}

fn deserialize_time<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    NaiveTime::parse_from_str(s.trim(), "%H:%M")
        .map_err(|e| de::Error::custom(format!("invalid time {s:?}, expected HH:MM: {e}")))
}
