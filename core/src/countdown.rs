// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::fmt;

use chrono::{Datelike, NaiveDateTime, TimeDelta};

use crate::LaunchConfig;

/// Time left until the launch, split into calendar units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Countdown {
    /// Whole days.
    pub days: i64,
    /// Hours after the whole days, 0 to 23.
    pub hours: i64,
    /// Minutes after the whole hours, 0 to 59.
    pub minutes: i64,
    /// Seconds after the whole minutes, 0 to 59.
    pub seconds: i64,
}

impl Countdown {
    /// The time from `now` until `target`, zero once the target has passed.
    pub fn between(now: NaiveDateTime, target: NaiveDateTime) -> Self {
        let left = (target - now).max(TimeDelta::zero());
        let total = left.num_seconds();
        Self {
            days: total / 86_400,
            hours: total % 86_400 / 3_600,
            minutes: total % 3_600 / 60,
            seconds: total % 60,
        }
    }

    /// Whether the launch has been reached.
    pub fn is_over(&self) -> bool {
        self.days == 0 && self.hours == 0 && self.minutes == 0 && self.seconds == 0
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}d {}h {}m {}s",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// The next launch instant as seen from `now`.
///
/// A month/day launch date is resolved in the year of `now` and moves to the
/// first following year where it exists once that instant has passed, so
/// "02-29" lands on the next leap year. A full date is used as is.
pub fn next_launch(
    launch: &LaunchConfig,
    now: NaiveDateTime,
) -> Result<NaiveDateTime, Box<dyn Error>> {
    if launch.date.has_year() {
        return Ok(launch.date.resolve(now.year())?.and_time(launch.time));
    }

    // leap days recur at least once every 8 years
    for year in now.year()..=now.year() + 8 {
        let Ok(date) = launch.date.resolve(year) else {
            continue;
        };
        let next = date.and_time(launch.time);
        if next >= now {
            if year != now.year() {
                tracing::debug!(%next, "launch not ahead this year, rolling over");
            }
            return Ok(next);
        }
    }
    Err(format!("Launch date {} never occurs after {now}", launch.date).into())
}
