// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Schedule generator integration tests.
//!
//! Properties that must hold for any window, plus the default campaign
//! scenario and window boundaries.

mod boundary;
mod properties;
mod scenario;

use chrono::NaiveDate;
use launchcmd_core::CampaignWindow;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn window(kickoff: NaiveDate, start: NaiveDate, end: NaiveDate) -> CampaignWindow {
    CampaignWindow {
        kickoff,
        start,
        end,
    }
}
