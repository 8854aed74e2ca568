// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

mod dashboard;
mod workflows;

use chrono::{DateTime, Local, TimeZone};
use launchcmd_core::{Campaign, Config};

pub fn local(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Local> {
    Local.with_ymd_and_hms(y, m, d, h, min, s).single().unwrap()
}

pub fn campaign_at(now: DateTime<Local>) -> Campaign {
    Campaign::with_now(Config::default(), now).unwrap()
}
