// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use launchcmd_core::{
    Campaign, CampaignWindow, Config, ConfigDate, Countdown, PhaseStatus, distribution,
};

use super::{campaign_at, local};

#[test]
fn seeded_campaign() {
    let campaign = campaign_at(local(2026, 2, 10, 12, 0, 0));

    assert_eq!(campaign.phases().len(), 3);
    assert_eq!(campaign.tasks().len(), 7);
    assert_eq!(campaign.leads().leads().len(), 4);
    assert_eq!(campaign.metrics().len(), 4);

    let active = campaign.active_phase().unwrap();
    assert_eq!(active.status, PhaseStatus::Active);
    assert_eq!(active.name, "Phase 2: Awareness");
}

#[test]
fn window_follows_current_year() {
    let campaign = campaign_at(local(2027, 6, 1, 12, 0, 0));
    assert_eq!(campaign.window(), CampaignWindow::for_year(2027).unwrap());
    assert_eq!(campaign.schedule().len(), 36);
}

#[test]
fn countdown_to_launch() {
    let campaign = campaign_at(local(2026, 3, 17, 17, 58, 30));
    let countdown = campaign.countdown().unwrap();
    assert_eq!(
        countdown,
        Countdown {
            days: 2,
            hours: 1,
            minutes: 1,
            seconds: 30
        }
    );
}

#[test]
fn countdown_after_fixed_launch_is_over() {
    let mut config = Config::default();
    config.launch.date = "2026-03-19".parse().unwrap();
    let campaign = Campaign::with_now(config, local(2026, 10, 16, 12, 0, 0)).unwrap();
    assert!(campaign.countdown().unwrap().is_over());
}

#[test]
fn countdown_to_leap_day_launch_in_common_year() {
    let mut config = Config::default();
    config.launch.date = ConfigDate::MonthDay { month: 2, day: 29 };
    let campaign = Campaign::with_now(config, local(2026, 10, 16, 12, 0, 0)).unwrap();

    let countdown = campaign.countdown().unwrap();
    assert_eq!(
        countdown,
        Countdown {
            days: 501,
            hours: 7,
            minutes: 0,
            seconds: 0
        }
    );
}

#[test]
fn seats_use_configured_capacity() {
    let mut config = Config::default();
    config.seat_capacity = 3;
    let campaign = Campaign::with_now(config, local(2026, 2, 10, 12, 0, 0)).unwrap();

    let seats = campaign.seats();
    assert_eq!(seats.selected, 2); // one confirmed, one buyer
    assert_eq!(seats.capacity, 3);
    assert_eq!(seats.remaining(), 1);
}

#[test]
fn seeded_distribution_sums_to_hundred() {
    let campaign = campaign_at(local(2026, 2, 10, 12, 0, 0));
    let shares = distribution(campaign.metrics());
    assert_eq!(shares.len(), 4);

    let total: f64 = shares.iter().map(|s| s.percent).sum();
    assert!((total - 100.0).abs() < 1e-9);
    assert_eq!(shares[3].percent, 0.0);
}

#[test]
fn invalid_window_is_reported() {
    let mut config = Config::default();
    config.schedule.end = ConfigDate::MonthDay { month: 2, day: 29 };
    config.year = Some(2026);

    let err = Campaign::with_now(config, local(2026, 2, 10, 12, 0, 0)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid schedule configuration: 02-29 does not exist in 2026"
    );
}
