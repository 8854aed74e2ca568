// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveTime;
use launchcmd_core::{CampaignWindow, Category, Config, EventKind, ScheduleTemplate};

use super::date;

#[test]
fn default_campaign_2026() {
    let template = ScheduleTemplate::default();
    let w = CampaignWindow::for_year(2026).unwrap();
    assert_eq!(w.len_days(), 46);

    let events = template.generate(&w);
    let count = |kind, category| {
        events
            .iter()
            .filter(|e| e.kind() == kind && e.category() == category)
            .count()
    };

    // Feb 2 is a Monday: 6 full weeks then Mon..Thu
    assert_eq!(count(EventKind::Recurring, Category::Content), 20);
    assert_eq!(count(EventKind::Recurring, Category::Group), 14);
    assert_eq!(count(EventKind::Fixed, Category::Strategy), 1);
    assert_eq!(count(EventKind::Fixed, Category::Group), 1);
    assert_eq!(events.len(), 36);

    let first = &events[0];
    assert_eq!(first.date(), date(2026, 1, 30));
    assert_eq!(first.time(), NaiveTime::from_hms_opt(9, 0, 0));
    assert_eq!(first.title(), "Official announcement + application form link");

    let second = &events[1];
    assert_eq!(second.time(), NaiveTime::from_hms_opt(18, 0, 0));
    assert_eq!(second.title(), "WhatsApp group opens");

    let third = &events[2];
    assert_eq!(third.date(), date(2026, 2, 2));
    assert_eq!(third.id(), "insta-20260202");
    assert_eq!(third.title(), "Instagram post (feed/reels)");

    let last = events.last().unwrap();
    assert_eq!(last.date(), date(2026, 3, 19));
    assert_eq!(last.id(), "group-20260319");
    assert_eq!(last.title(), "Warm-up message in the group");
}

#[test]
fn default_campaign_2025_starts_on_first_weekday() {
    // Feb 2, 2025 is a Sunday
    let template = ScheduleTemplate::default();
    let w = CampaignWindow::for_year(2025).unwrap();
    let recurring: Vec<_> = template
        .generate(&w)
        .into_iter()
        .filter(|e| e.kind() == EventKind::Recurring)
        .collect();

    let first = recurring.first().unwrap();
    assert_eq!(first.date(), date(2025, 2, 3));
    assert_eq!(first.id(), "insta-20250203");
    assert_eq!(first.category(), Category::Content);

    let second = &recurring[1];
    assert_eq!(second.date(), date(2025, 2, 4));
    assert_eq!(second.category(), Category::Group);

    // Mar 19, 2025 is a Wednesday
    let last = recurring.last().unwrap();
    assert_eq!(last.date(), date(2025, 3, 19));
    assert_eq!(last.id(), "insta-20250319");
}

#[test]
fn window_from_toml_config() {
    const CONFIG: &str = r#"
year = 2027
seat_capacity = 40

[schedule]
kickoff = "01-29"
start = "2027-02-01"
end = "02-05"

[launch]
date = "2027-03-18"
time = "20:30"
"#;

    let config: Config = toml::from_str(CONFIG).unwrap();
    assert_eq!(config.seat_capacity, 40);
    assert_eq!(config.launch.time, NaiveTime::from_hms_opt(20, 30, 0).unwrap());

    let w = config.window(date(2026, 10, 16)).unwrap();
    assert_eq!(w.kickoff, date(2027, 1, 29));
    assert_eq!(w.start, date(2027, 2, 1));
    assert_eq!(w.end, date(2027, 2, 5));

    // 2027-02-01 is a Monday
    let ids: Vec<_> = ScheduleTemplate::default()
        .generate(&w)
        .iter()
        .map(|e| e.id().to_string())
        .collect();
    assert_eq!(
        ids,
        vec![
            "strategy-20270129-0900",
            "group-20270129-1800",
            "insta-20270201",
            "group-20270202",
            "insta-20270203",
            "group-20270204",
            "insta-20270205",
        ]
    );
}

#[test]
fn invalid_launch_time_is_rejected() {
    let err = toml::from_str::<Config>("[launch]\ntime = \"7pm\"\n").unwrap_err();
    assert!(err.to_string().contains("expected HH:MM"));
}

#[test]
fn empty_config_uses_defaults() {
    let config: Config = toml::from_str("").unwrap();
    let w = config.window(date(2026, 10, 16)).unwrap();
    assert_eq!(w, CampaignWindow::for_year(2026).unwrap());
}

#[test]
fn events_serialize_to_json() {
    let w = CampaignWindow::for_year(2026).unwrap();
    let events = ScheduleTemplate::default().generate(&w);

    let value = serde_json::to_value(&events[0]).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "id": "strategy-20260130-0900",
            "date": "2026-01-30",
            "time": "09:00:00",
            "title": "Official announcement + application form link",
            "category": "strategy",
            "kind": "fixed",
        })
    );

    let value = serde_json::to_value(&events[2]).unwrap();
    assert_eq!(value["time"], serde_json::Value::Null);
    assert_eq!(value["kind"], "recurring");
}
