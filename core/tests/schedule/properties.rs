// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{Datelike, Weekday};
use launchcmd_core::{CampaignWindow, Category, EventKind, ScheduleTemplate};

use super::{date, window};

fn windows() -> Vec<CampaignWindow> {
    vec![
        CampaignWindow::for_year(2025).unwrap(),
        CampaignWindow::for_year(2026).unwrap(),
        CampaignWindow::for_year(2028).unwrap(), // leap year
        window(date(2026, 6, 1), date(2026, 5, 28), date(2026, 7, 3)),
        window(date(2026, 12, 20), date(2026, 12, 28), date(2027, 1, 6)),
    ]
}

#[test]
fn regeneration_is_identical() {
    let template = ScheduleTemplate::default();
    for w in windows() {
        assert_eq!(template.generate(&w), template.generate(&w));
    }
}

#[test]
fn recurring_weekdays_match_their_rule() {
    let template = ScheduleTemplate::default();
    for w in windows() {
        for event in template.generate(&w) {
            if event.kind() != EventKind::Recurring {
                continue;
            }

            let weekday = event.date().weekday();
            match event.category() {
                Category::Content => assert!(
                    matches!(weekday, Weekday::Mon | Weekday::Wed | Weekday::Fri),
                    "content on {weekday}: {event:?}"
                ),
                Category::Group => assert!(
                    matches!(weekday, Weekday::Tue | Weekday::Thu),
                    "group on {weekday}: {event:?}"
                ),
                Category::Strategy => panic!("no strategy rule exists: {event:?}"),
            }
        }
    }
}

#[test]
fn sorted_by_date_with_fixed_first() {
    let template = ScheduleTemplate::default();
    for w in windows() {
        let events = template.generate(&w);
        for pair in events.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            assert!(a.date() <= b.date(), "{a:?} after {b:?}");
            if a.date() == b.date() {
                assert!(
                    !(a.kind() == EventKind::Recurring && b.kind() == EventKind::Fixed),
                    "recurring {a:?} before fixed {b:?}"
                );
            }
        }
    }
}

#[test]
fn recurring_events_stay_in_window() {
    let template = ScheduleTemplate::default();
    for w in windows() {
        for event in template.generate(&w) {
            if event.kind() == EventKind::Recurring {
                assert!(w.contains(event.date()), "{event:?} outside {w:?}");
                assert!(event.time().is_none());
            }
        }
    }
}

#[test]
fn fixed_events_appear_exactly_once() {
    let template = ScheduleTemplate::default();
    for w in windows() {
        let fixed: Vec<_> = template
            .generate(&w)
            .into_iter()
            .filter(|e| e.kind() == EventKind::Fixed)
            .collect();

        assert_eq!(fixed.len(), template.fixed.len());
        assert!(fixed.iter().all(|e| e.date() == w.kickoff));
        assert!(fixed.iter().all(|e| e.time().is_some()));
    }
}

#[test]
fn every_weekday_in_window_gets_one_entry() {
    let template = ScheduleTemplate::default();
    for w in windows() {
        let events = template.generate(&w);
        for day in w.start.iter_days().take_while(|d| *d <= w.end) {
            let count = events
                .iter()
                .filter(|e| e.kind() == EventKind::Recurring && e.date() == day)
                .count();
            let expected = match day.weekday() {
                Weekday::Sat | Weekday::Sun => 0,
                _ => 1,
            };
            assert_eq!(count, expected, "{day} in {w:?}");
        }
    }
}

#[test]
fn ids_are_unique() {
    let template = ScheduleTemplate::default();
    for w in windows() {
        let events = template.generate(&w);
        let mut ids: Vec<_> = events.iter().map(|e| e.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), events.len());
    }
}

#[test]
fn fixed_events_sort_between_recurring_ones() {
    // kickoff in the middle of the recurrence window
    let template = ScheduleTemplate::default();
    let w = window(date(2026, 2, 4), date(2026, 2, 2), date(2026, 2, 6));
    let titles: Vec<_> = template
        .generate(&w)
        .iter()
        .map(|e| (e.date(), e.kind()))
        .collect();

    assert_eq!(
        titles,
        vec![
            (date(2026, 2, 2), EventKind::Recurring),
            (date(2026, 2, 3), EventKind::Recurring),
            (date(2026, 2, 4), EventKind::Fixed),
            (date(2026, 2, 4), EventKind::Fixed),
            (date(2026, 2, 4), EventKind::Recurring),
            (date(2026, 2, 5), EventKind::Recurring),
            (date(2026, 2, 6), EventKind::Recurring),
        ]
    );
}
