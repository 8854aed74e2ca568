// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use launchcmd_core::{Category, EventKind, ScheduleTemplate};

use super::{date, window};

#[test]
fn single_day_window_on_monday() {
    let template = ScheduleTemplate::default();
    let w = window(date(2026, 1, 30), date(2026, 2, 2), date(2026, 2, 2));
    assert_eq!(w.len_days(), 1);

    let events = template.generate(&w);
    assert_eq!(events.len(), 3);

    let last = &events[2];
    assert_eq!(last.kind(), EventKind::Recurring);
    assert_eq!(last.category(), Category::Content);
    assert_eq!(last.date(), date(2026, 2, 2));
}

#[test]
fn single_day_window_on_sunday_has_only_fixed() {
    let template = ScheduleTemplate::default();
    let w = window(date(2026, 1, 30), date(2026, 2, 1), date(2026, 2, 1));

    let events = template.generate(&w);
    assert_eq!(events.len(), 2);
    assert!(events.iter().all(|e| e.kind() == EventKind::Fixed));
}

#[test]
fn inverted_window_has_only_fixed() {
    let template = ScheduleTemplate::default();
    let w = window(date(2026, 1, 30), date(2026, 3, 19), date(2026, 2, 2));
    assert_eq!(w.len_days(), 0);

    let events = template.generate(&w);
    assert_eq!(events.len(), 2);
    assert!(events.iter().all(|e| e.kind() == EventKind::Fixed));
    assert!(events.iter().all(|e| e.date() == date(2026, 1, 30)));
}

#[test]
fn kickoff_outside_window_is_still_emitted() {
    let template = ScheduleTemplate::default();
    let w = window(date(2026, 4, 1), date(2026, 2, 2), date(2026, 2, 6));

    let events = template.generate(&w);
    let last_two: Vec<_> = events[events.len() - 2..].iter().map(|e| e.kind()).collect();
    assert_eq!(last_two, vec![EventKind::Fixed, EventKind::Fixed]);
    assert!(!w.contains(events[events.len() - 1].date()));
}

#[test]
fn empty_template_generates_nothing() {
    let template = ScheduleTemplate {
        fixed: vec![],
        rules: vec![],
    };
    let w = window(date(2026, 1, 30), date(2026, 2, 2), date(2026, 3, 19));
    assert!(template.generate(&w).is_empty());
}
