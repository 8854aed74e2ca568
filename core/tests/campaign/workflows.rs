// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use launchcmd_core::{EventTiming, LeadStatus, TaskFilter, TaskStatus};

use super::{campaign_at, local};

#[test]
fn cycle_task_three_times_returns_to_start() {
    let mut campaign = campaign_at(local(2026, 2, 10, 12, 0, 0));
    let before = campaign.tasks().get("1").unwrap().status;
    assert_eq!(before, TaskStatus::Todo);

    let steps: Vec<_> = (0..3)
        .map(|_| campaign.tasks_mut().cycle("1").unwrap().status)
        .collect();
    assert_eq!(
        steps,
        vec![TaskStatus::InProgress, TaskStatus::Done, TaskStatus::Todo]
    );

    // other tasks are untouched
    assert_eq!(campaign.tasks().get("2").unwrap().status, TaskStatus::InProgress);
}

#[test]
fn cycle_unknown_task() {
    let mut campaign = campaign_at(local(2026, 2, 10, 12, 0, 0));
    assert!(campaign.tasks_mut().cycle("42").is_none());
}

#[test]
fn filter_tasks_by_status() {
    let campaign = campaign_at(local(2026, 2, 10, 12, 0, 0));
    let tasks = campaign.tasks();

    assert_eq!(tasks.filter(TaskFilter::All).len(), 7);
    let done: Vec<_> = tasks
        .filter(TaskFilter::Status(TaskStatus::Done))
        .iter()
        .map(|t| t.id.as_str())
        .collect();
    assert_eq!(done, vec!["3", "4"]);
    assert_eq!(tasks.count(TaskStatus::Todo), 3);
    assert_eq!(tasks.count(TaskStatus::InProgress), 2);
}

#[test]
fn search_leads() {
    let campaign = campaign_at(local(2026, 2, 10, 12, 0, 0));
    let leads = campaign.leads();

    let names = |term| -> Vec<String> {
        leads.search(term).iter().map(|l| l.name.clone()).collect()
    };

    assert_eq!(names("FERN"), vec!["Fernanda Silva"]);
    assert_eq!(names("buyer"), vec!["Marcos Pereira"]);
    assert_eq!(names("").len(), 4);
    assert!(names("zzz").is_empty());
    assert_eq!(leads.count(LeadStatus::Applied), 1);
}

#[test]
fn schedule_timing_at_campaign_now() {
    let campaign = campaign_at(local(2026, 2, 4, 10, 0, 0));
    let today = campaign.today();

    let timings: Vec<_> = campaign
        .schedule()
        .iter()
        .take(5)
        .map(|e| e.timing(today))
        .collect();
    assert_eq!(
        timings,
        vec![
            EventTiming::Past,  // Jan 30, 09:00
            EventTiming::Past,  // Jan 30, 18:00
            EventTiming::Past,  // Feb 2
            EventTiming::Past,  // Feb 3
            EventTiming::Today, // Feb 4
        ]
    );
}
