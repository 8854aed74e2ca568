// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! In-memory mock data the campaign starts from.

use crate::{
    InterestLevel, Lead, LeadStatus, Metric, Phase, PhaseStatus, Priority, Task, TaskCategory,
    TaskStatus,
};

/// The three phases of the launch plan.
pub fn seed_phases() -> Vec<Phase> {
    let phase = |id, name: &str, date_range: &str, description: &str, status| Phase {
        id,
        name: name.to_string(),
        date_range: date_range.to_string(),
        description: description.to_string(),
        status,
    };

    vec![
        phase(
            1,
            "Phase 1: Anticipation",
            "Jan - Feb",
            "Warm up the audience and prepare.",
            PhaseStatus::Completed,
        ),
        phase(
            2,
            "Phase 2: Awareness",
            "02/01 - 03/19",
            "Education, WhatsApp groups and the application form.",
            PhaseStatus::Active,
        ),
        phase(
            3,
            "Phase 3: Conversion",
            "03/19",
            "In-person launch cocktail (SP) and sales.",
            PhaseStatus::Upcoming,
        ),
    ]
}

/// The launch checklist.
pub fn seed_tasks() -> Vec<Task> {
    use Priority::{High, Medium};
    use TaskCategory::{Content, Crm, Operations, Traffic};
    use TaskStatus::{Done, InProgress, Todo};

    let task = |id: &str, title: &str, assignee: &str, status, priority, category| Task {
        id: id.to_string(),
        title: title.to_string(),
        assignee: assignee.to_string(),
        status,
        priority,
        category,
    };

    vec![
        task("1", "List every contact and their interest (CRM)", "Joyce Brandão", Todo, High, Crm),
        task("2", "1:1 outreach for the reservation fee", "Joyce Brandão", InProgress, High, Crm),
        task("3", "Write the message copy with date + link", "High Copy", Done, High, Content),
        task("4", "Build the application form", "Joyce Brandão", Done, Medium, Operations),
        task("5", "Create new Instagram content", "High Copy", InProgress, Medium, Content),
        task("6", "Create 3 story sequences", "High Copy", Todo, Medium, Content),
        task("7", "Create 10 ads (5 video, 5 static)", "High Copy", Todo, High, Traffic),
    ]
}

/// The campaign KPIs.
pub fn seed_metrics() -> Vec<Metric> {
    let metric = |label: &str, current, target, unit: &str| Metric {
        label: label.to_string(),
        current,
        target,
        unit: unit.to_string(),
    };

    vec![
        metric("WhatsApp group", 206, 500, "members"),
        metric("Applications", 62, 80, "forms"),
        metric("Confirmed (event)", 15, 60, "people"),
        metric("Buyers", 0, 10, "sales"),
    ]
}

/// The lead list.
pub fn seed_leads() -> Vec<Lead> {
    let lead = |id: &str, name: &str, phone: &str, status, notes: &str, interest| Lead {
        id: id.to_string(),
        name: name.to_string(),
        phone: phone.to_string(),
        status,
        notes: notes.to_string(),
        interest: InterestLevel::new(interest),
    };

    vec![
        lead("1", "Fernanda Silva", "11 99999-9999", LeadStatus::Confirmed, "Bought a ticket", 5),
        lead("2", "Roberto Almeida", "21 98888-8888", LeadStatus::Applied, "Waiting for selection", 4),
        lead("3", "Juliana Costa", "11 97777-7777", LeadStatus::Interested, "Asked for details via DM", 3),
        lead("4", "Marcos Pereira", "31 96666-6666", LeadStatus::Buyer, "Paid the reservation fee", 5),
    ]
}
