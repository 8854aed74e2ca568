// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Core of LaunchCommand: the campaign model, its mock data and the content
//! schedule generator.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing
)]

mod campaign;
mod config;
mod countdown;
mod lead;
mod metric;
mod phase;
mod schedule;
mod seed;
mod task;

pub use crate::campaign::Campaign;
pub use crate::config::{APP_NAME, Config, ConfigDate, LaunchConfig, ScheduleConfig};
pub use crate::countdown::{Countdown, next_launch};
pub use crate::lead::{InterestLevel, Lead, LeadBook, LeadStatus, SeatStats};
pub use crate::metric::{Metric, Share, distribution};
pub use crate::phase::{Phase, PhaseStatus};
pub use crate::schedule::{
    CampaignWindow, Category, EventKind, EventTiming, FixedEvent, RecurrenceRule, ScheduleEvent,
    ScheduleTemplate,
};
pub use crate::seed::{seed_leads, seed_metrics, seed_phases, seed_tasks};
pub use crate::task::{Priority, Task, TaskBoard, TaskCategory, TaskFilter, TaskStatus};
