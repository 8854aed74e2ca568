// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt::Display;

/// A stage of the launch plan.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Phase {
    /// Position in the plan, starting at 1.
    pub id: u32,

    /// Name of the phase.
    pub name: String,

    /// Human readable date range, e.g. "02/01 - 03/19".
    pub date_range: String,

    /// What happens during the phase.
    pub description: String,

    /// Whether the phase is done, running or ahead.
    pub status: PhaseStatus,
}

/// Progress of a phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PhaseStatus {
    /// Not started yet.
    Upcoming,

    /// Currently running.
    Active,

    /// Finished.
    Completed,
}

impl Display for PhaseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PhaseStatus::Upcoming => "upcoming",
            PhaseStatus::Active => "active",
            PhaseStatus::Completed => "completed",
        };
        write!(f, "{s}")
    }
}
