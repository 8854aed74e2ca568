// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt::Display;

/// A prospective buyer tracked in the CRM.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Lead {
    /// Unique identifier.
    pub id: String,

    /// Full name.
    pub name: String,

    /// Contact phone number.
    pub phone: String,

    /// Where the lead is in the funnel.
    pub status: LeadStatus,

    /// Free-form notes.
    pub notes: String,

    /// How interested the lead seems.
    pub interest: InterestLevel,
}

/// Funnel stage of a lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadStatus {
    /// Showed interest.
    Interested,

    /// Filled in the application form.
    Applied,

    /// Confirmed a seat at the launch event.
    Confirmed,

    /// Paid.
    Buyer,
}

impl LeadStatus {
    /// Human readable label, also matched by lead search.
    pub fn label(&self) -> &'static str {
        match self {
            LeadStatus::Interested => "Interested",
            LeadStatus::Applied => "Applied",
            LeadStatus::Confirmed => "Confirmed",
            LeadStatus::Buyer => "Buyer",
        }
    }

    /// Whether the lead holds one of the in-person seats.
    pub fn is_selected(&self) -> bool {
        matches!(self, LeadStatus::Confirmed | LeadStatus::Buyer)
    }
}

impl Display for LeadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Interest on a scale from 1 to 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
#[serde(transparent)]
pub struct InterestLevel(u8);

impl InterestLevel {
    /// Lowest level.
    pub const MIN: u8 = 1;

    /// Highest level.
    pub const MAX: u8 = 5;

    /// Create a level, clamping `value` into `1..=5`.
    pub fn new(value: u8) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    /// The level as a number.
    pub fn get(&self) -> u8 {
        self.0
    }
}

/// Seats taken at the in-person launch event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct SeatStats {
    /// Leads holding a seat.
    pub selected: usize,

    /// Seats available in total.
    pub capacity: u32,
}

impl SeatStats {
    /// Seats still free, never negative.
    pub fn remaining(&self) -> usize {
        (self.capacity as usize).saturating_sub(self.selected)
    }
}

/// The lead list.
#[derive(Debug, Clone, Default)]
pub struct LeadBook {
    leads: Vec<Lead>,
}

impl LeadBook {
    /// Create a lead book from a list of leads.
    pub fn new(leads: Vec<Lead>) -> Self {
        Self { leads }
    }

    /// All leads in their original order.
    pub fn leads(&self) -> &[Lead] {
        &self.leads
    }

    /// Leads whose name or status contains `term`, ignoring case.
    ///
    /// An empty term matches every lead.
    pub fn search(&self, term: &str) -> Vec<&Lead> {
        let term = term.trim().to_lowercase();
        self.leads
            .iter()
            .filter(|l| {
                l.name.to_lowercase().contains(&term)
                    || l.status.label().to_lowercase().contains(&term)
            })
            .collect()
    }

    /// Number of leads with `status`.
    pub fn count(&self, status: LeadStatus) -> usize {
        self.leads.iter().filter(|l| l.status == status).count()
    }

    /// Seats taken out of `capacity`.
    pub fn seats(&self, capacity: u32) -> SeatStats {
        let selected = self.leads.iter().filter(|l| l.status.is_selected()).count();
        SeatStats { selected, capacity }
    }
}
