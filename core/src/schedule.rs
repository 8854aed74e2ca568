// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt::Display, str::FromStr};

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};

/// The kind of action a schedule entry stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Social media content, e.g. a feed post or a reel.
    Content,

    /// A message in the community group.
    Group,

    /// A one-off strategic action.
    Strategy,
}

const CATEGORY_CONTENT: &str = "content";
const CATEGORY_GROUP: &str = "group";
const CATEGORY_STRATEGY: &str = "strategy";

impl Category {
    /// The channel the action is published on.
    pub fn channel(&self) -> &'static str {
        match self {
            Category::Content => "Instagram",
            Category::Group => "WhatsApp",
            Category::Strategy => "Strategy",
        }
    }

    /// What this kind of action is meant to achieve.
    pub fn focus(&self) -> &'static str {
        match self {
            Category::Content => "Focus: awareness and desire.",
            Category::Group => "Keep engagement high.",
            Category::Strategy => "Critical conversion action.",
        }
    }
}

impl AsRef<str> for Category {
    fn as_ref(&self) -> &str {
        match self {
            Category::Content => CATEGORY_CONTENT,
            Category::Group => CATEGORY_GROUP,
            Category::Strategy => CATEGORY_STRATEGY,
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for Category {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            CATEGORY_CONTENT => Ok(Category::Content),
            CATEGORY_GROUP => Ok(Category::Group),
            CATEGORY_STRATEGY => Ok(Category::Strategy),
            _ => Err(()),
        }
    }
}

/// Whether an entry is anchored to one date or produced by a recurrence rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// Anchored to a single date.
    Fixed,

    /// Generated for every matching weekday in the window.
    Recurring,
}

/// Position of an entry relative to the current local date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventTiming {
    /// The entry's date is before today.
    Past,

    /// The entry falls on today.
    Today,

    /// The entry's date is after today.
    Upcoming,
}

/// A single entry in the generated content calendar.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ScheduleEvent {
    id: String,
    date: NaiveDate,
    time: Option<NaiveTime>,
    title: String,
    category: Category,
    kind: EventKind,
}

impl ScheduleEvent {
    fn fixed(date: NaiveDate, fixed: &FixedEvent) -> Self {
        let id = format!(
            "{}-{}-{}",
            fixed.category,
            date.format("%Y%m%d"),
            fixed.time.format("%H%M")
        );
        Self {
            id,
            date,
            time: Some(fixed.time),
            title: fixed.title.clone(),
            category: fixed.category,
            kind: EventKind::Fixed,
        }
    }

    fn recurring(date: NaiveDate, rule: &RecurrenceRule) -> Self {
        Self {
            id: format!("{}-{}", rule.key, date.format("%Y%m%d")),
            date,
            time: None,
            title: rule.title.clone(),
            category: rule.category,
            kind: EventKind::Recurring,
        }
    }

    /// Identifier, stable across regenerations of the same window.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The local calendar date of the entry.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Clock time, only set for fixed entries.
    pub fn time(&self) -> Option<NaiveTime> {
        self.time
    }

    /// What should be done.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The category of the entry.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Whether the entry is fixed or recurring.
    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// The entry's date is strictly before `today`.
    pub fn is_past(&self, today: NaiveDate) -> bool {
        self.date < today
    }

    /// The entry falls on `today`.
    pub fn is_today(&self, today: NaiveDate) -> bool {
        self.date == today
    }

    /// Classify the entry against `today`.
    pub fn timing(&self, today: NaiveDate) -> EventTiming {
        if self.is_past(today) {
            EventTiming::Past
        } else if self.is_today(today) {
            EventTiming::Today
        } else {
            EventTiming::Upcoming
        }
    }
}

/// The dates a schedule is generated for.
///
/// `start` and `end` bound the recurrence window inclusively; fixed events
/// are always placed on `kickoff`, wherever it lies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct CampaignWindow {
    /// The date fixed events are anchored to.
    pub kickoff: NaiveDate,

    /// First day of the recurrence window.
    pub start: NaiveDate,

    /// Last day of the recurrence window, inclusive.
    pub end: NaiveDate,
}

impl CampaignWindow {
    /// The default window of a campaign year: kickoff on Jan 30, recurring
    /// content from Feb 2 through Mar 19.
    ///
    /// Returns `None` only for years outside the supported calendar range.
    pub fn for_year(year: i32) -> Option<Self> {
        Some(Self {
            kickoff: NaiveDate::from_ymd_opt(year, 1, 30)?,
            start: NaiveDate::from_ymd_opt(year, 2, 2)?,
            end: NaiveDate::from_ymd_opt(year, 3, 19)?,
        })
    }

    /// Number of days in the recurrence window, zero if it is empty.
    pub fn len_days(&self) -> i64 {
        ((self.end - self.start).num_days() + 1).max(0)
    }

    /// Whether `date` is inside the recurrence window.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// A one-time entry placed on the window's kickoff date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedEvent {
    /// Clock time of the entry.
    pub time: NaiveTime,

    /// What should be done.
    pub title: String,

    /// Category of the entry.
    pub category: Category,
}

/// Emits one entry on every day of the window whose weekday is listed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecurrenceRule {
    /// Short prefix used to derive entry ids.
    pub key: String,

    /// What should be done.
    pub title: String,

    /// Category of the generated entries.
    pub category: Category,

    /// Weekdays the rule fires on.
    pub weekdays: Vec<Weekday>,
}

impl RecurrenceRule {
    /// Whether the rule fires on `date`.
    pub fn matches(&self, date: NaiveDate) -> bool {
        self.weekdays.contains(&date.weekday())
    }
}

/// The fixed events and recurrence rules a calendar is expanded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleTemplate {
    /// One-time events, placed on the kickoff date.
    pub fixed: Vec<FixedEvent>,

    /// Weekday rules, applied to each day of the recurrence window.
    pub rules: Vec<RecurrenceRule>,
}

impl Default for ScheduleTemplate {
    fn default() -> Self {
        use Weekday::{Fri, Mon, Thu, Tue, Wed};

        let at = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap_or_default();
        Self {
            fixed: vec![
                FixedEvent {
                    time: at(9, 0),
                    title: "Official announcement + application form link".to_string(),
                    category: Category::Strategy,
                },
                FixedEvent {
                    time: at(18, 0),
                    title: "WhatsApp group opens".to_string(),
                    category: Category::Group,
                },
            ],
            rules: vec![
                RecurrenceRule {
                    key: "insta".to_string(),
                    title: "Instagram post (feed/reels)".to_string(),
                    category: Category::Content,
                    weekdays: vec![Mon, Wed, Fri],
                },
                RecurrenceRule {
                    key: "group".to_string(),
                    title: "Warm-up message in the group".to_string(),
                    category: Category::Group,
                    weekdays: vec![Tue, Thu],
                },
            ],
        }
    }
}

impl ScheduleTemplate {
    /// Expand the template over `window` into a calendar sorted by date.
    ///
    /// Entries sharing a date keep their insertion order, so fixed events
    /// come before recurring ones and rules fire in the order they are
    /// listed. An inverted window contributes no recurring entries.
    pub fn generate(&self, window: &CampaignWindow) -> Vec<ScheduleEvent> {
        tracing::debug!(?window, "generating schedule...");

        let capacity = self.fixed.len() + window.len_days() as usize * self.rules.len();
        let mut events = Vec::with_capacity(capacity);

        for fixed in &self.fixed {
            events.push(ScheduleEvent::fixed(window.kickoff, fixed));
        }

        for date in window.start.iter_days().take_while(|d| *d <= window.end) {
            for rule in self.rules.iter().filter(|r| r.matches(date)) {
                events.push(ScheduleEvent::recurring(date, rule));
            }
        }

        events.sort_by_key(ScheduleEvent::date);
        events
    }
}
