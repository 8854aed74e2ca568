// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use chrono::{DateTime, Local, NaiveDate};

use crate::{
    CampaignWindow, Config, Countdown, LeadBook, Metric, Phase, PhaseStatus, ScheduleEvent,
    ScheduleTemplate, SeatStats, TaskBoard, next_launch, seed_leads, seed_metrics, seed_phases,
    seed_tasks,
};

/// LaunchCommand campaign core.
///
/// Holds the in-memory campaign data for one session. Nothing is persisted.
#[derive(Debug, Clone)]
pub struct Campaign {
    now: DateTime<Local>,
    config: Config,
    window: CampaignWindow,
    template: ScheduleTemplate,
    tasks: TaskBoard,
    leads: LeadBook,
    metrics: Vec<Metric>,
    phases: Vec<Phase>,
}

impl Campaign {
    /// Creates a new campaign with the given configuration, seeded with the
    /// mock data.
    pub fn new(config: Config) -> Result<Self, Box<dyn Error>> {
        Self::with_now(config, Local::now())
    }

    /// Creates a new campaign as seen at `now`.
    pub fn with_now(config: Config, now: DateTime<Local>) -> Result<Self, Box<dyn Error>> {
        let window = config
            .window(now.date_naive())
            .map_err(|e| format!("Invalid schedule configuration: {e}"))?;

        Ok(Self {
            now,
            config,
            window,
            template: ScheduleTemplate::default(),
            tasks: TaskBoard::new(seed_tasks()),
            leads: LeadBook::new(seed_leads()),
            metrics: seed_metrics(),
            phases: seed_phases(),
        })
    }

    /// The current time in the campaign instance.
    pub fn now(&self) -> DateTime<Local> {
        self.now
    }

    /// The current local date.
    pub fn today(&self) -> NaiveDate {
        self.now.date_naive()
    }

    /// The configuration the campaign was built from.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The window the schedule is generated for.
    pub fn window(&self) -> CampaignWindow {
        self.window
    }

    /// Replace the schedule window, e.g. to preview another date range.
    pub fn with_window(mut self, window: CampaignWindow) -> Self {
        self.window = window;
        self
    }

    /// The generated content calendar for the current window.
    pub fn schedule(&self) -> Vec<ScheduleEvent> {
        self.template.generate(&self.window)
    }

    /// The task list.
    pub fn tasks(&self) -> &TaskBoard {
        &self.tasks
    }

    /// The task list, for status changes during this session.
    pub fn tasks_mut(&mut self) -> &mut TaskBoard {
        &mut self.tasks
    }

    /// The lead list.
    pub fn leads(&self) -> &LeadBook {
        &self.leads
    }

    /// Seats taken at the launch event.
    pub fn seats(&self) -> SeatStats {
        self.leads.seats(self.config.seat_capacity)
    }

    /// The campaign KPIs.
    pub fn metrics(&self) -> &[Metric] {
        &self.metrics
    }

    /// The phases of the launch plan.
    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    /// The phase currently running, if any.
    pub fn active_phase(&self) -> Option<&Phase> {
        self.phases.iter().find(|p| p.status == PhaseStatus::Active)
    }

    /// Time left until the next launch.
    pub fn countdown(&self) -> Result<Countdown, Box<dyn Error>> {
        let now = self.now.naive_local();
        let target = next_launch(&self.config.launch, now)?;
        Ok(Countdown::between(now, target))
    }
}
