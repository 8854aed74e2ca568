// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use chrono::NaiveDate;
use colored::Color;
use launchcmd_core::{EventTiming, ScheduleEvent};

use crate::table::{PaddingDirection, Table, TableColumn, TableStyleBasic, TableStyleJson};
use crate::util::ArgOutputFormat;

#[derive(Debug)]
pub struct EventFormatter {
    columns: Vec<EventColumn>,
    today: NaiveDate,
    format: ArgOutputFormat,
}

impl EventFormatter {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            columns: vec![
                EventColumn::Timing,
                EventColumn::Date,
                EventColumn::Time,
                EventColumn::Channel,
                EventColumn::Title,
            ],
            today,
            format: ArgOutputFormat::Table,
        }
    }

    pub fn with_columns(mut self, columns: Vec<EventColumn>) -> Self {
        self.columns = columns;
        self
    }

    pub fn with_output_format(mut self, format: ArgOutputFormat) -> Self {
        self.format = format;
        if format == ArgOutputFormat::Json {
            if !self.columns.contains(&EventColumn::Id) {
                self.columns.insert(0, EventColumn::Id);
            }
            if !self.columns.contains(&EventColumn::Focus) {
                self.columns.push(EventColumn::Focus);
            }
        }
        self
    }

    pub fn format<'a>(&'a self, events: &'a [ScheduleEvent]) -> Display<'a> {
        Display {
            events: events
                .iter()
                .map(|inner| EventWithTiming {
                    timing: inner.timing(self.today),
                    inner,
                })
                .collect(),
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    events: Vec<EventWithTiming<'a>>,
    formatter: &'a EventFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let columns = &self.formatter.columns;
        match self.formatter.format {
            ArgOutputFormat::Json => write!(
                f,
                "{}",
                Table::new(TableStyleJson::new(), columns, &self.events)
            ),
            ArgOutputFormat::Table => write!(
                f,
                "{}",
                Table::new(TableStyleBasic::new(), columns, &self.events)
            ),
        }
    }
}

/// A schedule entry together with where it sits relative to today.
#[derive(Debug, Clone, Copy)]
pub struct EventWithTiming<'a> {
    pub inner: &'a ScheduleEvent,
    pub timing: EventTiming,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventColumn {
    Channel,
    Date,
    Focus,
    Id,
    Time,
    Timing,
    Title,
}

impl<'e> TableColumn<EventWithTiming<'e>> for EventColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            EventColumn::Channel => "Channel",
            EventColumn::Date => "Date",
            EventColumn::Focus => "Focus",
            EventColumn::Id => "ID",
            EventColumn::Time => "Time",
            EventColumn::Timing => "Timing",
            EventColumn::Title => "Title",
        }
        .into()
    }

    fn format<'a>(&self, data: &'a EventWithTiming<'e>) -> Cow<'a, str> {
        let event = data.inner;
        match self {
            EventColumn::Channel => event.category().channel().into(),
            EventColumn::Date => event.date().format("%a %Y-%m-%d").to_string().into(),
            EventColumn::Focus => event.category().focus().into(),
            EventColumn::Id => event.id().to_string().into(),
            EventColumn::Time => event
                .time()
                .map_or(String::new(), |t| t.format("%H:%M").to_string())
                .into(),
            EventColumn::Timing => match data.timing {
                EventTiming::Past => "done",
                EventTiming::Today => "today",
                EventTiming::Upcoming => "",
            }
            .into(),
            EventColumn::Title => event.title().into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            EventColumn::Timing => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn get_color(&self, data: &EventWithTiming<'e>) -> Option<Color> {
        match data.timing {
            EventTiming::Past => Some(Color::BrightBlack),
            EventTiming::Today => Some(Color::Green),
            EventTiming::Upcoming => None,
        }
    }
}
