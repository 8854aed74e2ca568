// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::Color;
use launchcmd_core::{InterestLevel, Lead, LeadStatus};

use crate::table::{Table, TableColumn, TableStyleBasic, TableStyleJson};
use crate::util::ArgOutputFormat;

#[derive(Debug)]
pub struct LeadFormatter {
    columns: Vec<LeadColumn>,
    format: ArgOutputFormat,
}

impl LeadFormatter {
    pub fn new() -> Self {
        Self {
            columns: vec![
                LeadColumn::Name,
                LeadColumn::Phone,
                LeadColumn::Status,
                LeadColumn::Interest,
                LeadColumn::Notes,
            ],
            format: ArgOutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: ArgOutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format<'a>(&'a self, leads: &'a [&'a Lead]) -> Display<'a> {
        Display {
            leads,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    leads: &'a [&'a Lead],
    formatter: &'a LeadFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let columns = &self.formatter.columns;
        match self.formatter.format {
            ArgOutputFormat::Json => write!(
                f,
                "{}",
                Table::new(TableStyleJson::new(), columns, self.leads)
            ),
            ArgOutputFormat::Table => write!(
                f,
                "{}",
                Table::new(TableStyleBasic::new().with_header(true), columns, self.leads)
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadColumn {
    Interest,
    Name,
    Notes,
    Phone,
    Status,
}

impl<'l> TableColumn<&'l Lead> for LeadColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            LeadColumn::Interest => "Interest",
            LeadColumn::Name => "Name",
            LeadColumn::Notes => "Notes",
            LeadColumn::Phone => "Phone",
            LeadColumn::Status => "Status",
        }
        .into()
    }

    fn format<'a>(&self, data: &'a &'l Lead) -> Cow<'a, str> {
        match self {
            LeadColumn::Interest => stars(data.interest).into(),
            LeadColumn::Name => data.name.as_str().into(),
            LeadColumn::Notes => data.notes.as_str().into(),
            LeadColumn::Phone => data.phone.as_str().into(),
            LeadColumn::Status => data.status.label().into(),
        }
    }

    fn get_color(&self, data: &&'l Lead) -> Option<Color> {
        match (self, data.status) {
            (LeadColumn::Status, LeadStatus::Buyer) => Some(Color::Green),
            (LeadColumn::Status, LeadStatus::Confirmed) => Some(Color::Cyan),
            (LeadColumn::Interest, _) => Some(Color::Yellow),
            _ => None,
        }
    }
}

fn stars(level: InterestLevel) -> String {
    let filled = usize::from(level.get());
    let empty = usize::from(InterestLevel::MAX) - filled;
    format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
}
