// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::{Color, Colorize};
use unicode_width::UnicodeWidthStr;

/// A table of `data` rendered with one of the table styles.
#[derive(Debug)]
pub struct Table<'a, S, C, T> {
    style: S,
    columns: &'a [C],
    data: &'a [T],
}

impl<'a, S, C, T> Table<'a, S, C, T>
where
    S: TableStyle,
    C: TableColumn<T>,
{
    pub fn new(style: S, columns: &'a [C], data: &'a [T]) -> Self {
        Self {
            style,
            columns,
            data,
        }
    }
}

impl<S, C, T> fmt::Display for Table<'_, S, C, T>
where
    S: TableStyle,
    C: TableColumn<T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.style.fmt_table(f, self.columns, self.data)
    }
}

pub trait TableColumn<T> {
    fn name(&self) -> Cow<'_, str>;

    fn format<'a>(&self, data: &'a T) -> Cow<'a, str>;

    fn padding_direction(&self) -> PaddingDirection {
        PaddingDirection::Left
    }

    fn get_color(&self, _data: &T) -> Option<Color> {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingDirection {
    Left,
    Right,
}

pub trait TableStyle {
    fn fmt_table<C, T>(&self, f: &mut fmt::Formatter<'_>, columns: &[C], data: &[T]) -> fmt::Result
    where
        C: TableColumn<T>;
}

/// Plain text table: aligned, colored cells separated by spaces.
#[derive(Debug, Clone, Copy)]
pub struct TableStyleBasic {
    separator: &'static str,
    header: bool,
}

impl TableStyleBasic {
    pub fn new() -> Self {
        Self {
            separator: " ",
            header: false,
        }
    }

    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }
}

impl TableStyle for TableStyleBasic {
    fn fmt_table<C, T>(&self, f: &mut fmt::Formatter<'_>, columns: &[C], data: &[T]) -> fmt::Result
    where
        C: TableColumn<T>,
    {
        let header: Vec<Cow<'_, str>> = columns.iter().map(|c| c.name()).collect();
        let rows: Vec<Vec<Cow<'_, str>>> = data
            .iter()
            .map(|d| columns.iter().map(|c| c.format(d)).collect())
            .collect();

        let mut widths = vec![0; columns.len()];
        for row in rows.iter().chain(self.header.then_some(&header)) {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.width());
            }
        }

        let last = columns.len().saturating_sub(1);
        if self.header {
            for (j, ((col, cell), width)) in columns.iter().zip(&header).zip(&widths).enumerate() {
                let cell = pad(cell, *width, col.padding_direction(), j == last);
                write!(f, "{}", cell.as_str().bold())?;
                write!(f, "{}", if j < last { self.separator } else { "\n" })?;
            }
        }

        for (row, d) in rows.iter().zip(data) {
            for (j, ((col, cell), width)) in columns.iter().zip(row).zip(&widths).enumerate() {
                let cell = pad(cell, *width, col.padding_direction(), j == last);
                match col.get_color(d) {
                    Some(color) => write!(f, "{}", cell.as_str().color(color))?,
                    None => write!(f, "{cell}")?,
                }
                write!(f, "{}", if j < last { self.separator } else { "\n" })?;
            }
        }
        Ok(())
    }
}

/// JSON array of objects keyed by column name.
#[derive(Debug, Clone, Copy)]
pub struct TableStyleJson;

impl TableStyleJson {
    pub fn new() -> Self {
        Self
    }
}

impl TableStyle for TableStyleJson {
    fn fmt_table<C, T>(&self, f: &mut fmt::Formatter<'_>, columns: &[C], data: &[T]) -> fmt::Result
    where
        C: TableColumn<T>,
    {
        let rows: Vec<serde_json::Value> = data
            .iter()
            .map(|d| {
                let obj = columns
                    .iter()
                    .map(|c| (c.name().into_owned(), c.format(d).into_owned().into()))
                    .collect();
                serde_json::Value::Object(obj)
            })
            .collect();

        let json = serde_json::to_string_pretty(&rows).map_err(|_| fmt::Error)?;
        write!(f, "{json}")
    }
}

/// Pad `cell` to `width` display columns. The last left-aligned column is
/// left as is to avoid trailing spaces.
fn pad(cell: &str, width: usize, direction: PaddingDirection, is_last: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(cell.width()));
    match direction {
        PaddingDirection::Left if is_last => cell.to_string(),
        PaddingDirection::Left => format!("{cell}{fill}"),
        PaddingDirection::Right => format!("{fill}{cell}"),
    }
}
