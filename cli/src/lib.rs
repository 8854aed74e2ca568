// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line interface of LaunchCommand.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_debug_implementations,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing
)]

mod cli;
mod cmd_dashboard;
mod cmd_draft;
mod cmd_generate_completion;
mod cmd_lead;
mod cmd_schedule;
mod cmd_task;
mod config;
mod event_formatter;
mod lead_formatter;
mod table;
mod task_formatter;
mod util;

pub use crate::cli::{Cli, Commands, run};
pub use crate::config::{Config, parse_config};
