// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Marketing copy drafting on top of a hosted text-generation API.

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
    clippy::indexing_slicing,
    clippy::pedantic
)]
#![allow(clippy::missing_errors_doc)]

mod brief;
mod config;
mod copywriter;
mod error;
mod generator;
mod http;
mod types;

pub use crate::brief::{CampaignContext, CopyBrief, CopyMode};
pub use crate::config::CopywriterConfig;
pub use crate::copywriter::{Copywriter, FALLBACK_COPY};
pub use crate::error::CopywriterError;
pub use crate::generator::{GeminiClient, TextGenerator};
