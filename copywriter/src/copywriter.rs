// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::brief::{CampaignContext, CopyBrief, CopyMode};
use crate::error::CopywriterError;
use crate::generator::TextGenerator;

/// Shown when the generator returns no text.
pub const FALLBACK_COPY: &str = "No copy was generated.";

/// Drafts campaign copy with a text generator.
///
/// Each call to [`Copywriter::draft`] makes at most one request; there is no
/// retry and no history between calls.
#[derive(Debug)]
pub struct Copywriter<G> {
    generator: G,
    context: CampaignContext,
}

impl<G: TextGenerator> Copywriter<G> {
    /// Creates a copywriter with the default campaign context.
    pub fn new(generator: G) -> Self {
        Self::with_context(generator, CampaignContext::default())
    }

    /// Creates a copywriter with a custom campaign context.
    pub fn with_context(generator: G, context: CampaignContext) -> Self {
        Self { generator, context }
    }

    /// The campaign context prompts start with.
    pub fn context(&self) -> &CampaignContext {
        &self.context
    }

    /// Draft copy of the given `mode` from the user's `details`.
    pub async fn draft(&self, mode: CopyMode, details: &str) -> Result<String, CopywriterError> {
        let details = details.trim();
        if details.is_empty() {
            return Err(CopywriterError::EmptyBrief);
        }

        let brief = CopyBrief {
            context: &self.context,
            mode,
            details,
        };
        tracing::info!(%mode, "drafting copy");
        let text = self.generator.generate(&brief.prompt()).await?;
        if text.trim().is_empty() {
            tracing::warn!(%mode, "generator returned no text");
            return Ok(FALLBACK_COPY.to_string());
        }
        Ok(text)
    }
}
