// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// Copy drafting errors.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum CopywriterError {
    /// No API key is configured.
    #[error("API key is not configured, set `copywriter.api_key` or GEMINI_API_KEY")]
    MissingApiKey,

    /// The brief has no details to write about.
    #[error("Nothing to write about, describe the copy you need")]
    EmptyBrief,

    /// HTTP layer error, e.g. a timeout or a refused connection.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The provider answered with an error status.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message reported by the provider.
        message: String,
    },

    /// The provider answered with a body that could not be understood.
    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for CopywriterError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e.to_string())
    }
}
