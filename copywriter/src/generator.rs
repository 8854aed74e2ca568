// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;

use crate::config::CopywriterConfig;
use crate::error::CopywriterError;
use crate::http::HttpClient;
use crate::types::{GenerateContentRequest, GenerateContentResponse};

/// Something that turns a prompt into text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for `prompt`. An empty string means nothing was
    /// generated.
    async fn generate(&self, prompt: &str) -> Result<String, CopywriterError>;
}

/// Client for the Gemini `generateContent` API.
#[derive(Debug)]
pub struct GeminiClient {
    http: HttpClient,
}

impl GeminiClient {
    /// Creates a new client. A missing API key is only reported when a
    /// request is made.
    pub fn new(config: CopywriterConfig) -> Result<Self, CopywriterError> {
        Ok(Self {
            http: HttpClient::new(config)?,
        })
    }

    /// The model requests are sent to.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.http.config().model
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    #[tracing::instrument(skip_all, fields(model = %self.model()))]
    async fn generate(&self, prompt: &str) -> Result<String, CopywriterError> {
        let path = format!("/v1beta/models/{}:generateContent", self.model());
        let req = self
            .http
            .post(&path)?
            .json(&GenerateContentRequest::from_prompt(prompt));

        tracing::debug!(prompt_len = prompt.len(), "requesting copy");
        let resp = self.http.execute(req).await?;
        let body = resp.text().await?;
        let parsed: GenerateContentResponse = serde_json::from_str(&body)
            .map_err(|e| CopywriterError::InvalidResponse(e.to_string()))?;

        let text = parsed.text();
        tracing::debug!(text_len = text.len(), "copy received");
        Ok(text)
    }
}
