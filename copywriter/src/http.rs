// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP client wrapper with API key and error status handling.

use reqwest::{Client, RequestBuilder, Response};

use crate::config::CopywriterConfig;
use crate::error::CopywriterError;
use crate::types::ErrorBody;

const API_KEY_HEADER: &str = "x-goog-api-key";

/// HTTP client for the provider API.
#[derive(Debug)]
pub struct HttpClient {
    client: Client,
    config: CopywriterConfig,
}

impl HttpClient {
    /// Creates a new HTTP client.
    pub fn new(config: CopywriterConfig) -> Result<Self, CopywriterError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &CopywriterConfig {
        &self.config
    }

    /// Builds a POST request to `path` under the base URL, carrying the API key.
    pub fn post(&self, path: &str) -> Result<RequestBuilder, CopywriterError> {
        let api_key = self.config.api_key().ok_or(CopywriterError::MissingApiKey)?;
        let url = format!("{}{path}", self.config.base_url.trim_end_matches('/'));
        Ok(self.client.post(url).header(API_KEY_HEADER, api_key))
    }

    /// Executes a request and turns error statuses into [`CopywriterError::Api`].
    pub async fn execute(&self, req: RequestBuilder) -> Result<Response, CopywriterError> {
        let resp = req.send().await?;

        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let text = resp
            .text()
            .await
            .unwrap_or_else(|_| "Unable to read response".to_string());
        let message = match serde_json::from_str::<ErrorBody>(&text) {
            Ok(body) => body.error.message,
            Err(_) if text.trim().is_empty() => status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string(),
            Err(_) => text,
        };
        tracing::warn!(%status, error = %message, "provider returned an error");
        Err(CopywriterError::Api {
            status: status.as_u16(),
            message,
        })
    }
}
