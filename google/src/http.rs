// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP client wrapper with authentication and status handling.

use reqwest::{Client, RequestBuilder, Response, StatusCode};

use crate::config::{AuthMethod, GoogleConfig};
use crate::error::GoogleError;

/// HTTP client for People API operations.
#[derive(Debug)]
pub struct HttpClient {
    client: Client,
    config: GoogleConfig,
}

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client creation fails.
    pub fn new(config: GoogleConfig) -> Result<Self, GoogleError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| GoogleError::Config(e.to_string()))?;
        Ok(Self { client, config })
    }

    /// Builds a request with authentication headers.
    pub fn build_request(&self, method: reqwest::Method, url: &str) -> RequestBuilder {
        let req = self.client.request(method, url);

        match &self.config.auth {
            AuthMethod::Bearer { token } => req.bearer_auth(token),
            AuthMethod::None => req,
        }
    }

    /// Executes a request and maps error statuses onto [`GoogleError`].
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or returns an error status code.
    pub async fn execute(&self, req: RequestBuilder) -> Result<Response, GoogleError> {
        let resp = req.send().await?;

        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let text = resp
            .text()
            .await
            .unwrap_or_else(|_| "Unable to read response".to_string());
        tracing::debug!(%status, body = %text, "people api request failed");

        Err(match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                GoogleError::Auth(format!("{status}: {text}"))
            }
            StatusCode::NOT_FOUND => GoogleError::NotFound(text),
            StatusCode::PRECONDITION_FAILED => GoogleError::PreconditionFailed(text),
            status => GoogleError::Http(format!("{status}: {text}")),
        })
    }
}
