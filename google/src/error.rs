// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

/// People API client errors.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoogleError {
    /// HTTP layer error.
    Http(String),

    /// JSON encoding/decoding error.
    Json(String),

    /// The token was rejected or lacks the contacts scope.
    Auth(String),

    /// Resource not found.
    NotFound(String),

    /// Precondition failed (etag mismatch).
    PreconditionFailed(String),

    /// Invalid response from server.
    InvalidResponse(String),

    /// Configuration error.
    Config(String),
}

impl fmt::Display for GoogleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(e) => write!(f, "HTTP error: {e}"),
            Self::Json(e) => write!(f, "JSON error: {e}"),
            Self::Auth(e) => write!(f, "Authentication failed: {e}"),
            Self::NotFound(e) => write!(f, "Resource not found: {e}"),
            Self::PreconditionFailed(e) => write!(f, "Precondition failed: {e}"),
            Self::InvalidResponse(e) => write!(f, "Invalid server response: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
        }
    }
}

impl std::error::Error for GoogleError {}

impl From<reqwest::Error> for GoogleError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::Json(e.to_string())
        } else {
            Self::Http(e.to_string())
        }
    }
}

impl From<serde_json::Error> for GoogleError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e.to_string())
    }
}
