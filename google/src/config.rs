// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// People API authentication method.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(tag = "type")]
pub enum AuthMethod {
    /// No authentication, only useful against a local test server.
    #[serde(rename = "none")]
    #[default]
    None,
    /// OAuth access token sent as a bearer token.
    #[serde(rename = "bearer")]
    Bearer {
        /// Access token.
        token: String,
    },
}

/// People API client configuration.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct GoogleConfig {
    /// Base URL of the People API.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Authentication method.
    #[serde(default)]
    pub auth: AuthMethod,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// User agent string.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Number of connections requested per page.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_base_url() -> String {
    "https://people.googleapis.com".to_string()
}

const fn default_timeout() -> u64 {
    30
}

const fn default_page_size() -> u32 {
    1000
}

fn default_user_agent() -> String {
    concat!("contactsync-google/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for GoogleConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            auth: AuthMethod::default(),
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
            page_size: default_page_size(),
        }
    }
}
