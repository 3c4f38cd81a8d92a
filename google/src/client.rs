// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! People API client for contact operations.

use std::sync::Arc;

use reqwest::Method;

use crate::config::GoogleConfig;
use crate::error::GoogleError;
use crate::http::HttpClient;
use crate::types::{ConnectionsPage, Person};

/// Person fields requested when reading or creating contacts.
///
/// See <https://developers.google.com/people/api/rest/v1/people.connections/list>
/// for the valid values.
pub const PERSON_FIELDS: &[&str] = &[
    "addresses",
    "ageRanges",
    "biographies",
    "birthdays",
    "braggingRights",
    "coverPhotos",
    "emailAddresses",
    "events",
    "genders",
    "imClients",
    "interests",
    "locales",
    "memberships",
    "metadata",
    "names",
    "nicknames",
    "occupations",
    "organizations",
    "phoneNumbers",
    "photos",
    "relations",
    "relationshipInterests",
    "relationshipStatuses",
    "residences",
    "skills",
    "taglines",
    "urls",
];

/// People API client for reading and creating the authenticated user's contacts.
///
/// # Example
///
/// ```ignore
/// use contactsync_google::{AuthMethod, GoogleConfig, PeopleClient};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = GoogleConfig {
///     auth: AuthMethod::Bearer {
///         token: "ya29.access-token".to_string(),
///     },
///     ..Default::default()
/// };
///
/// let client = PeopleClient::new(config)?;
/// let people = client.list_all_connections().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PeopleClient {
    http: Arc<HttpClient>,
    config: GoogleConfig,
}

impl PeopleClient {
    /// Creates a new People API client.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client initialization fails.
    pub fn new(config: GoogleConfig) -> Result<Self, GoogleError> {
        let http = HttpClient::new(config.clone())?;
        Ok(Self {
            http: Arc::new(http),
            config,
        })
    }

    /// Creates a new contact and returns it as stored by Google.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response carries no resource name.
    pub async fn create_contact(&self, person: &Person) -> Result<Person, GoogleError> {
        let url = self.full_url("/v1/people:createContact");
        let fields = PERSON_FIELDS.join(",");

        let resp = self
            .http
            .execute(
                self.http
                    .build_request(Method::POST, &url)
                    .query(&[("personFields", fields.as_str())])
                    .json(person),
            )
            .await?;

        let created: Person = resp.json().await?;
        if created.resource_name.is_none() {
            return Err(GoogleError::InvalidResponse(
                "created contact has no resource name".to_string(),
            ));
        }

        tracing::debug!(resource_name = ?created.resource_name, "created google contact");
        Ok(created)
    }

    /// Fetches one page of the authenticated user's connections.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the page cannot be decoded.
    pub async fn list_connections(
        &self,
        page_token: Option<&str>,
    ) -> Result<ConnectionsPage, GoogleError> {
        let url = self.full_url("/v1/people/me/connections");
        let fields = PERSON_FIELDS.join(",");
        let page_size = self.config.page_size.to_string();

        let mut query = vec![
            ("personFields", fields.as_str()),
            ("pageSize", page_size.as_str()),
        ];
        if let Some(token) = page_token {
            query.push(("pageToken", token));
        }

        let resp = self
            .http
            .execute(self.http.build_request(Method::GET, &url).query(&query))
            .await?;

        Ok(resp.json().await?)
    }

    /// Fetches every connection, following page tokens until the last page.
    ///
    /// # Errors
    ///
    /// Returns an error if any page request fails.
    pub async fn list_all_connections(&self) -> Result<Vec<Person>, GoogleError> {
        let mut people = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let page = self.list_connections(page_token.as_deref()).await?;
            tracing::debug!(
                count = page.connections.len(),
                total = ?page.total_people,
                "fetched connections page"
            );
            people.extend(page.connections);

            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }

        Ok(people)
    }

    /// Builds full URL from a path.
    fn full_url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }
}
