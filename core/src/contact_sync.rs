// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::fmt;
use std::str::FromStr;

use contactsync_google::PeopleClient;
use serde::Serialize;

use crate::config::Config;
use crate::contact::Contact;
use crate::error::SyncError;
use crate::file_store::FileStore;
use crate::strategy::{SyncOutcome, cozy_to_google, google_to_cozy};
use crate::synchronize::{SyncOptions, synchronize_with};

/// Which way contacts flow during a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Direction {
    /// Google to Cozy, then Cozy to Google.
    #[default]
    Both,
    /// Cozy to Google only.
    ToGoogle,
    /// Google to Cozy only.
    FromGoogle,
}

impl Direction {
    const fn from_google(self) -> bool {
        matches!(self, Self::Both | Self::FromGoogle)
    }

    const fn to_google(self) -> bool {
        matches!(self, Self::Both | Self::ToGoogle)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Both => write!(f, "both"),
            Self::ToGoogle => write!(f, "to-google"),
            Self::FromGoogle => write!(f, "from-google"),
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "both" => Ok(Self::Both),
            "to-google" => Ok(Self::ToGoogle),
            "from-google" => Ok(Self::FromGoogle),
            _ => Err(format!("Invalid direction: {s}")),
        }
    }
}

/// Outcomes of each direction that ran, positionally matching its source list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SyncReport {
    /// Outcomes for Google people, when Google to Cozy ran.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_google: Option<Vec<SyncOutcome>>,

    /// Outcomes for Cozy contacts, when Cozy to Google ran.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_google: Option<Vec<SyncOutcome>>,
}

impl SyncReport {
    /// Number of contacts created across all directions.
    #[must_use]
    pub fn created(&self) -> usize {
        [&self.from_google, &self.to_google]
            .into_iter()
            .flatten()
            .flatten()
            .filter(|a| a.is_created())
            .count()
    }
}

/// Loads both contact lists and runs the synchronization for one account.
#[derive(Debug, Clone)]
pub struct ContactSync {
    config: Config,
    store: FileStore,
    google: PeopleClient,
}

impl ContactSync {
    /// Creates a new instance with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the store cannot be opened or
    /// the Google client cannot be built.
    pub async fn new(mut config: Config) -> Result<Self, Box<dyn Error>> {
        config.normalize()?;
        let store_path = config
            .store_path
            .clone()
            .ok_or("Store path not resolved")?;

        let store = FileStore::open(&store_path)
            .await
            .map_err(|e| format!("Failed to open contact store: {e}"))?;
        let google = PeopleClient::new(config.google.clone())
            .map_err(|e| format!("Failed to initialize Google client: {e}"))?;

        tracing::debug!(account = %config.account_id, store = %store_path.display(), "initialized");
        Ok(Self {
            config,
            store,
            google,
        })
    }

    /// The configuration in use.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run settings, adjustable before [`ContactSync::run`].
    pub fn options_mut(&mut self) -> &mut SyncOptions {
        &mut self.config.sync
    }

    /// Lists the contacts of the local store.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub async fn list_contacts(&self) -> Result<Vec<Contact>, SyncError> {
        Ok(self.store.list().await?)
    }

    /// Runs the synchronization in `direction`.
    ///
    /// Google people are fetched once. Cozy contacts are listed again before each
    /// direction, so contacts pulled from Google are not pushed back.
    ///
    /// # Errors
    ///
    /// Returns the first error of either store; directions after it do not run.
    #[tracing::instrument(skip(self), fields(account = %self.config.account_id))]
    pub async fn run(&self, direction: Direction) -> Result<SyncReport, SyncError> {
        let account = &self.config.account_id;
        let options = &self.config.sync;

        let people = self.google.list_all_connections().await?;
        tracing::info!(count = people.len(), "fetched google contacts");

        let mut report = SyncReport::default();

        if direction.from_google() {
            let contacts = self.store.list().await?;
            let strategy = google_to_cozy(&self.store, account.clone());
            let outcomes = synchronize_with(&people, &contacts, &strategy, options).await?;
            report.from_google = Some(outcomes);
        }

        if direction.to_google() {
            let contacts = self.store.list().await?;
            let strategy = cozy_to_google(&self.store, &self.google, account.clone());
            let outcomes = synchronize_with(&contacts, &people, &strategy, options).await?;
            report.to_google = Some(outcomes);
        }

        Ok(report)
    }
}
