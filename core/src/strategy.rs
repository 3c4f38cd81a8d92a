// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Per-contact create-or-skip decisions, one strategy per sync direction.

use async_trait::async_trait;
use contactsync_google::{GoogleError, Person};
use jiff::Timestamp;
use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::contact::{Contact, SourceAccountId, SyncEntry};
use crate::error::{StoreError, SyncError};
use crate::matcher;
use crate::store::{CozyContacts, GoogleContacts};
use crate::transpile;

/// What happened to one source contact during a run.
///
/// Serializes to `null` when skipped and to `{"created": true, "id": ...}` when created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Already represented on the destination, nothing was written.
    Skipped,
    /// A counterpart was created. `id` identifies the Cozy contact that is now linked.
    Created {
        /// Cozy identifier of the linked contact.
        id: String,
    },
}

impl SyncOutcome {
    /// Shorthand for [`SyncOutcome::Created`].
    pub fn created(id: impl Into<String>) -> Self {
        Self::Created { id: id.into() }
    }

    /// Whether a contact was created.
    #[must_use]
    pub const fn is_created(&self) -> bool {
        matches!(self, Self::Created { .. })
    }

    /// The linked contact id, if one was created.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Skipped => None,
            Self::Created { id } => Some(id),
        }
    }
}

impl Serialize for SyncOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Skipped => serializer.serialize_none(),
            Self::Created { id } => {
                let mut state = serializer.serialize_struct("SyncOutcome", 2)?;
                state.serialize_field("created", &true)?;
                state.serialize_field("id", id)?;
                state.end()
            }
        }
    }
}

/// A strategy's decision for one source item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision<D> {
    /// The item already has a counterpart.
    Skip,
    /// A counterpart was created.
    Created {
        /// See [`SyncOutcome::Created`].
        id: String,
        /// The record now present on the destination side.
        record: D,
    },
}

impl<D> Decision<D> {
    /// The outcome reported for this decision.
    pub fn outcome(&self) -> SyncOutcome {
        match self {
            Self::Skip => SyncOutcome::Skipped,
            Self::Created { id, .. } => SyncOutcome::created(id.clone()),
        }
    }

    /// The created destination record, if any.
    pub fn into_record(self) -> Option<D> {
        match self {
            Self::Skip => None,
            Self::Created { record, .. } => Some(record),
        }
    }
}

/// Decides, and applies, what to do with one source item given the destination list.
#[async_trait]
pub trait Strategy: Send + Sync {
    /// Items read from the source store.
    type Source: Sync;
    /// Items of the destination store.
    type Destination: Sync;

    /// Skips `source` if it has a counterpart in `destinations`, creates one otherwise.
    ///
    /// # Errors
    ///
    /// Returns the error of the first store call that fails.
    async fn decide(
        &self,
        source: &Self::Source,
        destinations: &[Self::Destination],
    ) -> Result<Decision<Self::Destination>, SyncError>;
}

/// Pushes local contacts to Google.
///
/// For every contact without a counterpart, a Google contact is created and the
/// contact's sync metadata is written back to Cozy, so the next run matches it.
#[derive(Debug)]
pub struct CozyToGoogle<'a, C, G> {
    cozy: &'a C,
    google: &'a G,
    account: SourceAccountId,
    now: Timestamp,
}

/// Builds a [`CozyToGoogle`] strategy bound to `account`.
pub fn cozy_to_google<'a, C, G>(
    cozy: &'a C,
    google: &'a G,
    account: SourceAccountId,
) -> CozyToGoogle<'a, C, G>
where
    C: CozyContacts,
    G: GoogleContacts,
{
    CozyToGoogle {
        cozy,
        google,
        account,
        now: Timestamp::now(),
    }
}

impl<C, G> CozyToGoogle<'_, C, G> {
    /// Sets the time recorded as `lastSync`.
    #[must_use]
    pub fn with_now(mut self, now: Timestamp) -> Self {
        self.now = now;
        self
    }

    /// The account this strategy is scoped to.
    pub fn account(&self) -> &SourceAccountId {
        &self.account
    }
}

#[async_trait]
impl<'a, C, G> Strategy for CozyToGoogle<'a, C, G>
where
    C: CozyContacts,
    G: GoogleContacts,
{
    type Source = Contact;
    type Destination = Person;

    async fn decide(
        &self,
        contact: &Contact,
        people: &[Person],
    ) -> Result<Decision<Person>, SyncError> {
        if let Some(person) = matcher::find(contact, people, &self.account) {
            tracing::debug!(
                id = ?contact.id,
                resource_name = ?person.resource_name,
                "contact already on google, skipping"
            );
            return Ok(Decision::Skip);
        }

        let created = self
            .google
            .create_contact(&transpile::to_google(contact))
            .await?;
        let resource_name = created.resource_name.as_ref().ok_or_else(|| {
            GoogleError::InvalidResponse("created contact has no resource name".to_string())
        })?;

        let mut linked = contact.clone();
        linked.set_sync_entry(
            &self.account,
            SyncEntry {
                id: resource_name.to_string(),
                remote_rev: created.etag.as_ref().map(ToString::to_string),
                last_sync: Some(self.now),
            },
        );

        let saved = self.cozy.save(linked).await?;
        let id = saved
            .id
            .ok_or_else(|| StoreError::Rejected("saved contact has no id".to_string()))?;

        tracing::debug!(%id, %resource_name, "created google contact");
        Ok(Decision::Created {
            id,
            record: created,
        })
    }
}

/// Pulls Google contacts into the local store.
#[derive(Debug)]
pub struct GoogleToCozy<'a, C> {
    cozy: &'a C,
    account: SourceAccountId,
    now: Timestamp,
}

/// Builds a [`GoogleToCozy`] strategy bound to `account`.
pub fn google_to_cozy<C>(cozy: &C, account: SourceAccountId) -> GoogleToCozy<'_, C>
where
    C: CozyContacts,
{
    GoogleToCozy {
        cozy,
        account,
        now: Timestamp::now(),
    }
}

impl<C> GoogleToCozy<'_, C> {
    /// Sets the time recorded as `lastSync`.
    #[must_use]
    pub fn with_now(mut self, now: Timestamp) -> Self {
        self.now = now;
        self
    }

    /// The account this strategy is scoped to.
    pub fn account(&self) -> &SourceAccountId {
        &self.account
    }
}

#[async_trait]
impl<'a, C> Strategy for GoogleToCozy<'a, C>
where
    C: CozyContacts,
{
    type Source = Person;
    type Destination = Contact;

    async fn decide(
        &self,
        person: &Person,
        contacts: &[Contact],
    ) -> Result<Decision<Contact>, SyncError> {
        if let Some(contact) = matcher::find(person, contacts, &self.account) {
            tracing::debug!(
                resource_name = ?person.resource_name,
                id = ?contact.id,
                "person already in cozy, skipping"
            );
            return Ok(Decision::Skip);
        }

        let mut contact = transpile::to_cozy(person);
        if let Some(resource_name) = &person.resource_name {
            contact.set_sync_entry(
                &self.account,
                SyncEntry {
                    id: resource_name.to_string(),
                    remote_rev: person.etag.as_ref().map(ToString::to_string),
                    last_sync: Some(self.now),
                },
            );
        }

        let saved = self.cozy.save(contact).await?;
        let id = saved
            .id
            .clone()
            .ok_or_else(|| StoreError::Rejected("saved contact has no id".to_string()))?;

        tracing::debug!(%id, resource_name = ?person.resource_name, "created cozy contact");
        Ok(Decision::Created { id, record: saved })
    }
}
