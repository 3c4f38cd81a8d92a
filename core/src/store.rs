// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Write capabilities the strategies need from each store.

use async_trait::async_trait;
use contactsync_google::{GoogleError, PeopleClient, Person};

use crate::contact::Contact;
use crate::error::StoreError;

/// The local contact store.
#[async_trait]
pub trait CozyContacts: Send + Sync {
    /// Creates or replaces a contact and returns it as stored, with its id set.
    async fn save(&self, contact: Contact) -> Result<Contact, StoreError>;
}

/// The remote contact provider.
#[async_trait]
pub trait GoogleContacts: Send + Sync {
    /// Creates a person and returns it with its server-assigned resource name and etag.
    async fn create_contact(&self, person: &Person) -> Result<Person, GoogleError>;
}

#[async_trait]
impl GoogleContacts for PeopleClient {
    async fn create_contact(&self, person: &Person) -> Result<Person, GoogleError> {
        PeopleClient::create_contact(self, person).await
    }
}
