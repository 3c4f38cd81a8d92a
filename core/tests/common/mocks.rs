// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Store clients recording every call, with scripted responses.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use contactsync_core::{Contact, CozyContacts, GoogleContacts, StoreError};
use contactsync_google::{ETag, GoogleError, Person, ResourceName};

/// Cozy client answering `save` with the saved contact.
///
/// Ids queued with [`MockCozy::next_id`] are assigned first; otherwise the contact
/// keeps its own id, or gets `generated-<n>` if it has none.
#[derive(Debug, Default)]
pub struct MockCozy {
    saved: Mutex<Vec<Contact>>,
    ids: Mutex<VecDeque<String>>,
    failure: Option<String>,
}

impl MockCozy {
    pub fn new() -> Self {
        Self::default()
    }

    /// A client rejecting every save with [`StoreError::Rejected`].
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::default()
        }
    }

    /// Queues the id assigned by the next save.
    pub fn next_id(self, id: &str) -> Self {
        self.ids.lock().unwrap().push_back(id.to_string());
        self
    }

    /// Contacts passed to `save`, in call order.
    pub fn saved(&self) -> Vec<Contact> {
        self.saved.lock().unwrap().clone()
    }
}

#[async_trait]
impl CozyContacts for MockCozy {
    async fn save(&self, mut contact: Contact) -> Result<Contact, StoreError> {
        self.saved.lock().unwrap().push(contact.clone());
        if let Some(message) = &self.failure {
            return Err(StoreError::Rejected(message.clone()));
        }

        if let Some(id) = self.ids.lock().unwrap().pop_front() {
            contact.id = Some(id);
        } else if contact.id.is_none() {
            let n = self.saved.lock().unwrap().len();
            contact.id = Some(format!("generated-{n}"));
        }
        Ok(contact)
    }
}

/// Google client answering `create_contact` with queued resource names.
#[derive(Debug, Default)]
pub struct MockGoogle {
    created: Mutex<Vec<Person>>,
    responses: Mutex<VecDeque<(String, String)>>,
    failure: Option<GoogleError>,
}

impl MockGoogle {
    pub fn new() -> Self {
        Self::default()
    }

    /// A client rejecting every creation with `error`.
    pub fn failing(error: GoogleError) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }

    /// Queues the resource name and etag returned by the next creation.
    pub fn respond(self, resource_name: &str, etag: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back((resource_name.to_string(), etag.to_string()));
        self
    }

    /// People passed to `create_contact`, in call order.
    pub fn created(&self) -> Vec<Person> {
        self.created.lock().unwrap().clone()
    }
}

#[async_trait]
impl GoogleContacts for MockGoogle {
    async fn create_contact(&self, person: &Person) -> Result<Person, GoogleError> {
        self.created.lock().unwrap().push(person.clone());
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }

        let (resource_name, etag) = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| GoogleError::Http("no mocked response left".to_string()))?;

        Ok(Person {
            resource_name: Some(ResourceName::new(resource_name)),
            etag: Some(ETag::new(etag)),
            ..person.clone()
        })
    }
}
