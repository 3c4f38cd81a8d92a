// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use contactsync_core::{Contact, CozyMetadata, Name, SourceAccountId, SyncEntry};
use contactsync_google::{ETag, Person, PersonName, ResourceName};
use jiff::Timestamp;

pub const ACCOUNT: &str = "45c49c15-4b00-48e8-8bfd-29f8177b89ff";
pub const OTHER_ACCOUNT: &str = "cb31eb3e-989e-4818-8b45-afed904237da";
pub const MOCKED_DATE: &str = "2018-05-05T09:09:00.115Z";

#[must_use]
pub fn mocked_now() -> Timestamp {
    MOCKED_DATE.parse().unwrap()
}

/// A contact linked to `remote_id` under `account`.
#[must_use]
pub fn linked_contact(id: &str, given: &str, family: &str, account: &str, remote_id: &str) -> Contact {
    let mut contact = contact(id, given, family);
    contact.set_sync_entry(&SourceAccountId::from(account), SyncEntry::new(remote_id));
    contact
}

fn contact(id: &str, given: &str, family: &str) -> Contact {
    Contact {
        id: Some(id.to_string()),
        name: Some(Name {
            given_name: Some(given.to_string()),
            family_name: Some(family.to_string()),
            ..Default::default()
        }),
        ..Default::default()
    }
}

/// Two contacts linked to the account, one never synced, one linked to another account.
#[must_use]
pub fn cozy_contacts() -> Vec<Contact> {
    let mut unlinked = contact("reinhold-jenkins-no-source", "Reinhold", "Jenkins");
    unlinked.cozy_metadata = CozyMetadata {
        updated_by_apps: vec!["Contacts".to_string()],
        ..Default::default()
    };

    vec![
        linked_contact(
            "jane-doe-attached-to-the-source",
            "Jane",
            "Doe",
            ACCOUNT,
            "people/123456",
        ),
        linked_contact(
            "john-doe-attached-to-the-source",
            "John",
            "Doe",
            ACCOUNT,
            "people/987654",
        ),
        unlinked,
        linked_contact(
            "larue-cremin-attached-to-another-source",
            "Larue",
            "Cremin",
            OTHER_ACCOUNT,
            "people/987654",
        ),
    ]
}

/// A Google person with a resource name and a single name.
#[must_use]
pub fn person(resource_name: &str, etag: Option<&str>, given: &str, family: &str) -> Person {
    Person {
        resource_name: Some(ResourceName::from(resource_name)),
        etag: etag.map(ETag::from),
        names: vec![PersonName {
            given_name: Some(given.to_string()),
            family_name: Some(family.to_string()),
            ..Default::default()
        }],
        ..Default::default()
    }
}
