// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Canonical contact model, shaped after Cozy's `io.cozy.contacts` documents.

use std::collections::BTreeMap;
use std::fmt;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Identifier of the remote account a synchronization run is scoped to.
///
/// Sync metadata is keyed by this identifier, so contacts linked to one account are
/// invisible to runs scoped to another, even when their remote identifiers coincide.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceAccountId(String);

impl SourceAccountId {
    /// Creates a new `SourceAccountId`.
    #[must_use]
    pub const fn new(id: String) -> Self {
        Self(id)
    }

    /// Returns the inner string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SourceAccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for SourceAccountId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for SourceAccountId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A contact in the local store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Identifier assigned by the local store, `None` until the contact is saved.
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "_id")]
    pub id: Option<String>,

    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fullname: Option<String>,

    /// Structured name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Name>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub email: Vec<Email>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub phone: Vec<Phone>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub address: Vec<Address>,

    /// Birthday as `YYYY-MM-DD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,

    #[serde(default)]
    pub cozy_metadata: CozyMetadata,
}

impl Contact {
    /// Returns the sync entry recorded for the given account, if any.
    #[must_use]
    pub fn sync_entry(&self, account: &SourceAccountId) -> Option<&SyncEntry> {
        self.cozy_metadata.sync.get(account.as_str())
    }

    /// Records the remote counterpart of this contact for the given account, replacing
    /// any previous entry for that account. Entries of other accounts are kept.
    pub fn set_sync_entry(
        &mut self,
        account: &SourceAccountId,
        entry: SyncEntry,
    ) -> Option<SyncEntry> {
        self.cozy_metadata
            .sync
            .insert(account.as_str().to_string(), entry)
    }

    /// Human readable name: the full name, then given and family names, then the primary email.
    #[must_use]
    pub fn display_name(&self) -> String {
        if let Some(fullname) = self.fullname.as_deref().filter(|a| !a.is_empty()) {
            return fullname.to_string();
        }

        if let Some(name) = &self.name {
            let joined = [name.given_name.as_deref(), name.family_name.as_deref()]
                .into_iter()
                .flatten()
                .collect::<Vec<_>>()
                .join(" ");
            if !joined.is_empty() {
                return joined;
            }
        }

        self.email
            .iter()
            .find(|a| a.primary)
            .or_else(|| self.email.first())
            .map(|a| a.address.clone())
            .unwrap_or_default()
    }
}

/// Structured name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Name {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_suffix: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email {
    pub address: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub primary: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phone {
    pub number: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub primary: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatted_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub primary: bool,
}

/// Bookkeeping Cozy keeps on every document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CozyMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doctype_version: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,

    /// Slugs of the apps that last wrote the document.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub updated_by_apps: Vec<String>,

    /// Remote counterparts, keyed by source-account identifier. At most one per account.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub sync: BTreeMap<String, SyncEntry>,
}

/// The remote counterpart of a contact for one account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncEntry {
    /// Remote identifier, for Google the person's resource name.
    pub id: String,

    /// Remote revision (etag) seen at the last sync.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_rev: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_sync: Option<Timestamp>,
}

impl SyncEntry {
    /// Creates an entry with only the remote identifier set.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            remote_rev: None,
            last_sync: None,
        }
    }
}

fn is_false(b: &bool) -> bool {
    !*b
}
