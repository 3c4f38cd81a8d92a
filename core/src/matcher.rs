// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Finds the counterpart of a contact in the other store.

use contactsync_google::Person;

use crate::contact::{Contact, SourceAccountId};

/// A record that can be joined across stores by a remote identifier.
pub trait SyncKey {
    /// The identifier this record is known by in `account`, if any.
    fn sync_key(&self, account: &SourceAccountId) -> Option<&str>;
}

impl SyncKey for Contact {
    fn sync_key(&self, account: &SourceAccountId) -> Option<&str> {
        self.sync_entry(account).map(|entry| entry.id.as_str())
    }
}

impl SyncKey for Person {
    /// People are listed per account, so their resource name is their key in any scope.
    fn sync_key(&self, _account: &SourceAccountId) -> Option<&str> {
        self.resource_name.as_deref()
    }
}

/// Finds the candidate whose key in `account` equals the key of `item`.
///
/// An item without a key in `account` has never been synced with it and matches
/// nothing. When several candidates share the key, the first one wins.
pub fn find<'a, T, C>(item: &T, candidates: &'a [C], account: &SourceAccountId) -> Option<&'a C>
where
    T: SyncKey + ?Sized,
    C: SyncKey,
{
    let key = item.sync_key(account)?;
    candidates
        .iter()
        .find(|candidate| candidate.sync_key(account) == Some(key))
}
