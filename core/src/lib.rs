// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Bidirectional contact synchronization between a local Cozy contact store and Google.
//!
//! A run takes a source list, a destination list and a [`Strategy`]. For each source
//! contact the strategy looks for its counterpart with [`matcher::find`], scoped to one
//! [`SourceAccountId`], and creates it on the destination side when there is none.

mod config;
mod contact;
mod contact_sync;
mod error;
mod file_store;
pub mod matcher;
mod store;
pub mod strategy;
mod synchronize;
pub mod transpile;

pub use crate::config::{APP_NAME, Config};
pub use crate::contact::{
    Address, Contact, CozyMetadata, Email, Name, Phone, SourceAccountId, SyncEntry,
};
pub use crate::contact_sync::{ContactSync, Direction, SyncReport};
pub use crate::error::{StoreError, SyncError};
pub use crate::file_store::FileStore;
pub use crate::matcher::SyncKey;
pub use crate::store::{CozyContacts, GoogleContacts};
pub use crate::strategy::{CozyToGoogle, Decision, GoogleToCozy, Strategy, SyncOutcome};
pub use crate::synchronize::{SyncOptions, synchronize, synchronize_with};
