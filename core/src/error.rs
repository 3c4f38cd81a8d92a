// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use contactsync_google::GoogleError;

/// Errors raised by a local contact store.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Reading or writing a contact document failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// The document or directory involved.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A contact document could not be encoded or decoded.
    #[error("invalid contact document {}: {source}", path.display())]
    Json {
        /// The document involved.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: serde_json::Error,
    },

    /// The store refused the contact.
    #[error("contact rejected: {0}")]
    Rejected(String),
}

/// A synchronization run failure.
///
/// Each variant carries the error of the store that failed, untouched, so callers
/// can inspect what the store reported.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// The Google side failed.
    #[error("Google: {0}")]
    Google(#[from] GoogleError),

    /// The Cozy side failed.
    #[error("Cozy: {0}")]
    Cozy(#[from] StoreError),
}
