// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Client for the Google People API, limited to what contact synchronization needs:
//! listing the authenticated user's connections and creating contacts.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
#![allow(clippy::module_name_repetitions, clippy::single_match_else)]

mod client;
mod config;
mod error;
mod http;
mod types;

pub use crate::client::{PERSON_FIELDS, PeopleClient};
pub use crate::config::{AuthMethod, GoogleConfig};
pub use crate::error::GoogleError;
pub use crate::types::{
    Address, Biography, Birthday, ConnectionsPage, Date, ETag, EmailAddress, FieldMetadata,
    Organization, Person, PersonName, PhoneNumber, ResourceName,
};
