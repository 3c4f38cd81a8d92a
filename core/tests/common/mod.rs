// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Common test utilities for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - Recording store clients with scripted responses
//! - Contact and person fixtures

mod fixtures;
mod mocks;

#[allow(unused_imports)]
pub use fixtures::{
    ACCOUNT, MOCKED_DATE, OTHER_ACCOUNT, cozy_contacts, linked_contact, mocked_now, person,
};
#[allow(unused_imports)]
pub use mocks::{MockCozy, MockGoogle};
