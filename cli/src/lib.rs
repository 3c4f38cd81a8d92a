// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line interface of contactsync.

mod cli;
mod cmd_list;
mod cmd_sync;
mod config;
mod util;

pub use crate::cli::{Cli, Commands, run};
pub use crate::cmd_list::CmdList;
pub use crate::cmd_sync::CmdSync;
pub use crate::util::ArgOutputFormat;
