// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::path::{Path, PathBuf};

use contactsync_google::GoogleConfig;

use crate::contact::SourceAccountId;
use crate::synchronize::SyncOptions;

/// The name of the application.
pub const APP_NAME: &str = "contactsync";

/// Configuration of a [`ContactSync`](crate::ContactSync) host.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    /// The Google account every run is scoped to.
    pub account_id: SourceAccountId,

    /// Directory of the local contact store. Defaults to the user data directory.
    #[serde(default)]
    pub store_path: Option<PathBuf>,

    /// People API client settings.
    #[serde(default)]
    pub google: GoogleConfig,

    /// Synchronization run settings.
    #[serde(default)]
    pub sync: SyncOptions,
}

impl Config {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new(account_id: SourceAccountId, store_path: PathBuf) -> Self {
        Self {
            account_id,
            store_path: Some(store_path),
            google: GoogleConfig::default(),
            sync: SyncOptions::default(),
        }
    }

    /// Normalize the configuration, resolving the store path.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be expanded or no default location exists.
    pub fn normalize(&mut self) -> Result<(), Box<dyn Error>> {
        self.store_path = Some(match &self.store_path {
            Some(path) => expand_path(path)
                .map_err(|e| format!("Failed to expand store path: {e}"))?,
            None => get_data_dir()?.join(APP_NAME).join("contacts"),
        });
        Ok(())
    }
}

/// Handle tilde (~) and environment variables in the path
fn expand_path(path: &Path) -> Result<PathBuf, Box<dyn Error>> {
    if path.is_absolute() {
        return Ok(path.to_owned());
    }

    let path = path.to_str().ok_or("Invalid path")?;

    // Handle tilde and home directory
    let home_prefixes: &[&str] = if cfg!(unix) {
        &["~/", "$HOME/", "${HOME}/"]
    } else {
        &[r"~\", "~/", r"%UserProfile%\", r"%UserProfile%/"]
    };
    for prefix in home_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_home_dir()?.join(stripped));
        }
    }

    // Handle data directories
    let data_prefixes: &[&str] = if cfg!(unix) {
        &["$XDG_DATA_HOME/", "${XDG_DATA_HOME}/"]
    } else {
        &[r"%LOCALAPPDATA%\", "%LOCALAPPDATA%/"]
    };
    for prefix in data_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_data_dir()?.join(stripped));
        }
    }

    Ok(path.into())
}

fn get_home_dir() -> Result<PathBuf, Box<dyn Error>> {
    dirs::home_dir().ok_or_else(|| "User-specific home directory not found".into())
}

fn get_data_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let data_dir = xdg::BaseDirectories::new().get_data_home();
    #[cfg(windows)]
    let data_dir = dirs::data_local_dir();
    data_dir.ok_or_else(|| "User-specific data directory not found".into())
}
