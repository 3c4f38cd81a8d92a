// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf};

use contactsync_core::{APP_NAME, Config};
use contactsync_google::AuthMethod;
use tokio::fs;

const CONFIG_ENV: &str = "CONTACTSYNC_CONFIG";
const GOOGLE_TOKEN_ENV: &str = "CONTACTSYNC_GOOGLE_TOKEN";

/// Loads the configuration from `path`, `$CONTACTSYNC_CONFIG`, or the default location, in
/// that order. A non-empty `$CONTACTSYNC_GOOGLE_TOKEN` replaces the configured Google auth.
#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<Config, Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        if !config.exists() {
            return Err(format!("No config found at: {}", config.display()).into());
        }
        config
    };

    let content = fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?;
    let mut config: Config = toml::from_str(&content)
        .map_err(|e| format!("Failed to parse config file at {}: {}", path.display(), e))?;

    if let Ok(token) = std::env::var(GOOGLE_TOKEN_ENV)
        && !token.is_empty()
    {
        tracing::debug!("using google token from {GOOGLE_TOKEN_ENV}");
        config.google.auth = AuthMethod::Bearer { token };
    }
    Ok(config)
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific home directory not found".into())
}

#[cfg(test)]
#[allow(unsafe_code)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use std::sync::OnceLock;
    use tempfile::TempDir;
    use tokio::sync::Mutex;

    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

    fn env_lock() -> &'static Mutex<()> {
        ENV_LOCK.get_or_init(|| Mutex::new(()))
    }

    fn write_config(path: &Path, account: &str) {
        let toml_content = format!(
            r#"
account_id = "{account}"
store_path = "/tmp/contacts"

[google.auth]
type = "bearer"
token = "from-file"
"#
        );
        fs::write(path, toml_content).unwrap();
    }

    #[tokio::test]
    async fn cli_flag_overrides_env_var() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        write_config(&config_path, "cli");
        let env_path = temp_dir.path().join("env_config.toml");
        write_config(&env_path, "env");

        let _guard = env_lock().lock().await;
        unsafe {
            std::env::remove_var(GOOGLE_TOKEN_ENV);
            std::env::set_var(CONFIG_ENV, env_path.to_str().unwrap());
        }

        let config = parse_config(Some(config_path)).await.unwrap();
        assert_eq!(config.account_id.as_str(), "cli");

        unsafe {
            std::env::remove_var(CONFIG_ENV);
        }
    }

    #[tokio::test]
    async fn env_var_overrides_default_config() {
        let temp_dir = TempDir::new().unwrap();
        let env_path = temp_dir.path().join("env_config.toml");
        write_config(&env_path, "env");

        let _guard = env_lock().lock().await;
        unsafe {
            std::env::remove_var(GOOGLE_TOKEN_ENV);
            std::env::set_var(CONFIG_ENV, env_path.to_str().unwrap());
        }

        let config = parse_config(None).await.unwrap();
        assert_eq!(config.account_id.as_str(), "env");
        assert_eq!(
            config.google.auth,
            AuthMethod::Bearer {
                token: "from-file".to_string()
            }
        );

        unsafe {
            std::env::remove_var(CONFIG_ENV);
        }
    }

    #[tokio::test]
    async fn token_env_var_overrides_auth() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        write_config(&config_path, "cli");

        let _guard = env_lock().lock().await;
        unsafe {
            std::env::set_var(GOOGLE_TOKEN_ENV, "from-env");
        }

        let config = parse_config(Some(config_path)).await.unwrap();
        assert_eq!(
            config.google.auth,
            AuthMethod::Bearer {
                token: "from-env".to_string()
            }
        );

        unsafe {
            std::env::remove_var(GOOGLE_TOKEN_ENV);
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn uses_default_when_no_cli_or_env() {
        let temp_dir = TempDir::new().unwrap();
        let default_config_dir = temp_dir.path().join(APP_NAME);
        fs::create_dir_all(&default_config_dir).unwrap();
        write_config(&default_config_dir.join("config.toml"), "default");

        let _guard = env_lock().lock().await;
        unsafe {
            std::env::remove_var(CONFIG_ENV);
            std::env::remove_var(GOOGLE_TOKEN_ENV);
            std::env::set_var("XDG_CONFIG_HOME", temp_dir.path().to_str().unwrap());
        }

        let config = parse_config(None).await.unwrap();
        assert_eq!(config.account_id.as_str(), "default");

        unsafe {
            std::env::remove_var("XDG_CONFIG_HOME");
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn returns_error_when_no_config_found() {
        let temp_dir = TempDir::new().unwrap();

        let _guard = env_lock().lock().await;
        unsafe {
            std::env::remove_var(CONFIG_ENV);
            std::env::set_var("XDG_CONFIG_HOME", temp_dir.path().to_str().unwrap());
        }

        let result = parse_config(None).await;
        assert!(result.is_err());

        unsafe {
            std::env::remove_var("XDG_CONFIG_HOME");
        }
    }

    #[tokio::test]
    async fn returns_error_on_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "store_path = 1").unwrap();

        let err = parse_config(Some(config_path)).await.unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
