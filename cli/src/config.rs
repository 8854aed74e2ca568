// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf, str::FromStr};

use launchcmd_copywriter::CopywriterConfig;
use launchcmd_core::{APP_NAME, Config as CoreConfig};
use tokio::fs;

const LAUNCHCMD_CONFIG_ENV: &str = "LAUNCHCMD_CONFIG";

/// Environment variables the API key is read from, in order.
const API_KEY_ENVS: &[&str] = &["GEMINI_API_KEY", "API_KEY"];

/// Load the configuration.
///
/// The file is looked up from `path`, then `LAUNCHCMD_CONFIG`, then the user
/// config directory. When none of them names an existing file the built-in
/// defaults are used. An explicitly given file that cannot be read is an
/// error.
#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<Config, Box<dyn Error>> {
    let path = if let Some(path) = path {
        Some(path)
    } else if let Ok(env_path) = std::env::var(LAUNCHCMD_CONFIG_ENV) {
        Some(PathBuf::from(env_path))
    } else {
        default_config_path()
    };

    let mut config = match path {
        Some(path) => fs::read_to_string(&path)
            .await
            .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
            .parse::<ConfigRaw>()
            .map_err(|e| format!("Failed to parse config file at {}: {}", path.display(), e))?
            .into(),
        None => Config::default(),
    };

    if config.copywriter.api_key().is_none() {
        config.copywriter.api_key = api_key_from_env();
    }
    Ok(config)
}

/// Configuration for the LaunchCommand application.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Campaign configuration.
    pub core: CoreConfig,

    /// Text-generation provider configuration.
    pub copywriter: CopywriterConfig,
}

impl From<ConfigRaw> for Config {
    fn from(raw: ConfigRaw) -> Self {
        Self {
            core: raw.core,
            copywriter: raw.copywriter,
        }
    }
}

#[derive(Debug, serde::Deserialize)]
struct ConfigRaw {
    #[serde(default)]
    core: CoreConfig,

    #[serde(default)]
    copywriter: CopywriterConfig,
}

impl FromStr for ConfigRaw {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

fn default_config_path() -> Option<PathBuf> {
    let Ok(dir) = get_config_dir() else {
        tracing::warn!("user config directory not found, using defaults");
        return None;
    };

    let config = dir.join(format!("{APP_NAME}/config.toml"));
    if config.exists() {
        Some(config)
    } else {
        tracing::info!(path = %config.display(), "no config found, using defaults");
        None
    }
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific home directory not found".into())
}

fn api_key_from_env() -> Option<String> {
    API_KEY_ENVS.iter().find_map(|name| {
        std::env::var(name)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .inspect(|_| tracing::debug!(env = name, "using API key from environment"))
    })
}

#[cfg(test)]
#[allow(unsafe_code)]
mod tests {
    use std::fs;
    use std::sync::OnceLock;

    use tempfile::TempDir;
    use tokio::sync::Mutex;

    use super::*;

    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

    fn env_lock() -> &'static Mutex<()> {
        ENV_LOCK.get_or_init(|| Mutex::new(()))
    }

    /// Clear every variable the loader reads.
    unsafe fn clear_env() {
        unsafe {
            std::env::remove_var(LAUNCHCMD_CONFIG_ENV);
            std::env::remove_var("XDG_CONFIG_HOME");
            for name in API_KEY_ENVS {
                std::env::remove_var(name);
            }
        }
    }

    fn write_config(path: &std::path::Path, seat_capacity: u32) {
        let toml_content = format!(
            r#"
[core]
seat_capacity = {seat_capacity}
"#
        );
        fs::write(path, toml_content).unwrap();
    }

    #[tokio::test]
    async fn cli_flag_overrides_env_var() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        write_config(&config_path, 10);
        let env_path = temp_dir.path().join("env_config.toml");
        write_config(&env_path, 20);

        let _guard = env_lock().lock().await;
        unsafe {
            clear_env();
            std::env::set_var(LAUNCHCMD_CONFIG_ENV, env_path.to_str().unwrap());
        }

        let config = parse_config(Some(config_path)).await.unwrap();
        assert_eq!(config.core.seat_capacity, 10);

        unsafe { clear_env() };
    }

    #[tokio::test]
    async fn env_var_overrides_default_config() {
        let temp_dir = TempDir::new().unwrap();
        let default_dir = temp_dir.path().join(APP_NAME);
        fs::create_dir_all(&default_dir).unwrap();
        write_config(&default_dir.join("config.toml"), 10);
        let env_path = temp_dir.path().join("env_config.toml");
        write_config(&env_path, 20);

        let _guard = env_lock().lock().await;
        unsafe {
            clear_env();
            std::env::set_var("XDG_CONFIG_HOME", temp_dir.path());
            std::env::set_var(LAUNCHCMD_CONFIG_ENV, env_path.to_str().unwrap());
        }

        let config = parse_config(None).await.unwrap();
        assert_eq!(config.core.seat_capacity, 20);

        unsafe { clear_env() };
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn uses_default_location_when_no_cli_or_env() {
        let temp_dir = TempDir::new().unwrap();
        let default_dir = temp_dir.path().join(APP_NAME);
        fs::create_dir_all(&default_dir).unwrap();
        write_config(&default_dir.join("config.toml"), 42);

        let _guard = env_lock().lock().await;
        unsafe {
            clear_env();
            std::env::set_var("XDG_CONFIG_HOME", temp_dir.path());
        }

        let config = parse_config(None).await.unwrap();
        assert_eq!(config.core.seat_capacity, 42);

        unsafe { clear_env() };
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn falls_back_to_defaults_when_no_config_found() {
        let temp_dir = TempDir::new().unwrap();

        let _guard = env_lock().lock().await;
        unsafe {
            clear_env();
            std::env::set_var("XDG_CONFIG_HOME", temp_dir.path());
        }

        let config = parse_config(None).await.unwrap();
        assert_eq!(config.core.seat_capacity, 30);
        assert_eq!(config.copywriter.model, "gemini-2.5-flash");
        assert!(config.copywriter.api_key.is_none());

        unsafe { clear_env() };
    }

    #[tokio::test]
    async fn missing_explicit_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nope.toml");

        let _guard = env_lock().lock().await;
        unsafe { clear_env() };

        let err = parse_config(Some(path)).await.unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[tokio::test]
    async fn invalid_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[core.schedule]\nend = \"02-30\"\n").unwrap();

        let _guard = env_lock().lock().await;
        unsafe { clear_env() };

        let err = parse_config(Some(path)).await.unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[tokio::test]
    async fn parses_full_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
[core]
year = 2026
seat_capacity = 30

[core.schedule]
kickoff = "01-30"
start = "02-02"
end = "03-19"

[core.launch]
date = "03-19"
time = "19:00"

[copywriter]
api_key = "from-file"
model = "gemini-2.5-pro"
timeout_secs = 10
"#,
        )
        .unwrap();

        let _guard = env_lock().lock().await;
        unsafe {
            clear_env();
            std::env::set_var("GEMINI_API_KEY", "from-env");
        }

        let config = parse_config(Some(path)).await.unwrap();
        assert_eq!(config.core.year, Some(2026));
        assert_eq!(config.copywriter.api_key(), Some("from-file"));
        assert_eq!(config.copywriter.model, "gemini-2.5-pro");
        assert_eq!(config.copywriter.timeout_secs, 10);

        unsafe { clear_env() };
    }

    #[tokio::test]
    async fn api_key_falls_back_to_env_in_order() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[copywriter]\napi_key = \"  \"\n").unwrap();

        let _guard = env_lock().lock().await;
        unsafe {
            clear_env();
            std::env::set_var("API_KEY", "generic");
        }
        let config = parse_config(Some(path.clone())).await.unwrap();
        assert_eq!(config.copywriter.api_key(), Some("generic"));

        unsafe { std::env::set_var("GEMINI_API_KEY", "gemini") };
        let config = parse_config(Some(path)).await.unwrap();
        assert_eq!(config.copywriter.api_key(), Some("gemini"));

        unsafe { clear_env() };
    }
}
