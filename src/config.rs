use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(default)]
    pub activation: ActivationConfig,
    #[serde(default)]
    pub tray: TrayConfig,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ActivationConfig {
    /// Replace the toolkit focus request with the Win32 foreground call
    /// (Windows only; other platforms always use the toolkit request).
    #[serde(default = "default_use_native_foreground")]
    pub use_native_foreground: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TrayConfig {
    /// Present a show/quit context menu instead of restoring the window
    /// directly on every tray selection.
    #[serde(default = "default_use_context_menu")]
    pub use_context_menu: bool,
}

fn default_use_native_foreground() -> bool {
    false
}

fn default_use_context_menu() -> bool {
    false
}

impl Default for ActivationConfig {
    fn default() -> Self {
        Self {
            use_native_foreground: default_use_native_foreground(),
        }
    }
}

impl Default for TrayConfig {
    fn default() -> Self {
        Self {
            use_context_menu: default_use_context_menu(),
        }
    }
}

pub fn get_config_path() -> PathBuf {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    home.join(".traywake.json")
}

pub fn load_or_create_config() -> Result<Config> {
    let path = get_config_path();

    if path.exists() {
        let content = fs::read_to_string(&path).context("failed to read config file")?;
        serde_json::from_str::<Config>(&content).context("failed to parse config file")
    } else {
        let config = Config::default();
        save_config(&config)?;
        Ok(config)
    }
}

pub fn save_config(config: &Config) -> Result<()> {
    let path = get_config_path();
    let content = serde_json::to_string_pretty(config).context("failed to serialize config")?;
    fs::write(&path, content).context("failed to write config file")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert!(!config.activation.use_native_foreground);
        assert!(!config.tray.use_context_menu);
    }

    #[test]
    fn explicit_flags_are_honored() {
        let raw = r#"{"activation":{"use_native_foreground":true},"tray":{"use_context_menu":true}}"#;
        let config: Config = serde_json::from_str(raw).unwrap();
        assert!(config.activation.use_native_foreground);
        assert!(config.tray.use_context_menu);
    }

    #[test]
    fn default_config_round_trips() {
        let serialized = serde_json::to_string_pretty(&Config::default()).unwrap();
        let config: Config = serde_json::from_str(&serialized).unwrap();
        assert!(!config.activation.use_native_foreground);
        assert!(!config.tray.use_context_menu);
    }
}
