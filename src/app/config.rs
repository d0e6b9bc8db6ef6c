use crate::app::keymap::KeyConfig;
use crate::cli::Cli;
use crate::infrastructure::clipboard::ClipboardBackend;
use crate::theme::PaletteType;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings read from `~/.config/gitbuddy/config.toml`. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub theme: PaletteType,
    pub clipboard: ClipboardBackend,
    pub keys: KeyConfig,
    pub log_file: Option<PathBuf>,
}

fn config_dir() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("gitbuddy");
        path
    })
}

pub fn default_config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

pub fn default_log_path() -> PathBuf {
    home::home_dir()
        .map(|mut path| {
            path.push(".local");
            path.push("state");
            path.push("gitbuddy");
            path
        })
        .unwrap_or_else(std::env::temp_dir)
        .join("gitbuddy.log")
}

impl AppConfig {
    /// Loads `explicit` if given (it must exist), otherwise the default path if present.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    /// Command line flags win over the file.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(theme) = cli.theme {
            self.theme = theme;
        }
        if let Some(clipboard) = cli.clipboard {
            self.clipboard = clipboard;
        }
        if let Some(log_file) = &cli.log_file {
            self.log_file = Some(log_file.clone());
        }
    }

    #[must_use]
    pub fn log_path(&self) -> PathBuf {
        self.log_file.clone().unwrap_or_else(default_log_path)
    }
}
