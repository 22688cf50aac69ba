//! Bot configuration
//!
//! Sources, lowest priority first: built-in defaults, the config file, then
//! environment variables. CLI flags are applied on top by the caller.
//!
//! ```toml
//! [telegram]
//! token = "123456:ABC..."
//! poll_timeout_secs = 30
//!
//! [todos]
//! root = "/home/me/todos"
//! locale = "en"
//! ```

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::task::Locale;
use crate::telegram::DEFAULT_API_URL;

pub const TOKEN_ENV: &str = "TELEGRAM_BOT_TOKEN";
pub const ROOT_ENV: &str = "TODO_BOT_ROOT";
pub const LOCALE_ENV: &str = "TODO_BOT_LOCALE";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub telegram: TelegramConfig,

    #[serde(default)]
    pub todos: TodosConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TelegramConfig {
    #[serde(default)]
    pub token: Option<String>,

    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Long-poll wait per getUpdates call
    #[serde(default = "default_poll_timeout")]
    pub poll_timeout_secs: u64,
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            token: None,
            api_url: default_api_url(),
            poll_timeout_secs: default_poll_timeout(),
        }
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_poll_timeout() -> u64 {
    30
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TodosConfig {
    /// Directory holding current/, completed/ and projects/
    #[serde(default)]
    pub root: Option<PathBuf>,

    #[serde(default)]
    pub locale: Locale,
}

/// `<config dir>/todo-bot/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("todo-bot").join("config.toml"))
}

impl Config {
    /// Load from `path`, or from the default location when `path` is None.
    /// A missing default file yields the defaults; a missing explicit file is an error.
    /// Environment overrides are applied afterwards.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => Config::default(),
            },
        };
        config.apply_env()?;
        Ok(config)
    }

    /// Parse a config file; `.json` files are read as JSON, anything else as TOML
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        if path.extension().is_some_and(|ext| ext == "json") {
            Self::from_json(&content).with_context(|| format!("Invalid JSON config {:?}", path))
        } else {
            toml::from_str(&content).with_context(|| format!("Invalid TOML config {:?}", path))
        }
    }

    /// Also accepts a flat `{"token": "..."}` file
    fn from_json(content: &str) -> Result<Self> {
        let mut value: serde_json::Value = serde_json::from_str(content)?;
        let flat_token = value
            .as_object_mut()
            .and_then(|obj| obj.remove("token"))
            .and_then(|t| t.as_str().map(String::from));

        let mut config: Config = serde_json::from_value(value)?;
        if config.telegram.token.is_none() {
            config.telegram.token = flat_token;
        }
        Ok(config)
    }

    fn apply_env(&mut self) -> Result<()> {
        if let Some(token) = non_empty_env(TOKEN_ENV) {
            self.telegram.token = Some(token);
        }
        if let Some(root) = non_empty_env(ROOT_ENV) {
            self.todos.root = Some(PathBuf::from(root));
        }
        if let Some(locale) = non_empty_env(LOCALE_ENV) {
            self.todos.locale = locale
                .parse()
                .map_err(|e: String| anyhow::anyhow!("{}: {}", LOCALE_ENV, e))?;
        }
        Ok(())
    }

    pub fn require_token(&self) -> Result<&str> {
        match self.telegram.token.as_deref() {
            Some(token) if !token.trim().is_empty() => Ok(token.trim()),
            _ => bail!(
                "Telegram bot token not found.\n\
                 Set {} or add it to the config file:\n\n\
                 [telegram]\n\
                 token = \"YOUR_BOT_TOKEN\"",
                TOKEN_ENV
            ),
        }
    }

    pub fn require_root(&self) -> Result<&Path> {
        match self.todos.root.as_deref() {
            Some(root) => Ok(root),
            None => bail!(
                "Todos root directory not configured.\n\
                 Pass --root, set {} or add it to the config file:\n\n\
                 [todos]\n\
                 root = \"/path/to/todos\"",
                ROOT_ENV
            ),
        }
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
