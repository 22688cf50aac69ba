//! CLI command implementations

pub mod definition;
pub mod list;
pub mod run;
pub mod stats;

pub use definition::{Cli, Commands};

use anyhow::Result;
use std::path::PathBuf;

use crate::config::Config;
use crate::task::{Locale, TaskRepository};

/// Load the config and apply the global CLI flags on top
pub fn load_config(
    config_path: Option<PathBuf>,
    root: Option<PathBuf>,
    locale: Option<Locale>,
) -> Result<Config> {
    let mut config = Config::load(config_path.as_deref())?;
    if let Some(root) = root {
        config.todos.root = Some(root);
    }
    if let Some(locale) = locale {
        config.todos.locale = locale;
    }
    Ok(config)
}

/// Repository over the configured root, using the configured locale's labels
pub fn repository(config: &Config) -> Result<TaskRepository> {
    let root = config.require_root()?;
    Ok(TaskRepository::new(root, config.todos.locale.labels()))
}
