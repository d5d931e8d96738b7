//! CLI configuration and journal path resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::cli::Cli;

#[derive(Debug, Serialize, Deserialize)]
pub struct DaybookConfig {
    pub journal: JournalSection,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JournalSection {
    pub path: String,
}

impl DaybookConfig {
    pub fn new(journal_path: &Path) -> Self {
        Self {
            journal: JournalSection {
                path: journal_path.to_string_lossy().to_string(),
            },
        }
    }
}

/// Resolve the journal path: `--journal` / `DAYBOOK_PATH` first, then the
/// config file, then the default under the XDG data directory.
pub fn resolve_journal_path(cli: &Cli) -> anyhow::Result<PathBuf> {
    if let Some(ref path) = cli.journal {
        return Ok(PathBuf::from(path));
    }

    let config_path = default_config_path()?;
    if config_path.exists() {
        let config = read_config(&config_path)?;
        return Ok(PathBuf::from(config.journal.path));
    }

    default_journal_path()
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_journal_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_data_dir()?.join("journal.db"))
}

pub fn read_config(path: &Path) -> anyhow::Result<DaybookConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn write_config(path: &Path, config: &DaybookConfig) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {}",
                parent.display(),
                e
            )
        })?;
    }
    let contents =
        toml::to_string_pretty(config).map_err(|e| anyhow::anyhow!("TOML error: {}", e))?;
    std::fs::write(path, contents)
        .map_err(|e| anyhow::anyhow!("Failed to write config {}: {}", path.display(), e))?;
    Ok(())
}

fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("daybook"));
        }
    }
    Ok(home_dir()?.join(".config").join("daybook"))
}

fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("daybook"));
        }
    }
    Ok(home_dir()?.join(".local").join("share").join("daybook"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
