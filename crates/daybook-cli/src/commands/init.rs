use std::path::PathBuf;

use daybook_core::storage::{JournalStorage, SqliteStorage};

use crate::cli::{Cli, InitArgs};
use crate::config::{default_config_path, default_journal_path, write_config, DaybookConfig};

pub fn handle_init(cli: &Cli, args: &InitArgs) -> anyhow::Result<()> {
    let journal_path = match (&args.path, &cli.journal) {
        (Some(path), _) => PathBuf::from(path),
        (None, Some(path)) => PathBuf::from(path),
        (None, None) => default_journal_path()?,
    };

    if let Some(parent) = journal_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!("Failed to create {}: {}", parent.display(), e)
        })?;
    }

    SqliteStorage::create(&journal_path)
        .map_err(|e| anyhow::anyhow!("Failed to create journal: {}", e))?;

    let config_path = default_config_path()?;
    write_config(&config_path, &DaybookConfig::new(&journal_path))?;

    if !cli.quiet {
        println!("Journal created at {}", journal_path.display());
        println!("Config written to {}", config_path.display());
    }

    Ok(())
}
