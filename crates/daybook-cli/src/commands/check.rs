use daybook_core::storage::{JournalStorage, SqliteStorage};

use crate::cli::Cli;
use crate::config::resolve_journal_path;

/// Maintenance path: talks to the backend directly so integrity failures
/// surface instead of being absorbed by the store.
pub fn handle_check(cli: &Cli) -> anyhow::Result<()> {
    let path = resolve_journal_path(cli)?;
    let storage = SqliteStorage::open(&path)
        .map_err(|e| anyhow::anyhow!("Could not open journal: {}", e))?;

    match storage.check_integrity() {
        Ok(()) => {
            if !cli.quiet {
                println!("Integrity check: OK");
                println!("- metadata keys: OK");
                println!("- one entry per day: OK");
                println!("- day keys match timestamps: OK");
            }
        }
        Err(err) => {
            eprintln!("Integrity check: FAILED");
            eprintln!("- error: {}", err);
            return Err(anyhow::anyhow!("Integrity check failed"));
        }
    }

    Ok(())
}
