//! Command handlers.

pub mod check;
pub mod init;
pub mod list;
pub mod stats;
pub mod write;

use daybook_core::{EntryStore, SqliteStorage, SystemClock};

use crate::cli::{Cli, Commands};
use crate::config::resolve_journal_path;

pub fn dispatch(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Init(args) => init::handle_init(cli, args),
        Commands::Write(args) => write::handle_write(cli, args),
        Commands::List(args) => list::handle_list(cli, args),
        Commands::Stats(args) => stats::handle_stats(cli, args),
        Commands::Check => check::handle_check(cli),
    }
}

/// Open the entry store over the resolved journal and load it once.
pub(crate) fn open_store(cli: &Cli) -> anyhow::Result<EntryStore<SqliteStorage>> {
    let path = resolve_journal_path(cli)?;
    if !path.exists() {
        anyhow::bail!(
            "No journal found at {}. Run `daybook init` first.",
            path.display()
        );
    }
    let mut store = EntryStore::open(&path, Box::new(SystemClock));
    store.load();
    Ok(store)
}
