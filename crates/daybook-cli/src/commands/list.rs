use crate::cli::{Cli, ListArgs};
use crate::commands::open_store;
use crate::output::entries_table;

pub fn handle_list(cli: &Cli, args: &ListArgs) -> anyhow::Result<()> {
    let store = open_store(cli)?;

    let limit = args.limit.unwrap_or(usize::MAX);
    let entries: Vec<_> = store.entries().iter().take(limit).cloned().collect();

    if entries.is_empty() {
        if !cli.quiet && !args.plain {
            println!("No entries yet.");
        }
        return Ok(());
    }

    if args.plain {
        for entry in &entries {
            println!("{}\t{}\t{}", entry.day, entry.word_count, entry.content);
        }
    } else {
        println!("{}", entries_table(&entries));
    }

    Ok(())
}
