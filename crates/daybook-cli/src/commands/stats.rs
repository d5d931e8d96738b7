use crate::cli::{Cli, StatsArgs};
use crate::commands::open_store;
use crate::output::day_counts_table;

pub fn handle_stats(cli: &Cli, args: &StatsArgs) -> anyhow::Result<()> {
    let store = open_store(cli)?;

    let counts = store.word_counts_by_day();
    if counts.is_empty() {
        if !cli.quiet && !args.plain {
            println!("No writing data available yet.");
        }
        return Ok(());
    }

    let stats = store.writing_stats();

    if args.plain {
        println!("total\t{}", stats.total_words);
        println!("average\t{}", stats.average_words);
        println!("streak\t{}", stats.longest_streak);
        for count in &counts {
            println!("{}\t{}", count.day, count.words);
        }
    } else {
        println!(
            "Total: {}  Average: {}  Streak: {} days",
            stats.total_words, stats.average_words, stats.longest_streak
        );
        println!("{}", day_counts_table(&counts));
    }

    Ok(())
}
