use std::cell::RefCell;
use std::io::{self, IsTerminal, Read};
use std::rc::Rc;

use chrono::Local;

use crate::cli::{Cli, WriteArgs};
use crate::commands::open_store;

pub fn handle_write(cli: &Cli, args: &WriteArgs) -> anyhow::Result<()> {
    let text = if args.text.is_empty() {
        let mut stdin = io::stdin();
        if stdin.is_terminal() {
            anyhow::bail!("Nothing to write. Pass TEXT or pipe it on stdin.");
        }
        let mut buffer = String::new();
        stdin.read_to_string(&mut buffer)?;
        buffer
    } else {
        args.text.join(" ")
    };

    let mut store = open_store(cli)?;

    // The store absorbs storage failures; the hook makes the save outcome
    // visible so the command can exit non-zero instead of lying.
    let failure: Rc<RefCell<Option<String>>> = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&failure);
    store.on_failure(Box::new(move |err| {
        *sink.borrow_mut() = Some(err.to_string());
    }));

    if text.trim().is_empty() {
        if !cli.quiet {
            println!("Nothing to save.");
        }
        return Ok(());
    }

    store.set_draft(text);
    store.save_draft();

    if let Some(message) = failure.borrow_mut().take() {
        anyhow::bail!("Could not save entry: {}", message);
    }

    if !cli.quiet {
        let today = Local::now().date_naive();
        if let Some(entry) = store.entries().iter().find(|entry| entry.day == today) {
            println!(
                "Saved entry for {} ({} words).",
                entry.day.format("%A, %b %-d"),
                entry.word_count
            );
        }
    }

    Ok(())
}
