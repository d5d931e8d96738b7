use clap::{Args, Parser, Subcommand};

use daybook_core::VERSION;

/// Daybook - a single-user daily journal, one entry per calendar day
#[derive(Parser)]
#[command(name = "daybook")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the journal database
    #[arg(short, long, global = true, env = "DAYBOOK_PATH")]
    pub journal: Option<String>,

    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new journal database
    Init(InitArgs),

    /// Write (or rewrite) today's entry
    Write(WriteArgs),

    /// Show the entry timeline, newest first
    List(ListArgs),

    /// Show writing-activity statistics
    Stats(StatsArgs),

    /// Check journal database integrity
    Check,
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Path where the journal will be created
    #[arg(value_name = "PATH")]
    pub path: Option<String>,
}

/// Arguments for the `write` command
#[derive(Args)]
pub struct WriteArgs {
    /// Entry text (reads stdin when omitted and piped)
    #[arg(value_name = "TEXT")]
    pub text: Vec<String>,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Limit number of entries shown
    #[arg(long)]
    pub limit: Option<usize>,

    /// Tab-separated output without table chrome
    #[arg(long)]
    pub plain: bool,
}

/// Arguments for the `stats` command
#[derive(Args)]
pub struct StatsArgs {
    /// Tab-separated output without table chrome
    #[arg(long)]
    pub plain: bool,
}
