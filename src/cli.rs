use clap::{Parser, Subcommand};

use histrank::Combine;

#[derive(Parser)]
#[command(
    name = "histrank",
    about = "Rank history and bookmark entries against a query",
    version,
    after_help = "Examples:\n  histrank rank \"rust book\" --input 'history/*.json'\n  cat bookmarks.json | histrank rank docs --input - --json\n  histrank explain stack http://stackoverflow.com --title \"Stack Overflow\""
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank candidates from JSON files against a query
    Rank(RankArgs),

    /// Show the score breakdown for a single candidate
    Explain(ExplainArgs),

    /// Show or create the configuration file
    Config,
}

#[derive(Parser)]
pub struct RankArgs {
    /// Query; split into terms on whitespace
    pub query: String,

    /// JSON files (glob patterns) holding candidate arrays; `-` reads stdin
    #[arg(long, short, required = true, num_args = 1..)]
    pub input: Vec<String>,

    /// Maximum number of results (defaults to the configured max_results)
    #[arg(long)]
    pub limit: Option<usize>,

    /// How relevancy and recency are combined
    #[arg(long, value_enum)]
    pub combine: Option<Combine>,

    /// Rank as if the current time were this RFC 3339 timestamp
    #[arg(long)]
    pub now: Option<String>,

    /// Output as JSON for scripting
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser)]
pub struct ExplainArgs {
    /// Query; split into terms on whitespace
    pub query: String,

    /// Candidate URL
    pub url: String,

    /// Candidate title
    #[arg(long)]
    pub title: Option<String>,

    /// Last access time (RFC 3339); defaults to now
    #[arg(long)]
    pub last_accessed: Option<String>,

    /// Score as if the current time were this RFC 3339 timestamp
    #[arg(long)]
    pub now: Option<String>,
}
