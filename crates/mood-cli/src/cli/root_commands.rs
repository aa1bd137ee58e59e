use clap::{Args, Subcommand};

use crate::cli::subcommands::AccountCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Classify text without storing it.
    Classify(ClassifyArgs),
    /// Classify and store text for a registered user.
    Submit(SubmitArgs),
    /// Ingest a JSON batch of posts under the external feed.
    Ingest(IngestArgs),
    /// Most recent records, newest first (bounded by --limit).
    History(HistoryArgs),
    /// Per-label record counts.
    Summary(SummaryArgs),
    /// User accounts.
    Account {
        #[command(subcommand)]
        action: AccountCommands,
    },
    /// Run the HTTP ingestion server.
    Serve(ServeArgs),
    /// Poll the configured subreddit and deliver batches to the ingestion endpoint.
    Collect(CollectArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ClassifyArgs {
    pub text: String,
}

#[derive(Clone, Debug, Args)]
pub struct SubmitArgs {
    /// Registered user the record is filed under.
    #[arg(long)]
    pub user: String,
    pub text: String,
}

#[derive(Clone, Debug, Args)]
pub struct IngestArgs {
    /// JSON file holding an array of `{"title": ...}` objects; `-` or absent reads stdin.
    pub file: Option<String>,
}

/// Whose records to read: one user, or the external feed.
#[derive(Clone, Debug, Args)]
#[group(required = true, multiple = false)]
pub struct OwnerArgs {
    #[arg(long)]
    pub user: Option<String>,
    #[arg(long)]
    pub feed: bool,
}

#[derive(Clone, Debug, Args)]
pub struct HistoryArgs {
    #[command(flatten)]
    pub owner: OwnerArgs,
}

#[derive(Clone, Debug, Args)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub owner: OwnerArgs,
}

#[derive(Clone, Debug, Args)]
pub struct ServeArgs {
    /// Listen address (overrides server.bind).
    #[arg(long)]
    pub bind: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct CollectArgs {
    /// Run a single cycle and print its report.
    #[arg(long)]
    pub once: bool,
}
