use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::{self, AppContext};

/// Dispatch a parsed command. Config and the record store are loaded only by
/// the commands that use them.
pub async fn dispatch(command: Commands, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Classify(args) => commands::classify::handle(&args, flags),
        Commands::Collect(args) => {
            let config = context::load_config(flags)?;
            commands::collect::handle(&args, &config, flags).await
        }
        Commands::Submit(args) => commands::submit::handle(&args, &open_store(flags).await?, flags).await,
        Commands::Ingest(args) => commands::ingest::handle(&args, &open_store(flags).await?, flags).await,
        Commands::History(args) => commands::history::handle(&args, &open_store(flags).await?, flags).await,
        Commands::Summary(args) => commands::summary::handle(&args, &open_store(flags).await?, flags).await,
        Commands::Account { action } => {
            commands::account::handle(&action, &open_store(flags).await?, flags).await
        }
        Commands::Serve(args) => commands::serve::handle(&args, open_store(flags).await?).await,
    }
}

async fn open_store(flags: &GlobalFlags) -> anyhow::Result<AppContext> {
    let config = context::load_config(flags)?;
    AppContext::init(config)
        .await
        .context("failed to initialize mood application context")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use crate::cli::root_commands::ClassifyArgs;

    fn flags(db: &str) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Raw,
            limit: None,
            quiet: true,
            db: Some(db.to_string()),
        }
    }

    #[tokio::test]
    async fn classify_runs_without_opening_the_store() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("never-created.db");
        let command = Commands::Classify(ClassifyArgs {
            text: "lol".to_string(),
        });

        dispatch(command, &flags(&db.to_string_lossy())).await.unwrap();
        assert!(!db.exists());
    }
}
