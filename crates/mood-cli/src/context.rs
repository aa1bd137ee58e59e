use anyhow::Context;
use mood_config::MoodConfig;
use mood_db::service::MoodService;
use mood_ingest::Ingestor;

use crate::cli::GlobalFlags;

/// Load layered config, apply command-line overrides, and validate.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<MoodConfig> {
    let mut config = MoodConfig::load_with_dotenv().context("failed to load configuration")?;
    if let Some(db) = &flags.db {
        config.db.path.clone_from(db);
    }
    config.validate()?;
    Ok(config)
}

/// Shared resources for commands that touch the record store.
pub struct AppContext {
    pub config: MoodConfig,
    pub ingestor: Ingestor,
}

impl AppContext {
    pub async fn init(config: MoodConfig) -> anyhow::Result<Self> {
        let service = MoodService::new_local(&config.db.path)
            .await
            .with_context(|| format!("failed to open database at {}", config.db.path))?;
        if config.db.is_ephemeral() {
            tracing::warn!("using an in-memory database; records will not persist");
        }
        Ok(Self {
            config,
            ingestor: Ingestor::new(service),
        })
    }

    pub const fn service(&self) -> &MoodService {
        self.ingestor.service()
    }
}
