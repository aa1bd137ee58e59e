use mood_ingest::IngestServer;

use crate::cli::root_commands::ServeArgs;
use crate::context::AppContext;

pub async fn handle(args: &ServeArgs, ctx: AppContext) -> anyhow::Result<()> {
    let AppContext { config, ingestor } = ctx;
    let bind = args.bind.as_deref().unwrap_or(&config.server.bind);

    let server = IngestServer::bind(
        bind,
        ingestor,
        config.server.max_body_bytes,
        config.general.history_limit,
    )?;
    if let Some(addr) = server.local_addr() {
        eprintln!("mood ingestion server listening on http://{addr} (Ctrl-C to stop)");
    }

    server.serve(super::shutdown_signal()).await?;
    Ok(())
}
