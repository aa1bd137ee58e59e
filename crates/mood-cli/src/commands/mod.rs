pub mod account;
pub mod classify;
pub mod collect;
pub mod dispatch;
pub mod history;
pub mod ingest;
pub mod serve;
pub mod shared;
pub mod submit;
pub mod summary;

/// Resolves on Ctrl-C. If the signal handler cannot be installed, never resolves.
pub async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::warn!(%error, "failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}
