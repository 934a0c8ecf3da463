use tokio::signal;
use tracing::info;

/// Resolves when the process is asked to stop.
///
/// Listens for SIGINT (Ctrl+C) and, on unix, SIGTERM — the latter is
/// what container orchestrators send. Intended for
/// `axum::serve(..).with_graceful_shutdown(shutdown_signal())`, which
/// stops accepting new connections and lets in-flight requests finish.
pub async fn shutdown_signal() {
    let interrupt = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
        "SIGINT"
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
        "SIGTERM"
    };

    #[cfg(not(unix))]
    let terminate = async {
        std::future::pending::<()>().await;
        "unreachable"
    };

    let which = tokio::select! {
        s = interrupt => s,
        s = terminate => s,
    };

    info!("Received {}, shutting down gracefully", which);
}
