use clap::Parser;
use study_proxy::{build_app, config::AppConfig, run_server, telemetry};

/// Wait for SIGTERM or Ctrl+C.
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_tracing()?;

    let config = AppConfig::parse();
    if !config.has_api_key() {
        anyhow::bail!("AI_GATEWAY_API_KEY is not configured");
    }

    let port = config.port;
    tracing::info!(model = %config.model, gateway = %config.gateway_url, "starting study-proxy");

    let state = config.into_state()?;
    run_server(build_app(state), port, shutdown_signal()).await?;

    Ok(())
}
