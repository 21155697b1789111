pub mod api;
pub mod config;
pub mod error;
pub mod normalize;
pub mod prompt;
pub mod session;
pub mod telemetry;
pub mod upstream;

use std::{future::Future, sync::Arc};

use axum::Router;
use tower_http::trace::TraceLayer;

pub use config::AppConfig;
pub use error::Error;
pub use upstream::ChatClient;

#[derive(Clone)]
pub struct AppState {
    pub chat: ChatClient,
}

pub fn build_app(state: Arc<AppState>) -> Router {
    api::router(state).layer(TraceLayer::new_for_http())
}

pub async fn run_server(
    app: Router,
    port: u16,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}
