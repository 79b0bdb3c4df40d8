mod config;
mod relay;
mod routes;
mod state;
#[cfg(test)]
mod test_support;

use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;
use crate::state::AppState;

#[tokio::main]
async fn main() {
    // A missing .env is normal outside local development.
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("ignoring unreadable .env: {e}");
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")))
        .init();

    let config = ServerConfig::from_env().expect("invalid server configuration");
    let port = config.port;
    let base = config.mounted("/");
    let state = AppState::new(config).expect("contact relay init failed");
    tracing::info!(
        website_dir = %state.config.website_dir.display(),
        contact_endpoint = %state.relay.endpoint(),
        "config loaded"
    );
    let app = routes::app(state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, %base, "portfolio server listening");
    axum::serve(listener, app).await.expect("server failed");
}
