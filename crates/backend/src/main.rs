pub mod handlers;
pub mod routes;
pub mod shared;

use std::sync::Arc;

use tokio::net::TcpListener;

use routes::AppState;
use shared::generation::{GeminiProvider, ImageGenerator};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    shared::logging::initialize()?;

    let config = shared::config::load_config()?;

    let generator: Arc<dyn ImageGenerator> =
        Arc::new(GeminiProvider::from_config(&config.gemini)?);
    tracing::info!(
        "Image provider: {} (model {})",
        generator.provider_name(),
        config.gemini.model
    );

    let static_dir = config.server.static_path();
    if !static_dir.join("index.html").exists() {
        tracing::warn!(
            "Frontend not found at {}; run `trunk build` in crates/frontend",
            static_dir.display()
        );
    }

    let app = routes::configure_routes(AppState { generator }, &static_dir);

    let addr = config.server.socket_addr()?;
    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    addr.port()
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
