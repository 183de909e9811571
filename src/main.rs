// Review Service - HTTP entry point

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use review_service::{
    app_state::AppState,
    config::Config,
    review_interface::create_app,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("review_service=info,tower_http=info")),
        )
        .init();

    // Load configuration
    let config = Config::from_env()?;
    info!(database = %config.database.url, "Configuration loaded");

    // Connect and create the reviews table if needed
    let (app_state, database) = AppState::connect(&config.database).await?;
    info!("Database ready");

    let app = create_app(app_state);

    // Start server
    let addr = config.server_address();
    let listener = TcpListener::bind(&addr).await?;
    info!("Review service listening on http://{}", addr);
    info!("  GET    /reviews       - List reviews");
    info!("  POST   /reviews       - Add review");
    info!("  PUT    /reviews/{{id}}  - Update review");
    info!("  DELETE /reviews/{{id}}  - Delete review");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    database.close().await;
    info!("Server shut down");

    Ok(())
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
