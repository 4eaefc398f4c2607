//! NAMASTE terminology HTTP server binary.

use namaste_loader::{discover_data_files, TerminologyStore};
use namaste_service::{NamasteServer, ServiceConfig};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = ServiceConfig::from_env();

    tracing::info!("Loading terminology data from: {}", config.data_path.display());

    let files = discover_data_files(&config.data_path)?;

    let mut store = TerminologyStore::new();
    let summary = store.load_all(&files, &config.load_config())?;

    for (id, stats) in &summary.catalogs {
        if stats.skipped_records > 0 {
            tracing::warn!(
                "{}: loaded {} concepts ({:.1}%), skipped {} invalid",
                id,
                stats.loaded_records,
                stats.load_rate(),
                stats.skipped_records
            );
        } else {
            tracing::info!("{}: loaded {} concepts", id, stats.loaded_records);
        }
    }
    tracing::info!(
        "Loaded {} concepts, {} cross-map entries",
        store.concept_count(),
        summary.cross_map_entries
    );

    let app = NamasteServer::new(store).router();

    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Starting NAMASTE terminology server on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Could not listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
