use ph_config::Config;
use ph_db::{SqliteProfileCatalog, open_pool, run_migrations};
use ph_lifecycle::{
    LoggingObserver, Metrics, MetricsObserver, OperationsBroadcaster, Orchestrator,
};
use ph_rpc::{HttpProfileRpcClient, ProfileRpcClient};
use ph_server::{AppState, ServerError, ServerErrorResult, build_router, logger};

use std::sync::Arc;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> ServerErrorResult<()> {
    // Load .env file if present (development)
    let _ = dotenvy::dotenv();

    let config = Config::load()?;
    config.validate()?;

    let log_file_path = config.log_file_path()?;
    if let Some(log_dir) = log_file_path.as_ref().and_then(|p| p.parent()) {
        std::fs::create_dir_all(log_dir).map_err(|e| ServerError::Io {
            path: log_dir.display().to_string(),
            source: e,
        })?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting ph-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let pool = open_pool(&config.database_path()?).await?;
    run_migrations(&pool).await?;

    let rpc_client = HttpProfileRpcClient::from_config(&config.rpc)?;
    info!(
        "Profile RPC client ready: {} (timeout {:?})",
        config.rpc.base_url,
        rpc_client.timeout()
    );

    let broadcaster = OperationsBroadcaster::new(config.broadcast.channel_capacity);

    let orchestrator = Orchestrator::new(
        Arc::new(SqliteProfileCatalog::new(pool)),
        Arc::new(rpc_client),
        Arc::new(broadcaster.clone()),
    )
    .with_observer(Arc::new(LoggingObserver::new()))
    .with_observer(Arc::new(MetricsObserver::new(Metrics::new())));

    let app = build_router(AppState {
        orchestrator,
        broadcaster,
    });

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| ServerError::Io {
            path: bind_addr.clone(),
            source: e,
        })?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr().map_err(|e| ServerError::Io {
        path: bind_addr.clone(),
        source: e,
    })?;
    info!("Server listening on {}", actual_addr);

    // Restart sequences still in flight are abandoned on shutdown.
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::Io {
            path: actual_addr.to_string(),
            source: e,
        })?;

    info!("Graceful shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
