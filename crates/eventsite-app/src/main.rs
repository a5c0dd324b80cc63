use std::sync::Arc;

use salvo::conn::TcpListener;
use salvo::{Listener, Router};
use eventsite_app::app::api::routes;
use eventsite_app::config::ConfigHandler;
use eventsite_app::store_handler::StoreHandler;
use eventsite_core::config::{Settings, load_config};
use eventsite_db::db::{
    connection::create_pool,
    migrations::run_migrations,
    store::{CalendarStore, MemoryStore, PgStore},
};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

/// ## Summary
/// Builds the configured calendar store, running migrations first when enabled.
///
/// ## Errors
/// Returns an error if migrations fail or the pool cannot be created.
async fn create_store(config: &Settings) -> anyhow::Result<Arc<dyn CalendarStore>> {
    if config.database.is_memory() {
        tracing::warn!("Using in-memory store; data is lost on exit");
        return Ok(Arc::new(MemoryStore::new()));
    }

    if config.database.run_migrations {
        run_migrations(&config.database.url).await?;
    }

    let pool = create_pool(
        &config.database.url,
        u32::from(config.database.max_connections),
    )
    .await?;

    tracing::info!("Database connection pool created.");

    Ok(Arc::new(PgStore::new(pool)))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    tracing::info!("Starting events site server");

    let config = load_config()?;

    tracing::info!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping debug");
    }

    let store = create_store(&config).await?;

    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    let acceptor = TcpListener::new(bind_addr.clone()).bind().await;

    let router = Router::new()
        .hoop(StoreHandler { store })
        .hoop(ConfigHandler {
            settings: config.clone(),
        })
        .push(routes());

    tracing::info!("Server listening on {bind_addr}");

    salvo::Server::new(acceptor).serve(router).await;

    Ok(())
}
