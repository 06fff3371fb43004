use std::sync::Arc;

use bloglist::{
    AppState,
    app::router::build_router,
    config::Config,
    store::{MemoryStore, PgStore, Store},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().expect("invalid configuration");

    let store: Arc<dyn Store> = match &config.database_url {
        Some(database_url) => {
            tracing::info!("connecting to Postgres");
            let store = PgStore::connect(database_url, config.max_connections)
                .await
                .expect("failed to connect to Postgres");
            tracing::info!("connected to Postgres");
            Arc::new(store)
        }
        None => {
            tracing::warn!("DATABASE_URL is not set, using the in-memory store");
            Arc::new(MemoryStore::new())
        }
    };

    let app = build_router(AppState::new(store.clone(), &config.secret));
    let addr = config.addr();
    tracing::info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    store.close().await;
    tracing::info!("store closed");
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
    }
}
