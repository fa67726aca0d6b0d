//! Wallet Ledger service entry point
//!
//! Wiring order: config → logging → PostgreSQL pool → schema →
//! idempotency cache → transfer service → HTTP gateway. All handles
//! are opened here and injected explicitly; nothing holds ambient
//! module state.

use std::sync::Arc;
use std::time::Duration;

use wallet_ledger::config::AppConfig;
use wallet_ledger::db::{Database, schema};
use wallet_ledger::gateway::{self, state::AppState};
use wallet_ledger::idempotency::MemoryIdempotencyCache;
use wallet_ledger::logging;
use wallet_ledger::transfer::TransferService;

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let config = AppConfig::load(&env)?;
    let _guard = logging::init_logging(&config);

    tracing::info!("Starting wallet-ledger (env: {})", env);

    let db = Arc::new(Database::connect(&config.postgres_url).await?);
    schema::init_schema(db.pool()).await?;

    let cache = Arc::new(MemoryIdempotencyCache::new());

    // Periodic reclamation of expired idempotency records
    let sweep_cache = cache.clone();
    let sweep_interval = Duration::from_secs(config.idempotency.sweep_interval_secs);
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(sweep_interval);
        loop {
            ticker.tick().await;
            sweep_cache.sweep();
        }
    });

    let transfer_service = Arc::new(TransferService::new(
        db.clone(),
        cache,
        Duration::from_secs(config.idempotency.ttl_secs),
    ));

    let state = Arc::new(AppState::new(db, transfer_service));
    gateway::run_server(&config.gateway, state).await
}
