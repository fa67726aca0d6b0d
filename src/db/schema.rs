//! PostgreSQL schema for wallets and the ledger
//!
//! Applied idempotently at startup. The version column on `wallets_tb`
//! is the serialization point for optimistic concurrency; `ledger_tb`
//! is append-only and never updated in place.

use anyhow::Result;
use sqlx::PgPool;

const CREATE_WALLETS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS wallets_tb (
    wallet_id   UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    owner_id    TEXT NOT NULL UNIQUE,
    version     BIGINT NOT NULL DEFAULT 1,
    created_at  TIMESTAMPTZ NOT NULL DEFAULT now()
)
"#;

const CREATE_LEDGER_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS ledger_tb (
    entry_id        BIGSERIAL PRIMARY KEY,
    wallet_id       UUID NOT NULL REFERENCES wallets_tb (wallet_id),
    transaction_id  UUID NOT NULL,
    amount          NUMERIC NOT NULL,
    created_at      TIMESTAMPTZ NOT NULL DEFAULT now()
)
"#;

const CREATE_LEDGER_WALLET_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_ledger_wallet_id ON ledger_tb (wallet_id)";

const CREATE_LEDGER_TRANSACTION_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_ledger_transaction_id ON ledger_tb (transaction_id)";

/// Initialize the PostgreSQL schema
pub async fn init_schema(pool: &PgPool) -> Result<()> {
    tracing::info!("Initializing PostgreSQL schema...");

    sqlx::query(CREATE_WALLETS_TABLE)
        .execute(pool)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create wallets table: {}", e))?;

    sqlx::query(CREATE_LEDGER_TABLE)
        .execute(pool)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create ledger table: {}", e))?;

    sqlx::query(CREATE_LEDGER_WALLET_INDEX)
        .execute(pool)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create ledger wallet index: {}", e))?;

    sqlx::query(CREATE_LEDGER_TRANSACTION_INDEX)
        .execute(pool)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create ledger transaction index: {}", e))?;

    tracing::info!("PostgreSQL schema initialized successfully");
    Ok(())
}
