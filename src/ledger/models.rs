//! Ledger entry data model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One immutable ledger fact
///
/// Every transfer produces exactly two entries sharing one
/// `transaction_id`: a negative debit on the source wallet and a
/// positive credit on the destination, summing to zero. Entries are
/// never updated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LedgerEntry {
    pub entry_id: i64,
    pub wallet_id: Uuid,
    pub transaction_id: Uuid,
    pub amount: Decimal,
    pub created_at: DateTime<Utc>,
}
