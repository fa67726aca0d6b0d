//! Transfer execution engine

use std::sync::Arc;
use std::time::Duration;

use uuid::Uuid;

use super::error::TransferError;
use super::types::{TransferRequest, TransferResult, order_pair};
use crate::db::Database;
use crate::idempotency::IdempotencyCache;
use crate::ledger::LedgerStore;
use crate::wallet::{Wallet, WalletRepository};

/// Transfer orchestrator
///
/// Holds explicit handles to the store and the idempotency cache,
/// injected at construction. Each call to [`execute`] runs as one
/// all-or-nothing PostgreSQL transaction; the version CAS in the final
/// step is the backstop that keeps a stale balance read from
/// committing even when a concurrent transfer slips in between the
/// snapshot and the write.
///
/// [`execute`]: TransferService::execute
pub struct TransferService {
    db: Arc<Database>,
    cache: Arc<dyn IdempotencyCache>,
    result_ttl: Duration,
}

impl TransferService {
    pub fn new(db: Arc<Database>, cache: Arc<dyn IdempotencyCache>, result_ttl: Duration) -> Self {
        Self {
            db,
            cache,
            result_ttl,
        }
    }

    /// Execute a transfer exactly once per idempotency key
    ///
    /// On a cache hit the stored result is replayed unchanged and no
    /// wallet or ledger state is touched. Otherwise the transfer runs
    /// inside one transaction; every failure aborts the whole scope.
    /// Only successful results are memoized, so a caller may safely
    /// retry a failed attempt with the same key.
    pub async fn execute(
        &self,
        req: TransferRequest,
        idempotency_key: Uuid,
    ) -> Result<TransferResult, TransferError> {
        req.validate()?;

        // 1. Idempotency short-circuit
        let key = idempotency_key.to_string();
        if let Some(cached) = self.cache.get(&key).await {
            tracing::debug!(
                idempotency_key = %key,
                transaction_id = %cached.transaction_id,
                "Replaying memoized transfer result"
            );
            return Ok(cached);
        }

        // 2. Atomic scope: dropped (and rolled back) on every error path
        let mut tx = self.db.pool().begin().await?;

        // Fixed lexicographic order for all wallet reads
        let ordered = order_pair(req.from_wallet_id, req.to_wallet_id);
        let mut wallets: [Option<Wallet>; 2] = [None, None];
        for (slot, wallet_id) in wallets.iter_mut().zip(ordered) {
            *slot = WalletRepository::get_by_id(&mut *tx, wallet_id).await?;
        }

        let find = |id: Uuid| {
            wallets
                .iter()
                .flatten()
                .find(|w| w.wallet_id == id)
                .cloned()
        };
        let from_wallet = find(req.from_wallet_id).ok_or(TransferError::WalletNotFound)?;
        let to_wallet = find(req.to_wallet_id).ok_or(TransferError::WalletNotFound)?;

        // 3. Funds check, same snapshot as the wallet reads
        let balance = LedgerStore::sum_balance(&mut *tx, req.from_wallet_id).await?;
        if balance < req.amount {
            return Err(TransferError::InsufficientFunds);
        }

        // 4. Paired ledger entries under one fresh transaction id
        let transaction_id = Uuid::new_v4();
        LedgerStore::append(&mut *tx, req.from_wallet_id, transaction_id, -req.amount).await?;
        LedgerStore::append(&mut *tx, req.to_wallet_id, transaction_id, req.amount).await?;

        // 5. Optimistic version advance against the versions read above.
        // Zero rows affected means another transfer mutated the wallet
        // since our read; abort so the ledger entries roll back too.
        // The updates take row locks, so they follow the same fixed
        // order as the reads: two opposite-direction transfers then
        // queue on the first wallet instead of deadlocking on each
        // other's locked row.
        for wallet_id in ordered {
            let wallet = if wallet_id == from_wallet.wallet_id {
                &from_wallet
            } else {
                &to_wallet
            };
            if !WalletRepository::advance_version(&mut *tx, wallet.wallet_id, wallet.version)
                .await?
            {
                return Err(TransferError::VersionConflict);
            }
        }

        tx.commit().await?;

        let result = TransferResult {
            success: true,
            transaction_id,
        };

        // 6. Memoize only after a successful commit
        self.cache.put(&key, result.clone(), self.result_ttl).await;

        tracing::info!(
            transaction_id = %transaction_id,
            from_wallet = %req.from_wallet_id,
            to_wallet = %req.to_wallet_id,
            amount = %req.amount,
            "Transfer committed"
        );

        Ok(result)
    }
}
