//! Wallet Ledger - double-entry transfer engine
//!
//! Moves money between wallets while guaranteeing that no transfer is
//! lost, duplicated, or applied against a stale balance, even under
//! concurrent requests.
//!
//! # Modules
//!
//! - [`db`] - PostgreSQL pool and schema
//! - [`wallet`] - Wallet registry with per-wallet version counters
//! - [`ledger`] - Append-only ledger store, balance by aggregation
//! - [`idempotency`] - Result memoization keyed by client UUID
//! - [`transfer`] - The transfer orchestrator
//! - [`gateway`] - HTTP surface (axum)
//! - [`config`] / [`logging`] - Process wiring

pub mod config;
pub mod db;
pub mod gateway;
pub mod idempotency;
pub mod ledger;
pub mod logging;
pub mod transfer;
pub mod wallet;

// Convenient re-exports at crate root
pub use config::AppConfig;
pub use db::Database;
pub use idempotency::{IdempotencyCache, MemoryIdempotencyCache};
pub use ledger::{LedgerEntry, LedgerStore};
pub use transfer::{TransferError, TransferRequest, TransferResult, TransferService};
pub use wallet::{Wallet, WalletError, WalletRepository};
