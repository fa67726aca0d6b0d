//! Wallet registry module
//!
//! PostgreSQL-backed storage for wallet identity and the per-wallet
//! version counter used for optimistic concurrency control.

pub mod models;
pub mod repository;

pub use models::Wallet;
pub use repository::{WalletError, WalletRepository};
