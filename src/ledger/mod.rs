//! Ledger module
//!
//! Append-only record of signed monetary movements. Balances are never
//! stored; they are derived by summing a wallet's entries.

pub mod models;
pub mod store;

pub use models::LedgerEntry;
pub use store::LedgerStore;
