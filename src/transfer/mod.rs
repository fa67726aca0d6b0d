//! Transfer orchestrator
//!
//! Executes a transfer exactly once per idempotency key by composing
//! the wallet registry, the ledger store and the idempotency cache
//! inside one atomic transaction scope:
//!
//! ```text
//! caller → [cache lookup] → [tx: wallet reads → funds check
//!        → paired ledger appends → version CAS] → [cache store] → result
//! ```
//!
//! Mutual exclusion between concurrent transfers touching the same
//! wallet comes solely from the version-conditioned update; no locks
//! are taken.

pub mod error;
pub mod service;
pub mod types;

pub use error::TransferError;
pub use service::TransferService;
pub use types::{TransferRequest, TransferResult};
