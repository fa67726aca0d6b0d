//! Transfer error types

use thiserror::Error;

/// Typed transfer failures
///
/// Any failure raised inside the transaction scope unwinds the whole
/// scope; no partial ledger write survives a failed transfer. The
/// orchestrator never retries on its own — retry is a caller decision
/// with a fresh idempotency key, since only successes are memoized.
#[derive(Error, Debug)]
pub enum TransferError {
    // === Validation Errors ===
    #[error("Source and destination wallets are the same")]
    SameWallet,

    #[error("Amount must be greater than zero")]
    InvalidAmount,

    // === Wallet Errors ===
    #[error("Wallet not found")]
    WalletNotFound,

    #[error("Insufficient funds")]
    InsufficientFunds,

    // === Concurrency Errors ===
    #[error("Wallet version conflict, a concurrent transfer committed first")]
    VersionConflict,

    // === System Errors ===
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl TransferError {
    /// Get the error code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            TransferError::SameWallet => "SAME_WALLET",
            TransferError::InvalidAmount => "INVALID_AMOUNT",
            TransferError::WalletNotFound => "WALLET_NOT_FOUND",
            TransferError::InsufficientFunds => "INSUFFICIENT_FUNDS",
            TransferError::VersionConflict => "VERSION_CONFLICT",
            TransferError::Database(_) => "DATABASE_ERROR",
        }
    }

    /// Get HTTP status code suggestion
    pub fn http_status(&self) -> u16 {
        match self {
            TransferError::InvalidAmount => 400,
            TransferError::WalletNotFound => 404,
            TransferError::SameWallet
            | TransferError::InsufficientFunds
            | TransferError::VersionConflict => 409,
            TransferError::Database(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(TransferError::SameWallet.code(), "SAME_WALLET");
        assert_eq!(TransferError::InsufficientFunds.code(), "INSUFFICIENT_FUNDS");
        assert_eq!(TransferError::VersionConflict.code(), "VERSION_CONFLICT");
    }

    #[test]
    fn test_http_status() {
        assert_eq!(TransferError::InvalidAmount.http_status(), 400);
        assert_eq!(TransferError::WalletNotFound.http_status(), 404);
        assert_eq!(TransferError::InsufficientFunds.http_status(), 409);
        assert_eq!(TransferError::VersionConflict.http_status(), 409);
        assert_eq!(
            TransferError::Database(sqlx::Error::PoolClosed).http_status(),
            500
        );
    }

    #[test]
    fn test_display() {
        let err = TransferError::InsufficientFunds;
        assert_eq!(err.to_string(), "Insufficient funds");
    }
}
