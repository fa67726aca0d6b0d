//! Transfer request and result types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::error::TransferError;

/// A validated transfer request handed to the orchestrator
#[derive(Debug, Clone)]
pub struct TransferRequest {
    pub from_wallet_id: Uuid,
    pub to_wallet_id: Uuid,
    pub amount: Decimal,
}

impl TransferRequest {
    /// Up-front precondition checks, before any cache or storage access
    ///
    /// Self-transfers are forbidden outright: the net ledger effect
    /// would be zero but the version counter would advance only once,
    /// so the operation has no meaningful outcome to memoize.
    pub fn validate(&self) -> Result<(), TransferError> {
        if self.amount <= Decimal::ZERO {
            return Err(TransferError::InvalidAmount);
        }
        if self.from_wallet_id == self.to_wallet_id {
            return Err(TransferError::SameWallet);
        }
        Ok(())
    }
}

/// The memoized outcome of a committed transfer
///
/// Replayed unchanged for every subsequent call bearing the same
/// idempotency key.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransferResult {
    pub success: bool,
    pub transaction_id: Uuid,
}

/// Sort a wallet id pair into its fixed processing order
///
/// All transfers read and update wallets in lexicographic id order, so
/// two concurrent transfers touching the same pair in opposite
/// directions cannot form a circular wait.
pub fn order_pair(a: Uuid, b: Uuid) -> [Uuid; 2] {
    if a <= b { [a, b] } else { [b, a] }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_pair_is_deterministic() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();

        assert_eq!(order_pair(a, b), order_pair(b, a));
        let [first, second] = order_pair(a, b);
        assert!(first <= second);
    }

    #[test]
    fn test_validate_rejects_non_positive_amount() {
        let req = TransferRequest {
            from_wallet_id: Uuid::new_v4(),
            to_wallet_id: Uuid::new_v4(),
            amount: Decimal::ZERO,
        };
        assert!(matches!(req.validate(), Err(TransferError::InvalidAmount)));

        let negative = TransferRequest {
            amount: Decimal::from(-5),
            ..req
        };
        assert!(matches!(
            negative.validate(),
            Err(TransferError::InvalidAmount)
        ));
    }

    #[test]
    fn test_validate_rejects_self_transfer() {
        let id = Uuid::new_v4();
        let req = TransferRequest {
            from_wallet_id: id,
            to_wallet_id: id,
            amount: Decimal::from(100),
        };
        assert!(matches!(req.validate(), Err(TransferError::SameWallet)));
    }

    #[test]
    fn test_validate_accepts_positive_amount() {
        let req = TransferRequest {
            from_wallet_id: Uuid::new_v4(),
            to_wallet_id: Uuid::new_v4(),
            amount: Decimal::new(3001, 2), // 30.01
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let result = TransferResult {
            success: true,
            transaction_id: Uuid::nil(),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["success"], true);
        assert!(json.get("transactionId").is_some());
    }
}
