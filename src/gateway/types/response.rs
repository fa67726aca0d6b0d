//! API error envelope and response DTOs

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use crate::transfer::TransferError;
use crate::wallet::WalletError;

/// Handler result: JSON body on success, error envelope otherwise
pub type ApiResult<T> = Result<Json<T>, ApiError>;

/// Error response body
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    #[schema(example = "Wallet not found")]
    pub message: String,
}

/// HTTP error with status code and structured message
///
/// Unrecognized failures are logged at the boundary and surface as a
/// plain 500 without internal detail.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(StatusCode::SERVICE_UNAVAILABLE, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorBody {
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<TransferError> for ApiError {
    fn from(e: TransferError) -> Self {
        if let TransferError::Database(db_err) = &e {
            tracing::error!("Transfer storage failure: {}", db_err);
            return ApiError::internal();
        }
        let status =
            StatusCode::from_u16(e.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        ApiError::new(status, e.to_string())
    }
}

impl From<WalletError> for ApiError {
    fn from(e: WalletError) -> Self {
        match e {
            WalletError::AlreadyExists => ApiError::conflict(e.to_string()),
            WalletError::Database(db_err) => {
                tracing::error!("Wallet storage failure: {}", db_err);
                ApiError::internal()
            }
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(e: sqlx::Error) -> Self {
        tracing::error!("Storage failure: {}", e);
        ApiError::internal()
    }
}

/// Balance response data
#[derive(Debug, Serialize, ToSchema)]
pub struct BalanceResponse {
    /// Algebraic sum of the wallet's ledger entries
    #[schema(value_type = f64, example = 1000.0)]
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
}

/// Health check response data
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
    /// Server time, RFC 3339
    #[schema(example = "2026-01-01T00:00:00Z")]
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transfer_errors_map_to_contract_statuses() {
        let cases = [
            (TransferError::InvalidAmount, StatusCode::BAD_REQUEST),
            (TransferError::WalletNotFound, StatusCode::NOT_FOUND),
            (TransferError::InsufficientFunds, StatusCode::CONFLICT),
            (TransferError::VersionConflict, StatusCode::CONFLICT),
            (TransferError::SameWallet, StatusCode::CONFLICT),
            (
                TransferError::Database(sqlx::Error::PoolClosed),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            let api: ApiError = err.into();
            assert_eq!(api.status, expected);
        }
    }

    #[test]
    fn test_storage_failures_do_not_leak_detail() {
        let api: ApiError = TransferError::Database(sqlx::Error::PoolClosed).into();
        assert_eq!(api.message, "Internal Server Error");
    }

    #[test]
    fn test_duplicate_owner_maps_to_conflict() {
        let api: ApiError = WalletError::AlreadyExists.into();
        assert_eq!(api.status, StatusCode::CONFLICT);
    }

    #[test]
    fn test_balance_serializes_as_json_number() {
        let body = BalanceResponse {
            balance: Decimal::from(700),
        };
        let json = serde_json::to_value(&body).expect("Should serialize");
        assert!(json["balance"].is_number(), "balance must be a number, got {}", json["balance"]);
        assert_eq!(json["balance"], serde_json::json!(700.0));
    }
}
