//! Transfer handler

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::super::state::AppState;
use super::super::types::{ApiError, ApiResult};
use crate::transfer::{TransferRequest, TransferResult};

/// Transfer request body
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransferBody {
    #[schema(example = "5f0c51a2-6f91-4bd8-9f8a-2a8f54a1a3c7")]
    pub from_wallet_id: String,
    #[schema(example = "f4b6f2cd-30e2-49a9-8a14-9e4f0f2a61d3")]
    pub to_wallet_id: String,
    #[schema(value_type = f64, example = 300.0)]
    pub amount: Decimal,
}

/// Execute a transfer between two wallets
///
/// POST /transfer
///
/// Requires an `Idempotency-Key` header carrying a well-formed UUID.
/// Replays with a memoized key return the stored result unchanged and
/// mutate nothing.
#[utoipa::path(
    post,
    path = "/transfer",
    request_body = TransferBody,
    params(
        ("Idempotency-Key" = String, Header, description = "Client-supplied idempotency token (UUID)")
    ),
    responses(
        (status = 200, description = "Transfer committed or idempotent replay", body = TransferResult, content_type = "application/json"),
        (status = 400, description = "Missing/invalid Idempotency-Key or invalid body"),
        (status = 404, description = "Either wallet does not exist"),
        (status = 409, description = "Insufficient funds or optimistic-version conflict"),
        (status = 500, description = "Unexpected storage failure")
    ),
    tag = "Transfer"
)]
pub async fn execute_transfer(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<TransferBody>,
) -> ApiResult<TransferResult> {
    let idempotency_key = extract_idempotency_key(&headers)?;

    if body.from_wallet_id.is_empty() {
        return Err(ApiError::bad_request("From Wallet ID is required"));
    }
    if body.to_wallet_id.is_empty() {
        return Err(ApiError::bad_request("To Wallet ID is required"));
    }
    if body.amount <= Decimal::ZERO {
        return Err(ApiError::bad_request("Amount must be greater than zero"));
    }

    let req = TransferRequest {
        from_wallet_id: parse_wallet_id(&body.from_wallet_id)?,
        to_wallet_id: parse_wallet_id(&body.to_wallet_id)?,
        amount: body.amount,
    };

    let result = state.transfer_service.execute(req, idempotency_key).await?;
    Ok(Json(result))
}

/// Extract and validate the Idempotency-Key header
fn extract_idempotency_key(headers: &HeaderMap) -> Result<Uuid, ApiError> {
    let raw = headers
        .get("Idempotency-Key")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| ApiError::bad_request("Idempotency-Key header is required"))?;

    Uuid::parse_str(raw).map_err(|_| ApiError::bad_request("Idempotency-Key must be a valid UUID"))
}

/// A well-formed but unknown id and a malformed id are the same thing
/// to the caller: no such wallet.
fn parse_wallet_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::not_found("Wallet not found"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderValue, StatusCode};

    #[test]
    fn test_missing_idempotency_key_rejected() {
        let headers = HeaderMap::new();
        let err = extract_idempotency_key(&headers).unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_malformed_idempotency_key_rejected() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "Idempotency-Key",
            HeaderValue::from_static("not-a-uuid"),
        );
        let err = extract_idempotency_key(&headers).unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_well_formed_idempotency_key_accepted() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "Idempotency-Key",
            HeaderValue::from_static("5f0c51a2-6f91-4bd8-9f8a-2a8f54a1a3c7"),
        );
        assert!(extract_idempotency_key(&headers).is_ok());
    }

    #[test]
    fn test_malformed_wallet_id_is_not_found() {
        let err = parse_wallet_id("no-such-wallet").unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_body_field_names_are_camel_case() {
        let body: TransferBody = serde_json::from_value(serde_json::json!({
            "fromWalletId": "5f0c51a2-6f91-4bd8-9f8a-2a8f54a1a3c7",
            "toWalletId": "f4b6f2cd-30e2-49a9-8a14-9e4f0f2a61d3",
            "amount": 300
        }))
        .expect("camelCase body should deserialize");
        assert_eq!(body.amount, Decimal::from(300));
    }
}
