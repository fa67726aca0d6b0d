//! Wallet handlers (creation, balance lookup)

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::super::state::AppState;
use super::super::types::{ApiError, ApiResult, BalanceResponse};
use crate::ledger::LedgerStore;
use crate::wallet::{Wallet, WalletRepository};

/// Create wallet request body
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateWalletBody {
    /// Owner reference, one wallet per owner
    #[schema(example = "user-alice-001")]
    pub owner_id: String,
}

/// Create a new wallet
///
/// POST /wallet
#[utoipa::path(
    post,
    path = "/wallet",
    request_body = CreateWalletBody,
    responses(
        (status = 201, description = "Wallet created with version 1", body = Wallet, content_type = "application/json"),
        (status = 400, description = "Owner ID fails validation"),
        (status = 409, description = "Owner already has a wallet")
    ),
    tag = "Wallet"
)]
pub async fn create_wallet(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateWalletBody>,
) -> Result<(StatusCode, Json<Wallet>), ApiError> {
    let owner_id = body.owner_id.trim();
    if owner_id.chars().count() < 3 {
        return Err(ApiError::bad_request(
            "Owner ID must be at least 3 characters long",
        ));
    }

    let wallet = WalletRepository::create(state.db.pool(), owner_id).await?;

    tracing::info!(wallet_id = %wallet.wallet_id, owner_id, "Wallet created");
    Ok((StatusCode::CREATED, Json(wallet)))
}

/// Get a wallet's derived balance
///
/// GET /wallet/{id}/balance
#[utoipa::path(
    get,
    path = "/wallet/{id}/balance",
    params(
        ("id" = String, Path, description = "Wallet ID")
    ),
    responses(
        (status = 200, description = "Summed ledger balance", body = BalanceResponse, content_type = "application/json"),
        (status = 400, description = "Blank wallet ID"),
        (status = 404, description = "Wallet not found")
    ),
    tag = "Wallet"
)]
pub async fn get_balance(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<BalanceResponse> {
    let id = id.trim();
    if id.is_empty() {
        return Err(ApiError::bad_request("Invalid wallet ID"));
    }

    // A malformed id cannot name any wallet
    let wallet_id =
        Uuid::parse_str(id).map_err(|_| ApiError::not_found("Wallet not found"))?;

    WalletRepository::get_by_id(state.db.pool(), wallet_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Wallet not found"))?;

    let balance = LedgerStore::sum_balance(state.db.pool(), wallet_id).await?;

    Ok(Json(BalanceResponse { balance }))
}
