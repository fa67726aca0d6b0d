//! OpenAPI / Swagger UI documentation
//!
//! - Swagger UI: `http://localhost:3000/docs`
//! - OpenAPI JSON: `http://localhost:3000/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::gateway::handlers::transfer::TransferBody;
use crate::gateway::handlers::wallet::CreateWalletBody;
use crate::gateway::types::response::{BalanceResponse, ErrorBody, HealthResponse};
use crate::transfer::TransferResult;
use crate::wallet::Wallet;

/// Main API documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Wallet Ledger API",
        version = "1.0.0",
        description = "Double-entry wallet ledger with optimistic concurrency and idempotent transfers.",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health::health_check,
        crate::gateway::handlers::wallet::create_wallet,
        crate::gateway::handlers::wallet::get_balance,
        crate::gateway::handlers::transfer::execute_transfer,
    ),
    components(schemas(
        Wallet,
        CreateWalletBody,
        TransferBody,
        TransferResult,
        BalanceResponse,
        HealthResponse,
        ErrorBody,
    )),
    tags(
        (name = "System", description = "Health and diagnostics"),
        (name = "Wallet", description = "Wallet creation and balance lookup"),
        (name = "Transfer", description = "Idempotent wallet-to-wallet transfers"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_document_builds() {
        let doc = ApiDoc::openapi();
        let json = doc.to_json().expect("OpenAPI doc should serialize");
        assert!(json.contains("/transfer"));
        assert!(json.contains("/wallet/{id}/balance"));
    }
}
