//! Wallet data model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A wallet: one per owner, with a monotonically increasing version
///
/// `version` starts at 1 and advances by exactly 1 on every successful
/// mutation. Mutators must present the version they read; a stale
/// version makes the conditional update affect zero rows.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    #[serde(rename = "id")]
    pub wallet_id: Uuid,
    pub owner_id: String,
    pub version: i64,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wallet_serializes_with_api_field_names() {
        let wallet = Wallet {
            wallet_id: Uuid::nil(),
            owner_id: "user-alice-001".to_string(),
            version: 1,
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&wallet).unwrap();
        assert!(json.get("id").is_some(), "wallet_id maps to 'id'");
        assert!(json.get("ownerId").is_some());
        assert_eq!(json["version"], 1);
    }
}
