use std::sync::Arc;

use crate::db::Database;
use crate::transfer::TransferService;

/// Shared gateway application state
///
/// Explicit handles only: the database pool for wallet and balance
/// reads, and the transfer service (which carries its own cache
/// handle). Opened at process start, dropped at shutdown.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub transfer_service: Arc<TransferService>,
}

impl AppState {
    pub fn new(db: Arc<Database>, transfer_service: Arc<TransferService>) -> Self {
        Self {
            db,
            transfer_service,
        }
    }
}
