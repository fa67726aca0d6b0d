//! Gateway request handlers

pub mod health;
pub mod transfer;
pub mod wallet;

pub use health::health_check;
pub use transfer::execute_transfer;
pub use wallet::{create_wallet, get_balance};
