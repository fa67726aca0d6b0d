//! Gateway types module
//!
//! Boundary types for the HTTP surface: the error envelope that maps
//! typed failures to status codes, and the response DTOs.

pub mod response;

pub use response::{ApiError, ApiResult, BalanceResponse, HealthResponse};
