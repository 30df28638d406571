//! # API Error Type
//!
//! Unified error type for the dashboard services.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in MediPOS                            │
//! │                                                                     │
//! │  Service call (e.g. billing::add_to_cart)                           │
//! │         │                                                           │
//! │         ▼                                                           │
//! │  Unknown id? ───────── CoreError::ProductNotFound ──┐               │
//! │         │                                           │               │
//! │         ▼                                           ▼               │
//! │  Rule violation? ──── CoreError / CheckoutError ── ApiError ──────► │
//! │         │                                                           │
//! │         ▼                                                           │
//! │  Success ─────────────────────────────────────────────────────────► │
//! │                                                                     │
//! │  The caller receives { code, message }: a machine-readable code     │
//! │  for programmatic handling plus a message fit for a toast.          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use thiserror::Error;

use medipos_core::{CheckoutError, CoreError};

/// API error returned from dashboard services.
///
/// ## Serialization
/// ```json
/// { "code": "NOT_FOUND", "message": "Product not found: 42" }
/// ```
#[derive(Debug, Clone, Error, Serialize)]
#[error("[{code:?}] {message}")]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling.
    pub code: ErrorCode,

    /// Human-readable error message for display.
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found.
    NotFound,

    /// Input validation failed.
    ValidationError,

    /// Cart operation rejected.
    CartError,

    /// Checkout transition rejected.
    CheckoutError,

    /// Adding was blocked by the out-of-stock policy.
    OutOfStock,

    /// Anything unexpected.
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => ApiError::not_found("Product", &id),
            CoreError::CustomerNotFound(id) => ApiError::not_found("Customer", &id),
            CoreError::OutOfStock { name, .. } => {
                ApiError::new(ErrorCode::OutOfStock, format!("{} is out of stock", name))
            }
            CoreError::EmptyCart => ApiError::new(ErrorCode::CartError, "Cart is empty"),
            CoreError::Checkout(e) => e.into(),
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

/// Converts checkout transition rejections to API errors.
impl From<CheckoutError> for ApiError {
    fn from(err: CheckoutError) -> Self {
        ApiError::new(ErrorCode::CheckoutError, err.to_string())
    }
}

/// Result alias used by all services.
pub type ApiResult<T> = Result<T, ApiError>;

// =============================================================================
// Unit Tests
// =============================================================================
