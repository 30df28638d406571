//! # Error Types
//!
//! Domain-specific error types for medipos-core.
//!
//! Almost everything in the billing engine is total: cart mutations on
//! unknown ids are no-ops and totals can always be computed. What remains
//! are genuine business-rule rejections (out-of-stock under a blocking
//! policy, completing with an empty cart) and input validation.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impls)
//! 2. Include context in messages (ids, names, limits)
//! 3. Errors are enum variants, never bare Strings

use thiserror::Error;

use crate::checkout::CheckoutError;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Product id does not exist in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Customer id does not exist in the directory.
    #[error("Customer not found: {0}")]
    CustomerNotFound(String),

    /// Adding was rejected because the product is out of stock and the
    /// configured stock policy blocks such adds.
    #[error("{name} is out of stock")]
    OutOfStock { product_id: String, name: String },

    /// Payment was attempted on an empty cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// A checkout transition was rejected.
    #[error(transparent)]
    Checkout(#[from] CheckoutError),

    /// Input validation failed.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors, raised before business logic runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
    },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: &'static str },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
