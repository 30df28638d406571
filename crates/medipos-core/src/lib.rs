//! # medipos-core: Pure Business Logic for MediPOS
//!
//! The heart of MediPOS: all billing logic as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      MediPOS Architecture                           │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                apps/dashboard (services)                      │  │
//! │  │   billing ── inventory ── customers ── reports ── insights    │  │
//! │  └──────────────────────────────┬────────────────────────────────┘  │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼────────────────────────────────┐  │
//! │  │              ★ medipos-core (THIS CRATE) ★                    │  │
//! │  │                                                               │  │
//! │  │   ┌────────┐ ┌────────┐ ┌────────┐ ┌──────────┐ ┌──────────┐  │  │
//! │  │   │ money  │ │ types  │ │  cart  │ │ checkout │ │validation│  │  │
//! │  │   │ Money  │ │Product │ │  Cart  │ │   FSM    │ │  rules   │  │  │
//! │  │   │TaxRate │ │Customer│ │LineItem│ │          │ │          │  │  │
//! │  │   └────────┘ └────────┘ └────────┘ └──────────┘ └──────────┘  │  │
//! │  │                                                               │  │
//! │  │   NO I/O • NO CLOCK • NO GLOBALS • PURE FUNCTIONS             │  │
//! │  └──────────────────────────────┬────────────────────────────────┘  │
//! │                                 │                                   │
//! │  ┌──────────────────────────────▼────────────────────────────────┐  │
//! │  │           medipos-catalog (seeded in-memory data)             │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money in integer paise and tax rates in basis points
//! - [`types`] - Domain types (Product, Customer, Transaction, ...)
//! - [`cart`] - The billing cart and its total computation
//! - [`checkout`] - The payment-flow state machine
//! - [`error`] - Domain error types
//! - [`validation`] - Boundary input validation
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: same input, same output, every time
//! 2. **No I/O**: database, network, clocks, and globals are forbidden here
//! 3. **Integer money**: all amounts are paise (i64), never floats
//! 4. **Explicit errors**: typed enums, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod checkout;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartTotals, LineItem};
pub use checkout::{CheckoutAction, CheckoutError, CheckoutFlow, CheckoutStage, CustomerDetails};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::{Money, TaxRate, GST_RATE};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum distinct lines allowed in a single cart.
///
/// Prevents runaway carts; a real bill at the counter never approaches this.
pub const MAX_CART_LINES: usize = 100;

/// Maximum quantity of a single line.
///
/// Prevents accidental over-ordering (typing 1000 instead of 10).
pub const MAX_LINE_QUANTITY: i64 = 999;
