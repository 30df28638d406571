//! # Domain Types
//!
//! Core domain types used throughout MediPOS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌────────────────┐  ┌────────────────┐  ┌────────────────┐         │
//! │  │    Product     │  │    Customer    │  │  Transaction   │         │
//! │  │  ────────────  │  │  ────────────  │  │  ────────────  │         │
//! │  │  id            │  │  id            │  │  id (UUID)     │         │
//! │  │  name, salt    │  │  name, phone   │  │  customer_id   │         │
//! │  │  selling_price │  │  last_visit    │  │  amount_paise  │         │
//! │  │  stock levels  │  │  prescriptions │  │  method        │         │
//! │  │  expiry_date   │  └────────────────┘  └────────────────┘         │
//! │  └────────────────┘                                                 │
//! │                                                                     │
//! │  Plus the status enums: ProductStatus, CustomerStatus,              │
//! │  TransactionStatus, PaymentMethod.                                  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The billing engine treats `Product` as an opaque immutable record; stock
//! levels are informational to the cart and only enforced by whichever
//! service applies a stock policy.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// Stock status of a product, as shown on inventory badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductStatus {
    /// Normal stock levels.
    Active,
    /// At or below the minimum stock level.
    LowStock,
    /// Nothing left on the shelf.
    OutOfStock,
}

/// A pharmacy product available for sale.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier.
    pub id: String,

    /// Display name shown on the grid and on receipts.
    pub name: String,

    /// Active ingredient (searchable alongside the name).
    pub salt: String,

    /// Manufacturer name.
    pub manufacturer: String,

    /// Category used by the inventory filter chips.
    pub category: String,

    /// Batch number.
    pub batch: String,

    /// Maximum retail price in paise.
    pub mrp_paise: i64,

    /// Purchase cost in paise (for margin reporting).
    pub cost_price_paise: i64,

    /// Selling price in paise. This is the price billed.
    pub selling_price_paise: i64,

    /// Units currently on the shelf.
    pub current_stock: i64,

    /// Reorder threshold.
    pub min_stock: i64,

    /// Shelf capacity.
    pub max_stock: i64,

    /// Expiry date of the current batch.
    pub expiry_date: NaiveDate,

    /// Physical rack location, e.g. "A1-B2".
    pub rack_location: String,

    /// EAN-13 barcode.
    pub barcode: String,

    /// Stock status badge.
    pub status: ProductStatus,
}

impl Product {
    /// Returns the selling price as Money.
    #[inline]
    pub fn selling_price(&self) -> Money {
        Money::from_paise(self.selling_price_paise)
    }

    /// Returns the maximum retail price as Money.
    #[inline]
    pub fn mrp(&self) -> Money {
        Money::from_paise(self.mrp_paise)
    }

    /// Returns the purchase cost as Money.
    #[inline]
    pub fn cost_price(&self) -> Money {
        Money::from_paise(self.cost_price_paise)
    }

    /// Checks whether stock is at or below the reorder threshold.
    #[inline]
    pub fn is_low_stock(&self) -> bool {
        self.current_stock <= self.min_stock
    }

    /// Checks whether the shelf is empty.
    #[inline]
    pub fn is_out_of_stock(&self) -> bool {
        self.current_stock <= 0
    }

    /// Shelf fill level as a percentage of capacity.
    pub fn stock_percentage(&self) -> f64 {
        if self.max_stock <= 0 {
            return 0.0;
        }
        self.current_stock as f64 / self.max_stock as f64 * 100.0
    }

    /// Days until the current batch expires, negative if already expired.
    pub fn days_until_expiry(&self, today: NaiveDate) -> i64 {
        (self.expiry_date - today).num_days()
    }

    /// Checks whether the batch expires within `days` days (and has not
    /// expired yet).
    pub fn expires_within(&self, days: i64, today: NaiveDate) -> bool {
        let remaining = self.days_until_expiry(today);
        remaining > 0 && remaining <= days
    }
}

// =============================================================================
// Customer
// =============================================================================

/// Whether a customer record is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomerStatus {
    Active,
    Inactive,
}

/// A customer record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    /// Lifetime purchase total in paise.
    pub total_purchases_paise: i64,
    pub last_visit: NaiveDate,
    /// Number of prescriptions on file.
    pub prescriptions: u32,
    pub status: CustomerStatus,
}

impl Customer {
    /// Returns the lifetime purchase total as Money.
    #[inline]
    pub fn total_purchases(&self) -> Money {
        Money::from_paise(self.total_purchases_paise)
    }
}

// =============================================================================
// Payment Method
// =============================================================================

/// How a bill was settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    Upi,
    Card,
    Credit,
}

impl PaymentMethod {
    /// All methods offered in the checkout flow, in display order.
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::Cash,
        PaymentMethod::Upi,
        PaymentMethod::Card,
        PaymentMethod::Credit,
    ];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Upi => "UPI",
            PaymentMethod::Card => "Card",
            PaymentMethod::Credit => "Credit",
        }
    }
}

// =============================================================================
// Transaction
// =============================================================================

/// The status of a recorded transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    Completed,
    Pending,
    Cancelled,
}

/// A settled (or pending) bill.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    /// Customer the bill was raised for, if one was captured.
    pub customer_id: Option<String>,
    /// Grand total in paise (subtotal + GST).
    pub amount_paise: i64,
    /// Number of line items on the bill.
    pub items: u32,
    pub status: TransactionStatus,
    pub method: PaymentMethod,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Returns the bill amount as Money.
    #[inline]
    pub fn amount(&self) -> Money {
        Money::from_paise(self.amount_paise)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
