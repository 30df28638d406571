//! # Cart Module
//!
//! The billing engine: an ordered collection of line items with pure total
//! computation.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Cart Operations                                │
//! │                                                                     │
//! │  Screen Action            Operation              Cart Change        │
//! │  ─────────────            ─────────              ───────────        │
//! │  Click product ─────────► add(product) ────────► qty += 1 or push   │
//! │  Change quantity ───────► set_quantity(id, n) ─► qty = n (n>0)      │
//! │  Quantity down to 0 ────► set_quantity(id, 0) ─► line removed       │
//! │  Click remove ──────────► remove(id) ──────────► line removed       │
//! │  Payment completed ─────► clear() ─────────────► empty cart         │
//! │                                                                     │
//! │  totals(rate) is pure and recomputed on every call; nothing is      │
//! │  cached, so there is no invalidation to get wrong.                  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Lines are unique by product id (adding the same product increments
//!   its quantity, never inserts a second row).
//! - Quantity is always >= 1; setting it to zero or below removes the line.
//! - Insertion order is preserved for display and carries no other meaning.
//! - Mutations on ids not present in the cart are no-ops, never errors.

use serde::{Deserialize, Serialize};

use crate::money::{Money, TaxRate};
use crate::types::Product;

// =============================================================================
// Line Item
// =============================================================================

/// One row in the cart: a product snapshot plus a quantity.
///
/// ## Price Freezing
/// The identity and unit price are captured when the product is first added.
/// The catalog is read-only in this system, but freezing keeps the cart
/// self-contained: line totals never depend on a lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Product id this line refers to.
    pub product_id: String,

    /// Product name at time of adding.
    pub name: String,

    /// Unit selling price in paise at time of adding.
    pub unit_price_paise: i64,

    /// Quantity on this line. Always >= 1.
    pub quantity: i64,
}

impl LineItem {
    fn from_product(product: &Product) -> Self {
        LineItem {
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit_price_paise: product.selling_price_paise,
            quantity: 1,
        }
    }

    /// Unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_paise(self.unit_price_paise)
    }

    /// Line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The billing cart. Created empty at the start of a session, mutated only
/// through the operations below, and cleared when a payment completes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Lines in insertion order, unique by product id.
    items: Vec<LineItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Adds one unit of a product.
    ///
    /// If a line for this product exists its quantity increments by one;
    /// otherwise a new line is appended with quantity 1. Total for any valid
    /// product — stock levels are informational here, and whichever service
    /// wants to block out-of-stock adds does so before calling this.
    pub fn add(&mut self, product: &Product) {
        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product.id) {
            item.quantity += 1;
        } else {
            self.items.push(LineItem::from_product(product));
        }
    }

    /// Sets the quantity of an existing line.
    ///
    /// A quantity of zero or below removes the line, identical to
    /// [`Cart::remove`]. An id not present in the cart is a no-op: no error,
    /// no new row. That keeps quantity steppers on the screen robust against
    /// racing a removal.
    pub fn set_quantity(&mut self, product_id: &str, quantity: i64) {
        if quantity <= 0 {
            self.remove(product_id);
            return;
        }

        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product_id) {
            item.quantity = quantity;
        }
    }

    /// Removes the line matching `product_id`, if present.
    pub fn remove(&mut self, product_id: &str) {
        self.items.retain(|i| i.product_id != product_id);
    }

    /// Empties the cart. Called when a payment completes; cancelling the
    /// checkout flow does NOT clear the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Looks up a line by product id.
    pub fn line(&self, product_id: &str) -> Option<&LineItem> {
        self.items.iter().find(|i| i.product_id == product_id)
    }

    /// Number of lines (unique products).
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of line totals, before tax.
    pub fn subtotal(&self) -> Money {
        self.items
            .iter()
            .fold(Money::zero(), |acc, i| acc + i.line_total())
    }

    /// Computes subtotal, tax, and grand total at the given rate.
    ///
    /// Pure function of the current cart contents; an empty cart yields all
    /// zeros.
    ///
    /// ## Example
    /// ```rust
    /// use medipos_core::cart::Cart;
    /// use medipos_core::money::GST_RATE;
    ///
    /// let totals = Cart::new().totals(GST_RATE);
    /// assert_eq!(totals.total_paise, 0);
    /// ```
    pub fn totals(&self, rate: TaxRate) -> CartTotals {
        let subtotal = self.subtotal();
        let tax = subtotal.calculate_tax(rate);
        CartTotals {
            line_count: self.line_count(),
            total_quantity: self.total_quantity(),
            subtotal_paise: subtotal.paise(),
            tax_paise: tax.paise(),
            total_paise: (subtotal + tax).paise(),
        }
    }
}

/// Cart totals summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub line_count: usize,
    pub total_quantity: i64,
    pub subtotal_paise: i64,
    pub tax_paise: i64,
    pub total_paise: i64,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::GST_RATE;
    use crate::types::ProductStatus;
    use chrono::NaiveDate;

    fn test_product(id: &str, price_rupees: i64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            salt: "Salt".to_string(),
            manufacturer: "Acme Pharma".to_string(),
            category: "Pain Relief".to_string(),
            batch: format!("BATCH{}", id),
            mrp_paise: price_rupees * 100 + 300,
            cost_price_paise: price_rupees * 50,
            selling_price_paise: price_rupees * 100,
            current_stock: 100,
            min_stock: 10,
            max_stock: 200,
            expiry_date: NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
            rack_location: "A1-A1".to_string(),
            barcode: format!("890123456789{}", id),
            status: ProductStatus::Active,
        }
    }

    #[test]
    fn test_add_new_product() {
        let mut cart = Cart::new();
        cart.add(&test_product("1", 12));

        assert_eq!(cart.line_count(), 1);
        let line = cart.line("1").unwrap();
        assert_eq!(line.quantity, 1);
        assert_eq!(line.line_total().paise(), 1200);
    }

    #[test]
    fn test_add_same_product_increments_quantity() {
        let mut cart = Cart::new();
        let product = test_product("1", 12);

        // Repeated adds never create a second row
        for _ in 0..5 {
            cart.add(&product);
        }

        assert_eq!(cart.line_count(), 1);
        let line = cart.line("1").unwrap();
        assert_eq!(line.quantity, 5);
        assert_eq!(line.line_total().paise(), 6000);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut cart = Cart::new();
        cart.add(&test_product("b", 10));
        cart.add(&test_product("a", 20));
        cart.add(&test_product("b", 10)); // increments, does not move

        let ids: Vec<&str> = cart.items().iter().map(|i| i.product_id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_set_quantity() {
        let mut cart = Cart::new();
        cart.add(&test_product("1", 12));

        cart.set_quantity("1", 7);
        assert_eq!(cart.line("1").unwrap().quantity, 7);
        assert_eq!(cart.line("1").unwrap().line_total().paise(), 8400);
    }

    #[test]
    fn test_set_quantity_zero_removes_line() {
        let mut cart = Cart::new();
        let product = test_product("1", 12);
        cart.add(&product);
        cart.add(&product);
        assert_eq!(cart.line("1").unwrap().quantity, 2);

        cart.set_quantity("1", 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_negative_quantity_removes_line() {
        let mut cart = Cart::new();
        cart.add(&test_product("1", 12));

        cart.set_quantity("1", -3);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_unknown_id_is_noop() {
        let mut cart = Cart::new();
        cart.add(&test_product("1", 12));
        let before = cart.clone();

        cart.set_quantity("missing", 4);
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut cart = Cart::new();
        cart.add(&test_product("1", 12));
        let before = cart.clone();

        cart.remove("never-added");
        assert_eq!(cart, before);

        let mut empty = Cart::new();
        empty.remove("never-added");
        assert!(empty.is_empty());
    }

    #[test]
    fn test_totals_empty_cart() {
        let totals = Cart::new().totals(GST_RATE);
        assert_eq!(totals.subtotal_paise, 0);
        assert_eq!(totals.tax_paise, 0);
        assert_eq!(totals.total_paise, 0);
    }

    #[test]
    fn test_totals_two_products() {
        // ₹12 + ₹38 = ₹50 subtotal, ₹9 GST, ₹59 total
        let mut cart = Cart::new();
        cart.add(&test_product("a", 12));
        cart.add(&test_product("b", 38));

        let totals = cart.totals(GST_RATE);
        assert_eq!(totals.subtotal_paise, 5000);
        assert_eq!(totals.tax_paise, 900);
        assert_eq!(totals.total_paise, 5900);
        assert_eq!(totals.total_paise, totals.subtotal_paise + totals.tax_paise);
    }

    #[test]
    fn test_totals_track_quantity_changes() {
        let mut cart = Cart::new();
        let product = test_product("a", 12);
        cart.add(&product);
        cart.add(&product);

        let line = cart.line("a").unwrap();
        assert_eq!(line.quantity, 2);
        assert_eq!(line.line_total().paise(), 2400);

        cart.set_quantity("a", 0);
        assert!(cart.is_empty());
        assert_eq!(cart.totals(GST_RATE).total_paise, 0);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add(&test_product("1", 12));
        cart.add(&test_product("2", 38));
        assert_eq!(cart.total_quantity(), 2);

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total_quantity(), 0);
    }
}
