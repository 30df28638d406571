//! # Billing Service
//!
//! The point-of-sale screen: product grid with stock badges, the cart, and
//! the checkout flow.
//!
//! ## Screen Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Billing Screen                                   │
//! │                                                                     │
//! │  Search box ──► product_grid(query) ──► tiles with stock badges     │
//! │  Click tile ──► add_to_cart(id) ──────► cart view (items + totals)  │
//! │  Stepper    ──► update_cart_item(id,n)                              │
//! │  Bin icon   ──► remove_from_cart(id)                                │
//! │                                                                     │
//! │  "Proceed to Payment" ──► begin_checkout ──► stepper dialog         │
//! │      checkout_next / checkout_back / select_payment_method          │
//! │      complete_payment ──► receipt, cart cleared, dialog closed      │
//! │      cancel_checkout  ──► dialog closed, cart kept                  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use medipos_core::checkout::{CheckoutFlow, CheckoutStage, CustomerDetails};
use medipos_core::types::{PaymentMethod, Product, Transaction, TransactionStatus};
use medipos_core::{validation, CartTotals, CoreError, LineItem};

use crate::error::{ApiError, ApiResult, ErrorCode};
use crate::state::{CartState, CatalogState, CheckoutState, ConfigState, StockPolicy};

/// Stock level shown on a product tile.
const LOW_STOCK_BADGE_AT: i64 = 10;

// =============================================================================
// DTOs
// =============================================================================

/// Stock badge severity for a product tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockLevel {
    OutOfStock,
    Low,
    Ok,
}

/// One tile on the billing product grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductTile {
    pub id: String,
    pub name: String,
    pub manufacturer: String,
    pub salt: String,
    pub selling_price_paise: i64,
    pub stock_level: StockLevel,
    pub stock_label: String,
    /// Whether the add button is enabled under the current stock policy.
    pub can_add: bool,
}

impl ProductTile {
    fn from_product(product: &Product, policy: StockPolicy) -> Self {
        let (stock_level, stock_label) = if product.current_stock <= 0 {
            (StockLevel::OutOfStock, "Out of Stock".to_string())
        } else if product.current_stock <= LOW_STOCK_BADGE_AT {
            (StockLevel::Low, format!("Stock: {}", product.current_stock))
        } else {
            (StockLevel::Ok, format!("Stock: {}", product.current_stock))
        };

        let can_add =
            policy == StockPolicy::Informational || stock_level != StockLevel::OutOfStock;

        ProductTile {
            id: product.id.clone(),
            name: product.name.clone(),
            manufacturer: product.manufacturer.clone(),
            salt: product.salt.clone(),
            selling_price_paise: product.selling_price_paise,
            stock_level,
            stock_label,
            can_add,
        }
    }
}

/// Cart contents plus computed totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub items: Vec<LineItem>,
    pub totals: CartTotals,
}

/// Snapshot of the checkout dialog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutView {
    pub stage: CheckoutStage,
    pub customer: CustomerDetails,
    pub method: Option<PaymentMethod>,
}

impl From<&CheckoutFlow> for CheckoutView {
    fn from(flow: &CheckoutFlow) -> Self {
        CheckoutView {
            stage: flow.stage(),
            customer: flow.customer().clone(),
            method: flow.method(),
        }
    }
}

/// Receipt returned when a payment completes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentReceipt {
    pub transaction_id: String,
    pub store_name: String,
    pub method: PaymentMethod,
    pub line_count: usize,
    pub subtotal_paise: i64,
    pub tax_paise: i64,
    pub total_paise: i64,
    pub timestamp: String,
}

// =============================================================================
// Product Grid
// =============================================================================

/// Searches the grid by name, salt, or barcode.
pub fn product_grid(
    catalog: &CatalogState,
    config: &ConfigState,
    query: &str,
) -> ApiResult<Vec<ProductTile>> {
    let query = validation::validate_search_query(query).map_err(CoreError::from)?;
    debug!(query = %query, "product_grid");

    let policy = config.stock_policy();
    Ok(catalog
        .products()
        .search(&query)
        .into_iter()
        .map(|p| ProductTile::from_product(p, policy))
        .collect())
}

// =============================================================================
// Cart Operations
// =============================================================================

fn cart_view(cart: &CartState, config: &ConfigState) -> CartView {
    let rate = config.tax_rate();
    cart.with_cart(|c| CartView {
        items: c.items().to_vec(),
        totals: c.totals(rate),
    })
}

/// Current cart contents and totals.
pub fn get_cart(cart: &CartState, config: &ConfigState) -> CartView {
    debug!("get_cart");
    cart_view(cart, config)
}

/// Adds one unit of a product to the cart.
///
/// Under [`StockPolicy::BlockOutOfStock`] (the default) a product with no
/// stock is rejected; under [`StockPolicy::Informational`] stock never
/// blocks. This is the only place stock is enforced.
pub fn add_to_cart(
    catalog: &CatalogState,
    cart: &CartState,
    config: &ConfigState,
    product_id: &str,
) -> ApiResult<CartView> {
    debug!(product_id = %product_id, "add_to_cart");

    let products = catalog.products();
    let product = products
        .find_by_id(product_id)
        .ok_or_else(|| ApiError::not_found("Product", product_id))?;

    if config.stock_policy() == StockPolicy::BlockOutOfStock && product.is_out_of_stock() {
        return Err(CoreError::OutOfStock {
            product_id: product.id.clone(),
            name: product.name.clone(),
        }
        .into());
    }

    cart.with_cart_mut(|c| {
        // Only a brand-new line grows the cart
        if c.line(product_id).is_none() {
            validation::validate_cart_size(c.line_count()).map_err(CoreError::from)?;
        }
        c.add(product);
        Ok::<(), ApiError>(())
    })?;

    Ok(cart_view(cart, config))
}

/// Sets the quantity of a cart line.
///
/// A quantity of zero or below removes the line. An id that is not in the
/// cart is a no-op: the current cart view is returned unchanged, because a
/// stepper click racing a removal is not an error.
pub fn update_cart_item(
    cart: &CartState,
    config: &ConfigState,
    product_id: &str,
    quantity: i64,
) -> ApiResult<CartView> {
    debug!(product_id = %product_id, quantity = %quantity, "update_cart_item");

    if quantity > 0 {
        validation::validate_quantity(quantity).map_err(CoreError::from)?;
    }

    cart.with_cart_mut(|c| c.set_quantity(product_id, quantity));
    Ok(cart_view(cart, config))
}

/// Removes a cart line. No-op if the id is not in the cart.
pub fn remove_from_cart(
    cart: &CartState,
    config: &ConfigState,
    product_id: &str,
) -> CartView {
    debug!(product_id = %product_id, "remove_from_cart");

    cart.with_cart_mut(|c| c.remove(product_id));
    cart_view(cart, config)
}

/// Empties the cart without going through checkout.
pub fn clear_cart(cart: &CartState, config: &ConfigState) -> CartView {
    debug!("clear_cart");

    cart.with_cart_mut(|c| c.clear());
    cart_view(cart, config)
}

// =============================================================================
// Checkout Flow
// =============================================================================

fn no_checkout() -> ApiError {
    ApiError::new(ErrorCode::CheckoutError, "No checkout in progress")
}

/// Opens the payment dialog. Rejected on an empty cart (the button is
/// disabled, but the service enforces it too).
pub fn begin_checkout(cart: &CartState, checkout: &CheckoutState) -> ApiResult<CheckoutView> {
    debug!("begin_checkout");

    if cart.with_cart(|c| c.is_empty()) {
        return Err(CoreError::EmptyCart.into());
    }

    checkout.with_flow(|flow| {
        let started = flow.get_or_insert_with(CheckoutFlow::new);
        Ok(CheckoutView::from(&*started))
    })
}

/// Advances the checkout one step.
pub fn checkout_next(checkout: &CheckoutState) -> ApiResult<CheckoutView> {
    checkout.with_flow(|flow| {
        let flow = flow.as_mut().ok_or_else(no_checkout)?;
        flow.next()?;
        Ok(CheckoutView::from(&*flow))
    })
}

/// Steps the checkout back.
pub fn checkout_back(checkout: &CheckoutState) -> ApiResult<CheckoutView> {
    checkout.with_flow(|flow| {
        let flow = flow.as_mut().ok_or_else(no_checkout)?;
        flow.back()?;
        Ok(CheckoutView::from(&*flow))
    })
}

/// Records the customer details typed into the form.
pub fn set_customer_details(
    checkout: &CheckoutState,
    customer: CustomerDetails,
) -> ApiResult<CheckoutView> {
    checkout.with_flow(|flow| {
        let flow = flow.as_mut().ok_or_else(no_checkout)?;
        flow.set_customer(customer);
        Ok(CheckoutView::from(&*flow))
    })
}

/// Chooses the payment method at the payment step.
pub fn select_payment_method(
    checkout: &CheckoutState,
    method: PaymentMethod,
) -> ApiResult<CheckoutView> {
    checkout.with_flow(|flow| {
        let flow = flow.as_mut().ok_or_else(no_checkout)?;
        flow.select_method(method)?;
        Ok(CheckoutView::from(&*flow))
    })
}

/// Closes the payment dialog without paying. The cart is left untouched;
/// only the flow state is discarded.
pub fn cancel_checkout(checkout: &CheckoutState) {
    debug!("cancel_checkout");
    checkout.with_flow(|flow| *flow = None);
}

/// Completes the payment.
///
/// Enabled only at the payment step with a method selected. On success the
/// transaction is recorded, the cart is cleared, and the checkout state is
/// torn down, leaving the session back where a fresh one starts.
pub fn complete_payment(
    catalog: &CatalogState,
    cart: &CartState,
    checkout: &CheckoutState,
    config: &ConfigState,
) -> ApiResult<PaymentReceipt> {
    debug!("complete_payment");

    let totals = cart.with_cart(|c| c.totals(config.tax_rate()));
    if totals.line_count == 0 {
        return Err(CoreError::EmptyCart.into());
    }

    let method = checkout.with_flow(|flow| {
        let flow = flow.as_mut().ok_or_else(no_checkout)?;
        Ok::<PaymentMethod, ApiError>(flow.complete()?)
    })?;

    let now = Utc::now();
    let transaction_id = Uuid::new_v4().to_string();

    catalog.record_transaction(Transaction {
        id: transaction_id.clone(),
        customer_id: None,
        amount_paise: totals.total_paise,
        items: totals.line_count as u32,
        status: TransactionStatus::Completed,
        method,
        created_at: now,
    });

    cart.with_cart_mut(|c| c.clear());
    checkout.with_flow(|flow| *flow = None);

    let store_name = config.snapshot().store_name;
    info!(
        transaction_id = %transaction_id,
        total = %totals.total_paise,
        method = ?method,
        "payment completed"
    );

    Ok(PaymentReceipt {
        transaction_id,
        store_name,
        method,
        line_count: totals.line_count,
        subtotal_paise: totals.subtotal_paise,
        tax_paise: totals.tax_paise,
        total_paise: totals.total_paise,
        timestamp: now.to_rfc3339(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use medipos_catalog::{seed, Catalog, ProductCatalog};
    use crate::state::AppConfig;

    fn demo_states() -> (CatalogState, CartState, CheckoutState, ConfigState) {
        (
            CatalogState::new(seed::demo_catalog(Utc::now())),
            CartState::new(),
            CheckoutState::new(),
            ConfigState::new(AppConfig::default()),
        )
    }

    /// Same as demo_states but with Amoxicillin's shelf emptied.
    fn states_with_empty_shelf() -> (CatalogState, CartState, CheckoutState, ConfigState) {
        let mut products = seed::demo_products();
        products[1].current_stock = 0;

        let now = Utc::now();
        let catalog = Catalog {
            products: ProductCatalog::new(products),
            ..seed::demo_catalog(now)
        };

        (
            CatalogState::new(catalog),
            CartState::new(),
            CheckoutState::new(),
            ConfigState::new(AppConfig::default()),
        )
    }

    #[test]
    fn test_product_grid_search_and_badges() {
        let (catalog, _, _, config) = demo_states();

        let tiles = product_grid(&catalog, &config, "para").unwrap();
        assert_eq!(tiles.len(), 1);
        assert_eq!(tiles[0].name, "Paracetamol 500mg");
        assert_eq!(tiles[0].stock_level, StockLevel::Ok);
        assert!(tiles[0].can_add);

        // Amoxicillin has 8 on the shelf: low badge, still addable
        let tiles = product_grid(&catalog, &config, "amoxicillin").unwrap();
        assert_eq!(tiles[0].stock_level, StockLevel::Low);
        assert_eq!(tiles[0].stock_label, "Stock: 8");
        assert!(tiles[0].can_add);
    }

    #[test]
    fn test_grid_out_of_stock_disables_add() {
        let (catalog, _, _, config) = states_with_empty_shelf();

        let tiles = product_grid(&catalog, &config, "amoxicillin").unwrap();
        assert_eq!(tiles[0].stock_level, StockLevel::OutOfStock);
        assert_eq!(tiles[0].stock_label, "Out of Stock");
        assert!(!tiles[0].can_add);

        // Informational policy re-enables the button
        config.update(|c| c.stock_policy = StockPolicy::Informational);
        let tiles = product_grid(&catalog, &config, "amoxicillin").unwrap();
        assert!(tiles[0].can_add);
    }

    #[test]
    fn test_add_two_products_totals() {
        // ₹12 + ₹38 → subtotal ₹50.00, GST ₹9.00, total ₹59.00
        let (catalog, cart, _, config) = demo_states();

        add_to_cart(&catalog, &cart, &config, "1").unwrap();
        let view = add_to_cart(&catalog, &cart, &config, "2").unwrap();

        assert_eq!(view.totals.subtotal_paise, 5000);
        assert_eq!(view.totals.tax_paise, 900);
        assert_eq!(view.totals.total_paise, 5900);
    }

    #[test]
    fn test_add_same_product_twice_then_zero_out() {
        let (catalog, cart, _, config) = demo_states();

        add_to_cart(&catalog, &cart, &config, "1").unwrap();
        let view = add_to_cart(&catalog, &cart, &config, "1").unwrap();
        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items[0].quantity, 2);
        assert_eq!(view.items[0].line_total().paise(), 2400);

        let view = update_cart_item(&cart, &config, "1", 0).unwrap();
        assert!(view.items.is_empty());
        assert_eq!(view.totals.total_paise, 0);
    }

    #[test]
    fn test_add_unknown_product_is_not_found() {
        let (catalog, cart, _, config) = demo_states();
        let err = add_to_cart(&catalog, &cart, &config, "99").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_add_blocked_by_stock_policy() {
        let (catalog, cart, _, config) = states_with_empty_shelf();

        let err = add_to_cart(&catalog, &cart, &config, "2").unwrap_err();
        assert_eq!(err.code, ErrorCode::OutOfStock);
        assert!(cart.with_cart(|c| c.is_empty()));

        // Informational policy lets the back-order through
        config.update(|c| c.stock_policy = StockPolicy::Informational);
        let view = add_to_cart(&catalog, &cart, &config, "2").unwrap();
        assert_eq!(view.items.len(), 1);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let (catalog, cart, _, config) = demo_states();
        add_to_cart(&catalog, &cart, &config, "1").unwrap();

        let view = update_cart_item(&cart, &config, "missing", 4).unwrap();
        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items[0].product_id, "1");
        assert_eq!(view.items[0].quantity, 1);
    }

    #[test]
    fn test_update_rejects_absurd_quantity() {
        let (catalog, cart, _, config) = demo_states();
        add_to_cart(&catalog, &cart, &config, "1").unwrap();

        let err = update_cart_item(&cart, &config, "1", 100_000).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_remove_never_added_is_noop() {
        let (_, cart, _, config) = demo_states();
        let view = remove_from_cart(&cart, &config, "never-added");
        assert!(view.items.is_empty());
    }

    #[test]
    fn test_begin_checkout_requires_items() {
        let (_, cart, checkout, _) = demo_states();
        let err = begin_checkout(&cart, &checkout).unwrap_err();
        assert_eq!(err.code, ErrorCode::CartError);
        assert!(!checkout.is_active());
    }

    #[test]
    fn test_cancel_checkout_keeps_cart() {
        let (catalog, cart, checkout, config) = demo_states();
        add_to_cart(&catalog, &cart, &config, "1").unwrap();

        begin_checkout(&cart, &checkout).unwrap();
        checkout_next(&checkout).unwrap();
        cancel_checkout(&checkout);

        assert!(!checkout.is_active());
        assert_eq!(cart.with_cart(|c| c.line_count()), 1);
    }

    #[test]
    fn test_complete_payment_full_flow() {
        let (catalog, cart, checkout, config) = demo_states();
        add_to_cart(&catalog, &cart, &config, "1").unwrap();
        add_to_cart(&catalog, &cart, &config, "2").unwrap();

        let view = begin_checkout(&cart, &checkout).unwrap();
        assert_eq!(view.stage, CheckoutStage::CartReview);

        checkout_next(&checkout).unwrap();
        set_customer_details(
            &checkout,
            CustomerDetails {
                name: "Asha Rao".to_string(),
                phone: "+91 90000 00000".to_string(),
                email: String::new(),
            },
        )
        .unwrap();
        checkout_next(&checkout).unwrap();
        select_payment_method(&checkout, PaymentMethod::Upi).unwrap();

        let receipt = complete_payment(&catalog, &cart, &checkout, &config).unwrap();
        assert_eq!(receipt.subtotal_paise, 5000);
        assert_eq!(receipt.tax_paise, 900);
        assert_eq!(receipt.total_paise, 5900);
        assert_eq!(receipt.method, PaymentMethod::Upi);
        assert_eq!(receipt.store_name, "MedShop Pro");

        // Cart reset, flow torn down, transaction at the head of the log
        assert!(cart.with_cart(|c| c.is_empty()));
        assert!(!checkout.is_active());
        catalog.with_transactions(|log| {
            let newest = &log.recent(1)[0];
            assert_eq!(newest.id, receipt.transaction_id);
            assert_eq!(newest.amount_paise, 5900);
            assert_eq!(newest.status, TransactionStatus::Completed);
        });
    }

    #[test]
    fn test_complete_payment_requires_method() {
        let (catalog, cart, checkout, config) = demo_states();
        add_to_cart(&catalog, &cart, &config, "1").unwrap();

        begin_checkout(&cart, &checkout).unwrap();
        checkout_next(&checkout).unwrap();
        checkout_next(&checkout).unwrap();

        let err = complete_payment(&catalog, &cart, &checkout, &config).unwrap_err();
        assert_eq!(err.code, ErrorCode::CheckoutError);

        // Nothing was torn down: the cashier can still pick a method
        assert!(checkout.is_active());
        assert!(!cart.with_cart(|c| c.is_empty()));
    }

    #[test]
    fn test_checkout_ops_without_begin_are_rejected() {
        let (_, _, checkout, _) = demo_states();
        assert!(checkout_next(&checkout).is_err());
        assert!(checkout_back(&checkout).is_err());
        assert!(select_payment_method(&checkout, PaymentMethod::Cash).is_err());
    }
}
