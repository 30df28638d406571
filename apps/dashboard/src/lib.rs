//! # MediPOS Dashboard
//!
//! The session layer of MediPOS: owns the state a billing session needs and
//! exposes the per-screen services.
//!
//! ## Module Organization
//! ```text
//! medipos_dashboard/
//! ├── lib.rs          ◄─── You are here (session wiring)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── cart.rs     ◄─── Cart + checkout state
//! │   ├── catalog.rs  ◄─── Seeded catalog state
//! │   └── config.rs   ◄─── Shop configuration
//! ├── services/
//! │   ├── billing.rs  ◄─── POS screen: grid, cart, checkout
//! │   ├── inventory.rs◄─── Stock table, alerts, expiry tabs
//! │   ├── customers.rs◄─── Customer directory
//! │   ├── reports.rs  ◄─── Sales/GST/best-seller reports
//! │   ├── insights.rs ◄─── Prescription scan, reorder hints
//! │   └── settings.rs ◄─── Configuration read/update
//! └── error.rs        ◄─── ApiError for all services
//! ```
//!
//! ## Example
//! ```rust
//! use medipos_dashboard::{services::billing, Dashboard};
//!
//! let session = Dashboard::demo();
//! let view = billing::add_to_cart(&session.catalog, &session.cart, &session.config, "1").unwrap();
//! assert_eq!(view.totals.subtotal_paise, 1200); // one Paracetamol at ₹12
//! ```

pub mod error;
pub mod services;
pub mod state;

use chrono::Utc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use medipos_catalog::{seed, Catalog};
use state::{AppConfig, CartState, CatalogState, CheckoutState, ConfigState};

/// A dashboard session: the four state objects every service draws from.
///
/// Each session owns its cart and checkout exclusively; there is no state
/// shared between sessions beyond the injected catalog.
#[derive(Debug)]
pub struct Dashboard {
    pub catalog: CatalogState,
    pub cart: CartState,
    pub checkout: CheckoutState,
    pub config: ConfigState,
}

impl Dashboard {
    /// Wires a session from an injected catalog and configuration.
    pub fn new(catalog: Catalog, config: AppConfig) -> Self {
        info!(store = %config.store_name, "dashboard session starting");
        Dashboard {
            catalog: CatalogState::new(catalog),
            cart: CartState::new(),
            checkout: CheckoutState::new(),
            config: ConfigState::new(config),
        }
    }

    /// A session over the demo data set, with configuration taken from the
    /// environment over defaults.
    pub fn demo() -> Self {
        Dashboard::new(seed::demo_catalog(Utc::now()), AppConfig::from_env())
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - show debug messages
/// - `RUST_LOG=medipos=trace` - trace for medipos crates only
/// - Default: INFO
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,medipos=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

// =============================================================================
// Session Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{billing, inventory, reports};
    use medipos_core::checkout::CustomerDetails;
    use medipos_core::types::PaymentMethod;

    /// A whole billing session, front to back: search, fill the cart,
    /// walk the checkout, pay, and confirm the session is reset.
    #[test]
    fn test_full_billing_session() {
        let s = Dashboard::demo();

        // Cashier searches and rings up two items
        let tiles = billing::product_grid(&s.catalog, &s.config, "para").unwrap();
        assert_eq!(tiles.len(), 1);
        billing::add_to_cart(&s.catalog, &s.cart, &s.config, &tiles[0].id).unwrap();
        billing::add_to_cart(&s.catalog, &s.cart, &s.config, "2").unwrap();

        let view = billing::get_cart(&s.cart, &s.config);
        assert_eq!(view.totals.subtotal_paise, 5000);
        assert_eq!(view.totals.total_paise, 5900);

        // Checkout: review -> customer -> payment -> done
        billing::begin_checkout(&s.cart, &s.checkout).unwrap();
        billing::checkout_next(&s.checkout).unwrap();
        billing::set_customer_details(
            &s.checkout,
            CustomerDetails {
                name: "Walk-in".to_string(),
                phone: String::new(),
                email: String::new(),
            },
        )
        .unwrap();
        billing::checkout_next(&s.checkout).unwrap();
        billing::select_payment_method(&s.checkout, PaymentMethod::Cash).unwrap();
        let receipt =
            billing::complete_payment(&s.catalog, &s.cart, &s.checkout, &s.config).unwrap();
        assert_eq!(receipt.total_paise, 5900);

        // Session is back to its initial state, bill is on the activity feed
        assert!(s.cart.with_cart(|c| c.is_empty()));
        assert!(!s.checkout.is_active());
        let activity = reports::recent_activity(&s.catalog, 1);
        assert_eq!(activity[0].id, receipt.transaction_id);
    }

    #[test]
    fn test_screens_share_one_catalog() {
        let s = Dashboard::demo();
        let today = chrono::NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();

        let overview = inventory::overview(&s.catalog, "", None, today).unwrap();
        let report = reports::sales_report(&s.catalog);

        assert_eq!(overview.stats.total_products, 6);
        assert_eq!(report.weekly.len(), 7);
    }
}
