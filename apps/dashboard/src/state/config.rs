//! # Configuration State
//!
//! Shop configuration: store profile, tax rate, the out-of-stock policy,
//! and notification preferences.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`MEDIPOS_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Read-mostly: the settings screen occasionally writes, everything else
//! reads, so the value sits behind an `RwLock`.

use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

use medipos_core::money::TaxRate;

// =============================================================================
// Stock Policy
// =============================================================================

/// What happens when a product with no stock is added to the cart.
///
/// The cart itself never checks stock; this policy is enforced in exactly
/// one place, the billing service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockPolicy {
    /// Adding a product with `current_stock <= 0` is rejected.
    #[default]
    BlockOutOfStock,

    /// Stock levels are shown but never block a sale (back-order).
    Informational,
}

// =============================================================================
// Notification Settings
// =============================================================================

/// Notification toggles from the settings screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    pub low_stock: bool,
    pub expiry_alerts: bool,
    pub sales_reports: bool,
    pub system_updates: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        NotificationSettings {
            low_stock: true,
            expiry_alerts: true,
            sales_reports: false,
            system_updates: true,
        }
    }
}

// =============================================================================
// App Config
// =============================================================================

/// Shop configuration value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Shop name (shown on receipts).
    pub store_name: String,

    /// GST registration number.
    pub gst_number: String,

    /// Shop address (for receipts).
    pub store_address: String,

    /// Contact phone.
    pub store_phone: String,

    /// Currency symbol for display.
    pub currency_symbol: String,

    /// Number of decimal places for currency display.
    pub currency_decimals: u8,

    /// GST rate in basis points (1800 = 18%).
    pub tax_rate_bps: u32,

    /// Out-of-stock policy for the billing screen.
    pub stock_policy: StockPolicy,

    /// Notification preferences.
    pub notifications: NotificationSettings,
}

impl Default for AppConfig {
    /// Defaults matching the demo shop profile.
    fn default() -> Self {
        AppConfig {
            store_name: "MedShop Pro".to_string(),
            gst_number: "27ABCDE1234F1Z5".to_string(),
            store_address: "123 Medical Street, Mumbai, Maharashtra - 400001".to_string(),
            store_phone: "+91 98765 43210".to_string(),
            currency_symbol: "₹".to_string(),
            currency_decimals: 2,
            tax_rate_bps: 1800, // 18% GST
            stock_policy: StockPolicy::default(),
            notifications: NotificationSettings::default(),
        }
    }
}

impl AppConfig {
    /// Creates a config from environment variables over defaults.
    ///
    /// ## Environment Variables
    /// - `MEDIPOS_STORE_NAME`: override shop name
    /// - `MEDIPOS_TAX_RATE`: override GST rate as a percentage (e.g. "18")
    /// - `MEDIPOS_STOCK_POLICY`: "block" or "informational"
    pub fn from_env() -> Self {
        let mut config = AppConfig::default();

        if let Ok(store_name) = std::env::var("MEDIPOS_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Ok(rate) = std::env::var("MEDIPOS_TAX_RATE") {
            if let Ok(pct) = rate.parse::<f64>() {
                config.tax_rate_bps = TaxRate::from_percentage(pct).bps();
            }
        }

        if let Ok(policy) = std::env::var("MEDIPOS_STOCK_POLICY") {
            match policy.to_lowercase().as_str() {
                "informational" => config.stock_policy = StockPolicy::Informational,
                "block" => config.stock_policy = StockPolicy::BlockOutOfStock,
                _ => {}
            }
        }

        config
    }

    /// The GST rate as a typed TaxRate.
    #[inline]
    pub fn tax_rate(&self) -> TaxRate {
        TaxRate::from_bps(self.tax_rate_bps)
    }

    /// Formats a paise amount as a currency string.
    ///
    /// ## Example
    /// ```rust
    /// use medipos_dashboard::state::AppConfig;
    ///
    /// let config = AppConfig::default();
    /// assert_eq!(config.format_currency(1234), "₹12.34");
    /// ```
    pub fn format_currency(&self, paise: i64) -> String {
        let divisor = 10_i64.pow(self.currency_decimals as u32);
        let whole = paise / divisor;
        let frac = (paise % divisor).abs();

        format!(
            "{}{}{}",
            if paise < 0 { "-" } else { "" },
            self.currency_symbol,
            if self.currency_decimals > 0 {
                format!(
                    "{}.{:0width$}",
                    whole.abs(),
                    frac,
                    width = self.currency_decimals as usize
                )
            } else {
                whole.abs().to_string()
            }
        )
    }
}

// =============================================================================
// Config State
// =============================================================================

/// Shared, read-mostly configuration handle.
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    inner: Arc<RwLock<AppConfig>>,
}

impl ConfigState {
    pub fn new(config: AppConfig) -> Self {
        ConfigState {
            inner: Arc::new(RwLock::new(config)),
        }
    }

    /// Returns a snapshot of the current configuration.
    pub fn snapshot(&self) -> AppConfig {
        self.inner.read().expect("config lock poisoned").clone()
    }

    /// Executes a function with write access to the configuration.
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut config = self.inner.write().expect("config lock poisoned");
        f(&mut config);
    }

    /// The configured GST rate.
    pub fn tax_rate(&self) -> TaxRate {
        self.inner.read().expect("config lock poisoned").tax_rate()
    }

    /// The configured stock policy.
    pub fn stock_policy(&self) -> StockPolicy {
        self.inner.read().expect("config lock poisoned").stock_policy
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.tax_rate_bps, 1800);
        assert_eq!(config.stock_policy, StockPolicy::BlockOutOfStock);
        assert!(config.notifications.low_stock);
        assert!(!config.notifications.sales_reports);
    }

    #[test]
    fn test_format_currency() {
        let config = AppConfig::default();
        assert_eq!(config.format_currency(1234), "₹12.34");
        assert_eq!(config.format_currency(100), "₹1.00");
        assert_eq!(config.format_currency(1), "₹0.01");
        assert_eq!(config.format_currency(0), "₹0.00");
        assert_eq!(config.format_currency(-1234), "-₹12.34");
    }

    #[test]
    fn test_config_state_update() {
        let state = ConfigState::new(AppConfig::default());
        state.update(|c| c.stock_policy = StockPolicy::Informational);
        assert_eq!(state.stock_policy(), StockPolicy::Informational);
        assert_eq!(state.snapshot().tax_rate_bps, 1800);
    }
}
