//! # Settings Service
//!
//! Read and update the shop configuration: profile, GST rate, stock policy,
//! and notification toggles.

use tracing::{debug, info};

use medipos_core::{validation, CoreError};

use crate::error::ApiResult;
use crate::state::{AppConfig, ConfigState, NotificationSettings, StockPolicy};

/// The current configuration snapshot.
pub fn get_settings(config: &ConfigState) -> AppConfig {
    debug!("get_settings");
    config.snapshot()
}

/// Replaces the notification toggles.
pub fn update_notifications(config: &ConfigState, notifications: NotificationSettings) -> AppConfig {
    info!(?notifications, "update_notifications");
    config.update(|c| c.notifications = notifications);
    config.snapshot()
}

/// Switches the out-of-stock policy for the billing screen.
pub fn set_stock_policy(config: &ConfigState, policy: StockPolicy) -> AppConfig {
    info!(?policy, "set_stock_policy");
    config.update(|c| c.stock_policy = policy);
    config.snapshot()
}

/// Changes the GST rate. Rates above 100% are rejected.
pub fn set_tax_rate(config: &ConfigState, bps: u32) -> ApiResult<AppConfig> {
    validation::validate_tax_rate_bps(bps).map_err(CoreError::from)?;
    info!(bps = %bps, "set_tax_rate");
    config.update(|c| c.tax_rate_bps = bps);
    Ok(config.snapshot())
}

// =============================================================================
// Unit Tests
// =============================================================================
