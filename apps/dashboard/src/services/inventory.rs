//! # Inventory Service
//!
//! The inventory screen: search and category filter over the product set,
//! with the low-stock and expiring-soon tabs and the header stat cards.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use medipos_core::types::{Product, ProductStatus};
use medipos_core::{validation, CoreError};

use crate::error::ApiResult;
use crate::state::CatalogState;

/// Batches expiring within this many days land on the "Expiring Soon" tab.
pub const EXPIRY_WINDOW_DAYS: i64 = 30;

// =============================================================================
// DTOs
// =============================================================================

/// Header stat cards.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryStats {
    pub total_products: usize,
    pub low_stock: usize,
    pub expiring_soon: usize,
}

/// One row of the inventory table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryRow {
    pub id: String,
    pub name: String,
    pub salt: String,
    pub category: String,
    pub batch: String,
    pub current_stock: i64,
    pub min_stock: i64,
    pub max_stock: i64,
    /// Shelf fill level, 0-100.
    pub stock_percentage: f64,
    pub expiry_date: NaiveDate,
    pub rack_location: String,
    pub status: ProductStatus,
}

impl From<&Product> for InventoryRow {
    fn from(p: &Product) -> Self {
        InventoryRow {
            id: p.id.clone(),
            name: p.name.clone(),
            salt: p.salt.clone(),
            category: p.category.clone(),
            batch: p.batch.clone(),
            current_stock: p.current_stock,
            min_stock: p.min_stock,
            max_stock: p.max_stock,
            stock_percentage: p.stock_percentage(),
            expiry_date: p.expiry_date,
            rack_location: p.rack_location.clone(),
            status: p.status,
        }
    }
}

/// Everything the inventory screen renders: filtered rows, the two alert
/// tabs, the stat cards, and the category chips.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryOverview {
    pub stats: InventoryStats,
    pub items: Vec<InventoryRow>,
    pub low_stock: Vec<InventoryRow>,
    pub expiring: Vec<InventoryRow>,
    pub categories: Vec<String>,
}

// =============================================================================
// Service
// =============================================================================

/// Builds the inventory screen for a search query and category filter.
///
/// The low-stock and expiring tabs are computed over the *filtered* items,
/// matching how the tab counts follow the active filter on screen.
pub fn overview(
    catalog: &CatalogState,
    query: &str,
    category: Option<&str>,
    today: NaiveDate,
) -> ApiResult<InventoryOverview> {
    let query = validation::validate_search_query(query).map_err(CoreError::from)?;
    debug!(query = %query, category = ?category, "inventory overview");

    let products = catalog.products();
    let filtered = products.filter(&query, category);

    let low_stock: Vec<InventoryRow> = filtered
        .iter()
        .filter(|p| p.is_low_stock())
        .map(|p| InventoryRow::from(*p))
        .collect();

    let expiring: Vec<InventoryRow> = filtered
        .iter()
        .filter(|p| p.expires_within(EXPIRY_WINDOW_DAYS, today))
        .map(|p| InventoryRow::from(*p))
        .collect();

    let items: Vec<InventoryRow> = filtered.iter().map(|p| InventoryRow::from(*p)).collect();

    Ok(InventoryOverview {
        stats: InventoryStats {
            total_products: items.len(),
            low_stock: low_stock.len(),
            expiring_soon: expiring.len(),
        },
        items,
        low_stock,
        expiring,
        categories: products.categories().iter().map(|c| c.to_string()).collect(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
