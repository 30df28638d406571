//! # Reports Service
//!
//! The reports screen: weekly sales, the GST ledger, best sellers, and
//! category share, aggregated from the seeded figures, plus the recent
//! activity feed from the live transaction log.

use serde::{Deserialize, Serialize};
use tracing::debug;

use medipos_catalog::{CategoryShare, GstMonth, SalesFigure, TopProduct};
use medipos_core::types::Transaction;

use crate::state::CatalogState;

// =============================================================================
// DTOs
// =============================================================================

/// Weekly sales report with totals across the week.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesReport {
    pub weekly: Vec<SalesFigure>,
    pub total_sales_paise: i64,
    pub total_profit_paise: i64,
    pub total_orders: u32,
}

/// GST ledger with totals across the months.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GstReport {
    pub months: Vec<GstMonth>,
    pub total_collected_paise: i64,
    pub total_paid_paise: i64,
    pub net_paise: i64,
}

/// Best sellers and category share, side by side on the screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductHighlights {
    pub top_products: Vec<TopProduct>,
    pub category_shares: Vec<CategoryShare>,
}

// =============================================================================
// Service
// =============================================================================

/// The weekly sales report.
pub fn sales_report(catalog: &CatalogState) -> SalesReport {
    debug!("sales_report");

    let weekly: Vec<SalesFigure> = catalog.reports().weekly_sales().to_vec();
    SalesReport {
        total_sales_paise: weekly.iter().map(|f| f.sales_paise).sum(),
        total_profit_paise: weekly.iter().map(|f| f.profit_paise).sum(),
        total_orders: weekly.iter().map(|f| f.orders).sum(),
        weekly,
    }
}

/// The GST ledger report.
pub fn gst_report(catalog: &CatalogState) -> GstReport {
    debug!("gst_report");

    let months: Vec<GstMonth> = catalog.reports().gst_ledger().to_vec();
    GstReport {
        total_collected_paise: months.iter().map(|m| m.collected_paise).sum(),
        total_paid_paise: months.iter().map(|m| m.paid_paise).sum(),
        net_paise: months.iter().map(|m| m.net_paise).sum(),
        months,
    }
}

/// Best sellers and category share.
pub fn product_highlights(catalog: &CatalogState) -> ProductHighlights {
    debug!("product_highlights");

    ProductHighlights {
        top_products: catalog.reports().top_products().to_vec(),
        category_shares: catalog.reports().category_shares().to_vec(),
    }
}

/// The most recent transactions, newest first.
pub fn recent_activity(catalog: &CatalogState, limit: usize) -> Vec<Transaction> {
    debug!(limit = %limit, "recent_activity");

    catalog.with_transactions(|log| log.recent(limit).to_vec())
}

// =============================================================================
// Unit Tests
// =============================================================================
