//! # Report Figures
//!
//! The pre-aggregated figures behind the reports and dashboard screens:
//! daily sales for the week, the GST ledger by month, category share of
//! sales, and the best-selling products. In a system with persistence these
//! would be query results; here they are part of the seeded data set.

use serde::{Deserialize, Serialize};

// =============================================================================
// Row Types
// =============================================================================

/// One day of sales history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesFigure {
    /// Day label ("Mon".."Sun").
    pub day: String,
    pub sales_paise: i64,
    pub profit_paise: i64,
    pub orders: u32,
}

/// One month of the GST ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GstMonth {
    pub month: String,
    pub collected_paise: i64,
    pub paid_paise: i64,
    pub net_paise: i64,
}

/// Share of sales attributed to one product category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryShare {
    pub name: String,
    /// Percentage of total sales, 0-100.
    pub share_pct: u32,
}

/// A best-selling product row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopProduct {
    pub name: String,
    pub sales_paise: i64,
    pub quantity: u32,
    pub profit_paise: i64,
}

// =============================================================================
// Archive
// =============================================================================

/// Bundle of all report figures.
#[derive(Debug, Clone, Default)]
pub struct ReportArchive {
    weekly_sales: Vec<SalesFigure>,
    gst_ledger: Vec<GstMonth>,
    category_shares: Vec<CategoryShare>,
    top_products: Vec<TopProduct>,
}

impl ReportArchive {
    pub fn new(
        weekly_sales: Vec<SalesFigure>,
        gst_ledger: Vec<GstMonth>,
        category_shares: Vec<CategoryShare>,
        top_products: Vec<TopProduct>,
    ) -> Self {
        ReportArchive {
            weekly_sales,
            gst_ledger,
            category_shares,
            top_products,
        }
    }

    /// Daily figures for the trailing week, Monday first.
    pub fn weekly_sales(&self) -> &[SalesFigure] {
        &self.weekly_sales
    }

    /// GST ledger months, oldest first.
    pub fn gst_ledger(&self) -> &[GstMonth] {
        &self.gst_ledger
    }

    /// Category share of sales.
    pub fn category_shares(&self) -> &[CategoryShare] {
        &self.category_shares
    }

    /// Best sellers, highest revenue first.
    pub fn top_products(&self) -> &[TopProduct] {
        &self.top_products
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
