//! # Insights Service
//!
//! The "smart" helpers: the demo prescription scanner and reorder
//! suggestions derived from stock levels.
//!
//! The scanner is a simulated OCR pass: it resolves after a fixed delay
//! with a canned prescription, exactly like the demo it reproduces. It has
//! no correctness consequences; it exists so the screen has something to
//! await.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::state::CatalogState;

/// How long the fake OCR pass takes.
const SCAN_DELAY: Duration = Duration::from_secs(2);

// =============================================================================
// DTOs
// =============================================================================

/// Result of a prescription scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrescriptionScan {
    /// One line per prescribed item, in "name - dosage - duration" form.
    pub lines: Vec<String>,
}

/// A reorder suggestion for a low-stock product.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderSuggestion {
    pub product_id: String,
    pub name: String,
    pub current_stock: i64,
    pub min_stock: i64,
    /// Units needed to fill the shelf back to capacity.
    pub suggested_quantity: i64,
}

// =============================================================================
// Service
// =============================================================================

/// Runs the simulated prescription scan.
///
/// Resolves after a fixed cosmetic delay with the canned prescription text.
pub async fn scan_prescription() -> PrescriptionScan {
    debug!("prescription scan started");
    tokio::time::sleep(SCAN_DELAY).await;

    let scan = PrescriptionScan {
        lines: vec![
            "Paracetamol 500mg - 1-0-1 for 5 days".to_string(),
            "Amoxicillin 250mg - 1-0-1 for 7 days".to_string(),
        ],
    };
    info!(lines = scan.lines.len(), "prescription scan complete");
    scan
}

/// Suggests reorders for every product at or below its reorder threshold,
/// sized to refill the shelf to capacity.
pub fn reorder_suggestions(catalog: &CatalogState) -> Vec<ReorderSuggestion> {
    debug!("reorder_suggestions");

    catalog
        .products()
        .low_stock()
        .into_iter()
        .map(|p| ReorderSuggestion {
            product_id: p.id.clone(),
            name: p.name.clone(),
            current_stock: p.current_stock,
            min_stock: p.min_stock,
            suggested_quantity: (p.max_stock - p.current_stock).max(0),
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use medipos_catalog::seed;

    #[tokio::test(start_paused = true)]
    async fn test_scan_resolves_with_canned_text() {
        let scan = scan_prescription().await;
        assert_eq!(scan.lines.len(), 2);
        assert!(scan.lines[0].starts_with("Paracetamol 500mg"));
    }

    #[test]
    fn test_reorder_suggestions_cover_low_stock() {
        let catalog = CatalogState::new(seed::demo_catalog(Utc::now()));
        let suggestions = reorder_suggestions(&catalog);

        assert_eq!(suggestions.len(), 2);
        let amoxicillin = &suggestions[0];
        assert_eq!(amoxicillin.name, "Amoxicillin 250mg");
        // 100-unit shelf with 8 left
        assert_eq!(amoxicillin.suggested_quantity, 92);
    }
}
