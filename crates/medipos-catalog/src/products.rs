//! # Product Catalog
//!
//! Lookup and search over the seeded product set.
//!
//! ## Search Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                  How Product Search Works                           │
//! │                                                                     │
//! │  User types: "para"                                                 │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Case-insensitive substring match across: name, salt                │
//! │  Plus plain substring match on: barcode                             │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌──────────────────────────────────────────┐                       │
//! │  │ Paracetamol 500mg | Paracetamol | 890... │ ← MATCH (name+salt)   │
//! │  │ Amoxicillin 250mg | Amoxicillin | 890... │                       │
//! │  └──────────────────────────────────────────┘                       │
//! │                                                                     │
//! │  An empty query matches everything. Results keep seed order.        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;

use chrono::NaiveDate;
use tracing::debug;

use medipos_core::types::Product;

/// Read-only product store, indexed by id.
///
/// ## Usage
/// ```rust
/// use medipos_catalog::{seed, ProductCatalog};
///
/// let catalog = ProductCatalog::new(seed::demo_products());
/// let product = catalog.find_by_id("1").unwrap();
/// assert_eq!(product.name, "Paracetamol 500mg");
/// ```
#[derive(Debug, Clone)]
pub struct ProductCatalog {
    products: Vec<Product>,
    by_id: HashMap<String, usize>,
}

impl ProductCatalog {
    /// Builds a catalog from a product list. The first product wins on a
    /// duplicate id; ids are expected to be unique in practice.
    pub fn new(products: Vec<Product>) -> Self {
        let mut by_id = HashMap::with_capacity(products.len());
        for (idx, product) in products.iter().enumerate() {
            by_id.entry(product.id.clone()).or_insert(idx);
        }
        ProductCatalog { products, by_id }
    }

    /// Looks up a product by id.
    pub fn find_by_id(&self, id: &str) -> Option<&Product> {
        self.by_id.get(id).map(|&idx| &self.products[idx])
    }

    /// Looks up a product by exact barcode.
    ///
    /// Barcode scanners "type" the whole code at once, so an exact match is
    /// the right semantics here, not a substring search.
    pub fn find_by_barcode(&self, barcode: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.barcode == barcode)
    }

    /// Searches products by name, salt, or barcode.
    ///
    /// Matches are case-insensitive substrings for name and salt, plain
    /// substring for barcode. An empty (or whitespace) query matches
    /// everything.
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let query = query.trim();
        debug!(query = %query, "product search");

        if query.is_empty() {
            return self.products.iter().collect();
        }

        let needle = query.to_lowercase();
        self.products
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&needle)
                    || p.salt.to_lowercase().contains(&needle)
                    || p.barcode.contains(query)
            })
            .collect()
    }

    /// Searches with an optional category restriction.
    ///
    /// `category: None` (or `Some("All")`) applies no category filter; this
    /// mirrors the "All" chip on the inventory screen.
    pub fn filter(&self, query: &str, category: Option<&str>) -> Vec<&Product> {
        self.search(query)
            .into_iter()
            .filter(|p| match category {
                None | Some("All") => true,
                Some(c) => p.category == c,
            })
            .collect()
    }

    /// Products at or below their reorder threshold.
    pub fn low_stock(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.is_low_stock()).collect()
    }

    /// Products whose batch expires within `days` days of `today` (and has
    /// not expired yet).
    pub fn expiring_within(&self, days: i64, today: NaiveDate) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.expires_within(days, today))
            .collect()
    }

    /// Distinct categories in seed order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for p in &self.products {
            if !seen.contains(&p.category.as_str()) {
                seen.push(p.category.as_str());
            }
        }
        seen
    }

    /// All products in seed order.
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Checks if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn catalog() -> ProductCatalog {
        ProductCatalog::new(seed::demo_products())
    }

    #[test]
    fn test_find_by_id() {
        let catalog = catalog();
        assert_eq!(catalog.find_by_id("1").unwrap().name, "Paracetamol 500mg");
        assert!(catalog.find_by_id("99").is_none());
    }

    #[test]
    fn test_find_by_barcode_is_exact() {
        let catalog = catalog();
        assert_eq!(catalog.find_by_barcode("8901234567890").unwrap().id, "1");
        // Prefix of a valid barcode must not match
        assert!(catalog.find_by_barcode("890123456789").is_none());
    }

    #[test]
    fn test_search_by_name_case_insensitive() {
        let catalog = catalog();
        let hits = catalog.search("PARA");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "1");
    }

    #[test]
    fn test_search_by_salt() {
        let catalog = catalog();
        let hits = catalog.search("cholecalciferol");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Vitamin D3 1000IU");
    }

    #[test]
    fn test_search_by_barcode_substring() {
        let catalog = catalog();
        let hits = catalog.search("8901234567894");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Metformin 500mg");
    }

    #[test]
    fn test_empty_query_returns_everything() {
        let catalog = catalog();
        assert_eq!(catalog.search("").len(), catalog.len());
        assert_eq!(catalog.search("   ").len(), catalog.len());
    }

    #[test]
    fn test_filter_by_category() {
        let catalog = catalog();
        let hits = catalog.filter("", Some("Antibiotics"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Amoxicillin 250mg");

        assert_eq!(catalog.filter("", Some("All")).len(), catalog.len());
        assert_eq!(catalog.filter("", None).len(), catalog.len());
        assert!(catalog.filter("", Some("Homeopathy")).is_empty());
    }

    #[test]
    fn test_low_stock() {
        let catalog = catalog();
        let ids: Vec<&str> = catalog.low_stock().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "4"]);
    }

    #[test]
    fn test_expiring_within() {
        let catalog = catalog();
        let today = NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();

        // Amoxicillin's batch expires 2024-06-15: 26 days out
        let soon: Vec<&str> = catalog
            .expiring_within(30, today)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(soon, vec!["2"]);

        // At 90 days Omeprazole (2024-08-10) joins
        assert_eq!(catalog.expiring_within(90, today).len(), 2);
    }

    #[test]
    fn test_categories_in_seed_order() {
        let catalog = catalog();
        assert_eq!(
            catalog.categories(),
            vec![
                "Pain Relief",
                "Antibiotics",
                "Vitamins",
                "Gastrointestinal",
                "Diabetes",
                "Cardiovascular",
            ]
        );
    }
}
