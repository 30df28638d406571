//! # Customers Service
//!
//! The customers screen: searchable directory with header counts.

use serde::{Deserialize, Serialize};
use tracing::debug;

use medipos_core::types::Customer;
use medipos_core::{validation, CoreError};

use crate::error::{ApiError, ApiResult};
use crate::state::CatalogState;

/// The customers screen: filtered records plus the header counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPage {
    pub customers: Vec<Customer>,
    pub total_count: usize,
    pub active_count: usize,
}

/// Builds the customers screen for a search query.
///
/// The search matches name, phone, or email; the header counts always
/// describe the whole directory, not the filtered view.
pub fn directory(catalog: &CatalogState, query: &str) -> ApiResult<CustomerPage> {
    let query = validation::validate_search_query(query).map_err(CoreError::from)?;
    debug!(query = %query, "customer directory");

    let customers = catalog.customers();
    Ok(CustomerPage {
        customers: customers.search(&query).into_iter().cloned().collect(),
        total_count: customers.len(),
        active_count: customers.active_count(),
    })
}

/// Fetches a single customer's record.
pub fn profile(catalog: &CatalogState, id: &str) -> ApiResult<Customer> {
    debug!(id = %id, "customer profile");

    catalog
        .customers()
        .find_by_id(id)
        .cloned()
        .ok_or_else(|| ApiError::not_found("Customer", id))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use chrono::Utc;
    use medipos_catalog::seed;

    fn catalog() -> CatalogState {
        CatalogState::new(seed::demo_catalog(Utc::now()))
    }

    #[test]
    fn test_directory_unfiltered() {
        let page = directory(&catalog(), "").unwrap();
        assert_eq!(page.customers.len(), 4);
        assert_eq!(page.total_count, 4);
        assert_eq!(page.active_count, 4);
    }

    #[test]
    fn test_directory_search_keeps_counts_global() {
        let page = directory(&catalog(), "sarah").unwrap();
        assert_eq!(page.customers.len(), 1);
        assert_eq!(page.customers[0].name, "Sarah Wilson");
        // Header counts stay global
        assert_eq!(page.total_count, 4);
    }

    #[test]
    fn test_profile_lookup() {
        let customer = profile(&catalog(), "3").unwrap();
        assert_eq!(customer.name, "Mike Johnson");
        assert_eq!(customer.prescriptions, 8);

        let err = profile(&catalog(), "42").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }
}
