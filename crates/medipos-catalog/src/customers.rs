//! # Customer Directory
//!
//! Lookup and search over the seeded customer records.

use tracing::debug;

use medipos_core::types::{Customer, CustomerStatus};

/// Read-only customer store.
#[derive(Debug, Clone)]
pub struct CustomerDirectory {
    customers: Vec<Customer>,
}

impl CustomerDirectory {
    pub fn new(customers: Vec<Customer>) -> Self {
        CustomerDirectory { customers }
    }

    /// Looks up a customer by id.
    pub fn find_by_id(&self, id: &str) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == id)
    }

    /// Searches customers by name, phone, or email (case-insensitive
    /// substring). An empty query matches everyone.
    pub fn search(&self, query: &str) -> Vec<&Customer> {
        let query = query.trim();
        debug!(query = %query, "customer search");

        if query.is_empty() {
            return self.customers.iter().collect();
        }

        let needle = query.to_lowercase();
        self.customers
            .iter()
            .filter(|c| {
                c.name.to_lowercase().contains(&needle)
                    || c.phone.to_lowercase().contains(&needle)
                    || c.email.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Number of customers with an active record.
    pub fn active_count(&self) -> usize {
        self.customers
            .iter()
            .filter(|c| c.status == CustomerStatus::Active)
            .count()
    }

    /// All customers in seed order.
    pub fn all(&self) -> &[Customer] {
        &self.customers
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn directory() -> CustomerDirectory {
        CustomerDirectory::new(seed::demo_customers())
    }

    #[test]
    fn test_find_by_id() {
        let dir = directory();
        assert_eq!(dir.find_by_id("1").unwrap().name, "John Doe");
        assert!(dir.find_by_id("42").is_none());
    }

    #[test]
    fn test_search_by_name() {
        let dir = directory();
        let hits = dir.search("jane");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].email, "jane.smith@email.com");
    }

    #[test]
    fn test_search_by_phone_fragment() {
        let dir = directory();
        let hits = dir.search("98765");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "John Doe");
    }

    #[test]
    fn test_search_by_email_domain_matches_all() {
        let dir = directory();
        assert_eq!(dir.search("@email.com").len(), dir.len());
    }

    #[test]
    fn test_empty_query_returns_everyone() {
        let dir = directory();
        assert_eq!(dir.search("").len(), 4);
        assert_eq!(dir.active_count(), 4);
    }
}
