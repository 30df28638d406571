//! # Catalog State
//!
//! Session ownership of the seeded catalog. Products, customers, and report
//! figures are immutable after seeding; the transaction log grows as
//! payments complete, so it alone sits behind a Mutex.

use std::sync::{Arc, Mutex};

use medipos_catalog::{Catalog, CustomerDirectory, ProductCatalog, ReportArchive, TransactionLog};
use medipos_core::types::Transaction;

/// The injected data source, split by mutability.
#[derive(Debug, Clone)]
pub struct CatalogState {
    products: Arc<ProductCatalog>,
    customers: Arc<CustomerDirectory>,
    reports: Arc<ReportArchive>,
    transactions: Arc<Mutex<TransactionLog>>,
}

impl CatalogState {
    pub fn new(catalog: Catalog) -> Self {
        CatalogState {
            products: Arc::new(catalog.products),
            customers: Arc::new(catalog.customers),
            reports: Arc::new(catalog.reports),
            transactions: Arc::new(Mutex::new(catalog.transactions)),
        }
    }

    /// The product catalog.
    pub fn products(&self) -> &ProductCatalog {
        &self.products
    }

    /// The customer directory.
    pub fn customers(&self) -> &CustomerDirectory {
        &self.customers
    }

    /// The report figures.
    pub fn reports(&self) -> &ReportArchive {
        &self.reports
    }

    /// Executes a function with read access to the transaction log.
    pub fn with_transactions<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&TransactionLog) -> R,
    {
        let log = self.transactions.lock().expect("transaction log poisoned");
        f(&log)
    }

    /// Records a transaction.
    pub fn record_transaction(&self, tx: Transaction) {
        let mut log = self.transactions.lock().expect("transaction log poisoned");
        log.record(tx);
    }
}
