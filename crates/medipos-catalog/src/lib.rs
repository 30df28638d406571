//! # medipos-catalog: In-Memory Data Source
//!
//! The read-only data the dashboard runs on: products, customers, the
//! transaction log, and the report figures, seeded once at startup.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │            apps/dashboard ──► medipos-catalog (THIS CRATE)          │
//! │                                                                     │
//! │   ┌──────────────┐ ┌───────────────┐ ┌──────────────┐ ┌──────────┐  │
//! │   │ProductCatalog│ │CustomerDirect.│ │TransactionLog│ │ Report   │  │
//! │   │ find/search/ │ │ find/search   │ │ recent/record│ │ Archive  │  │
//! │   │ low-stock/   │ │               │ │              │ │          │  │
//! │   │ expiring     │ │               │ │              │ │          │  │
//! │   └──────────────┘ └───────────────┘ └──────────────┘ └──────────┘  │
//! │                                                                     │
//! │  Everything is immutable after seeding except the transaction log,  │
//! │  which grows as payments complete. No persistence, no network.      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Injected into the services as a constructed value rather than reached as
//! a global, so the billing engine stays independently testable.

pub mod customers;
pub mod figures;
pub mod products;
pub mod seed;
pub mod transactions;

pub use customers::CustomerDirectory;
pub use figures::{CategoryShare, GstMonth, ReportArchive, SalesFigure, TopProduct};
pub use products::ProductCatalog;
pub use transactions::TransactionLog;

/// The complete seeded data set, bundled for injection into the dashboard.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub products: ProductCatalog,
    pub customers: CustomerDirectory,
    pub transactions: TransactionLog,
    pub reports: ReportArchive,
}
