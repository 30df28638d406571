//! # State Module
//!
//! Session state for the dashboard.
//!
//! ## Why Multiple State Types?
//! Instead of a single `AppState` struct containing everything, each state
//! type has one responsibility and each service declares exactly what it
//! needs. Independent states never block each other.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                               │
//! │                                                                     │
//! │  ┌──────────────┐ ┌──────────────┐ ┌──────────────┐ ┌────────────┐  │
//! │  │ CatalogState │ │  CartState   │ │CheckoutState │ │ConfigState │  │
//! │  │              │ │              │ │              │ │            │  │
//! │  │ seeded data, │ │ Arc<Mutex<   │ │ Arc<Mutex<   │ │ RwLock<    │  │
//! │  │ tx log in    │ │   Cart>>     │ │  Option<     │ │ AppConfig> │  │
//! │  │ a Mutex      │ │              │ │  Flow>>>     │ │            │  │
//! │  └──────────────┘ └──────────────┘ └──────────────┘ └────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod catalog;
mod config;

pub use cart::{CartState, CheckoutState};
pub use catalog::CatalogState;
pub use config::{AppConfig, ConfigState, NotificationSettings, StockPolicy};
