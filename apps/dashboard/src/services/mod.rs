//! # Services Module
//!
//! One module per screen, each the screen's logic with the rendering
//! removed. Services take exactly the state they need and return
//! serializable DTOs.

pub mod billing;
pub mod customers;
pub mod insights;
pub mod inventory;
pub mod reports;
pub mod settings;
