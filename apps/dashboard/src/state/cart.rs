//! # Cart & Checkout State
//!
//! Session ownership of the billing cart and the in-progress checkout flow.
//!
//! ## Thread Safety
//! Both are wrapped in `Arc<Mutex<T>>`: services may be called from
//! concurrent tasks, and only one caller should mutate at a time. Cart
//! operations are quick, so a plain Mutex beats a RwLock here.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  CartState:     created empty ──► mutated by billing ops ──► clear  │
//! │                 on payment completion (and only then)               │
//! │                                                                     │
//! │  CheckoutState: None ──► begin_checkout ──► Some(flow)              │
//! │                 cancel ──► None (cart untouched)                    │
//! │                 complete ──► None (cart cleared)                    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use medipos_core::{Cart, CheckoutFlow};

/// Session-owned cart.
#[derive(Debug, Default)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    /// Creates a new empty cart state.
    pub fn new() -> Self {
        CartState {
            cart: Arc::new(Mutex::new(Cart::new())),
        }
    }

    /// Executes a function with read access to the cart.
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().expect("cart mutex poisoned");
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().expect("cart mutex poisoned");
        f(&mut cart)
    }
}

/// Session-owned checkout flow. `None` while the payment dialog is closed.
#[derive(Debug, Default)]
pub struct CheckoutState {
    flow: Arc<Mutex<Option<CheckoutFlow>>>,
}

impl CheckoutState {
    /// Creates a state with no flow in progress.
    pub fn new() -> Self {
        CheckoutState {
            flow: Arc::new(Mutex::new(None)),
        }
    }

    /// Executes a function with access to the optional flow.
    pub fn with_flow<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Option<CheckoutFlow>) -> R,
    {
        let mut flow = self.flow.lock().expect("checkout mutex poisoned");
        f(&mut flow)
    }

    /// Checks whether a checkout is in progress.
    pub fn is_active(&self) -> bool {
        self.with_flow(|flow| flow.is_some())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
