//! # Checkout Module
//!
//! The payment flow as an explicit finite-state machine, decoupled from any
//! rendering concern.
//!
//! ## Stages
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Checkout Flow                                  │
//! │                                                                     │
//! │   ┌────────────┐  Next   ┌──────────────┐  Next  ┌──────────────┐   │
//! │   │ CartReview │ ──────► │ CustomerInfo │ ─────► │PaymentSelect │   │
//! │   │            │ ◄────── │              │ ◄───── │              │   │
//! │   └────────────┘  Back   └──────────────┘  Back  └──────┬───────┘   │
//! │                                                         │           │
//! │                                      Complete (method   │           │
//! │                                      must be selected)  ▼           │
//! │                                                  ┌──────────────┐   │
//! │                                                  │  Completed   │   │
//! │                                                  └──────────────┘   │
//! │                                                                     │
//! │  Transitions are user-initiated only: no branching, no timeouts,    │
//! │  no automatic advancement. Abandoning the flow discards the flow    │
//! │  and leaves the cart untouched.                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::PaymentMethod;

// =============================================================================
// Stages and Actions
// =============================================================================

/// Where the checkout flow currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutStage {
    /// Reviewing cart lines and the grand total.
    #[default]
    CartReview,
    /// Entering customer name / phone / email.
    CustomerInfo,
    /// Choosing how the bill is settled.
    PaymentSelection,
    /// Terminal: payment has been taken.
    Completed,
}

/// A user-initiated checkout action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "action", content = "method")]
pub enum CheckoutAction {
    Next,
    Back,
    SelectMethod(PaymentMethod),
    Complete,
}

/// Transition rejections. These are user-facing ("the Next button should
/// have been disabled"), not state corruption: a rejected action leaves the
/// flow exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    #[error("cannot go back from {stage:?}")]
    CannotGoBack { stage: CheckoutStage },

    #[error("cannot advance from {stage:?}")]
    CannotAdvance { stage: CheckoutStage },

    #[error("a payment method can only be chosen at the payment step")]
    NotAtPaymentStep { stage: CheckoutStage },

    #[error("select a payment method before completing payment")]
    PaymentMethodRequired,
}

// =============================================================================
// Customer Details
// =============================================================================

/// Free-text customer details captured during checkout. All fields are
/// optional entry; email in particular is marked optional on the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDetails {
    pub name: String,
    pub phone: String,
    pub email: String,
}

// =============================================================================
// Checkout Flow
// =============================================================================

/// The checkout state machine: current stage plus the data entered so far.
///
/// ## Example
/// ```rust
/// use medipos_core::checkout::{CheckoutFlow, CheckoutStage};
/// use medipos_core::types::PaymentMethod;
///
/// let mut flow = CheckoutFlow::new();
/// flow.next().unwrap(); // -> CustomerInfo
/// flow.next().unwrap(); // -> PaymentSelection
/// flow.select_method(PaymentMethod::Upi).unwrap();
/// let method = flow.complete().unwrap();
/// assert_eq!(method, PaymentMethod::Upi);
/// assert_eq!(flow.stage(), CheckoutStage::Completed);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutFlow {
    stage: CheckoutStage,
    customer: CustomerDetails,
    method: Option<PaymentMethod>,
}

impl CheckoutFlow {
    /// Creates a flow at the initial stage with nothing entered.
    pub fn new() -> Self {
        CheckoutFlow::default()
    }

    /// Current stage.
    #[inline]
    pub fn stage(&self) -> CheckoutStage {
        self.stage
    }

    /// Customer details entered so far.
    #[inline]
    pub fn customer(&self) -> &CustomerDetails {
        &self.customer
    }

    /// Selected payment method, if any.
    #[inline]
    pub fn method(&self) -> Option<PaymentMethod> {
        self.method
    }

    /// Checks whether the flow has reached the terminal stage.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.stage == CheckoutStage::Completed
    }

    /// Applies a user action to the flow.
    ///
    /// This is the single transition function; `next`/`back`/`select_method`
    /// /`complete` are the primitive edges it dispatches to.
    pub fn apply(&mut self, action: CheckoutAction) -> Result<(), CheckoutError> {
        match action {
            CheckoutAction::Next => self.next(),
            CheckoutAction::Back => self.back(),
            CheckoutAction::SelectMethod(m) => self.select_method(m),
            CheckoutAction::Complete => self.complete().map(|_| ()),
        }
    }

    /// Advances one step. The final step forward is [`CheckoutFlow::complete`],
    /// not `next`.
    pub fn next(&mut self) -> Result<(), CheckoutError> {
        self.stage = match self.stage {
            CheckoutStage::CartReview => CheckoutStage::CustomerInfo,
            CheckoutStage::CustomerInfo => CheckoutStage::PaymentSelection,
            stage => return Err(CheckoutError::CannotAdvance { stage }),
        };
        Ok(())
    }

    /// Steps back one stage. Entered data is kept.
    pub fn back(&mut self) -> Result<(), CheckoutError> {
        self.stage = match self.stage {
            CheckoutStage::CustomerInfo => CheckoutStage::CartReview,
            CheckoutStage::PaymentSelection => CheckoutStage::CustomerInfo,
            stage => return Err(CheckoutError::CannotGoBack { stage }),
        };
        Ok(())
    }

    /// Records customer details. Accepted at any non-terminal stage; the
    /// form simply writes through as the user types.
    pub fn set_customer(&mut self, customer: CustomerDetails) {
        if self.stage != CheckoutStage::Completed {
            self.customer = customer;
        }
    }

    /// Chooses the payment method. Only valid at the payment step.
    pub fn select_method(&mut self, method: PaymentMethod) -> Result<(), CheckoutError> {
        if self.stage != CheckoutStage::PaymentSelection {
            return Err(CheckoutError::NotAtPaymentStep { stage: self.stage });
        }
        self.method = Some(method);
        Ok(())
    }

    /// Completes the payment. Enabled only at the payment step once a method
    /// has been selected; returns the method the bill was settled with.
    pub fn complete(&mut self) -> Result<PaymentMethod, CheckoutError> {
        if self.stage != CheckoutStage::PaymentSelection {
            return Err(CheckoutError::CannotAdvance { stage: self.stage });
        }
        let method = self.method.ok_or(CheckoutError::PaymentMethodRequired)?;
        self.stage = CheckoutStage::Completed;
        Ok(method)
    }

    /// Returns the flow to its initial state, discarding entered data.
    pub fn reset(&mut self) {
        *self = CheckoutFlow::new();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_walk_forward_and_back() {
        let mut flow = CheckoutFlow::new();
        assert_eq!(flow.stage(), CheckoutStage::CartReview);

        flow.next().unwrap();
        assert_eq!(flow.stage(), CheckoutStage::CustomerInfo);
        flow.next().unwrap();
        assert_eq!(flow.stage(), CheckoutStage::PaymentSelection);

        flow.back().unwrap();
        assert_eq!(flow.stage(), CheckoutStage::CustomerInfo);
        flow.back().unwrap();
        assert_eq!(flow.stage(), CheckoutStage::CartReview);
    }

    #[test]
    fn test_back_rejected_at_first_stage() {
        let mut flow = CheckoutFlow::new();
        let err = flow.back().unwrap_err();
        assert_eq!(
            err,
            CheckoutError::CannotGoBack {
                stage: CheckoutStage::CartReview
            }
        );
        assert_eq!(flow.stage(), CheckoutStage::CartReview);
    }

    #[test]
    fn test_next_rejected_at_payment_stage() {
        let mut flow = CheckoutFlow::new();
        flow.next().unwrap();
        flow.next().unwrap();

        // Forward past PaymentSelection goes through complete(), never next()
        assert!(flow.next().is_err());
        assert_eq!(flow.stage(), CheckoutStage::PaymentSelection);
    }

    #[test]
    fn test_complete_requires_method() {
        let mut flow = CheckoutFlow::new();
        flow.next().unwrap();
        flow.next().unwrap();

        assert_eq!(flow.complete().unwrap_err(), CheckoutError::PaymentMethodRequired);
        assert_eq!(flow.stage(), CheckoutStage::PaymentSelection);

        flow.select_method(PaymentMethod::Cash).unwrap();
        assert_eq!(flow.complete().unwrap(), PaymentMethod::Cash);
        assert!(flow.is_complete());
    }

    #[test]
    fn test_complete_rejected_before_payment_stage() {
        let mut flow = CheckoutFlow::new();
        assert!(flow.complete().is_err());

        flow.next().unwrap();
        assert!(flow.complete().is_err());
        assert_eq!(flow.stage(), CheckoutStage::CustomerInfo);
    }

    #[test]
    fn test_select_method_only_at_payment_stage() {
        let mut flow = CheckoutFlow::new();
        let err = flow.select_method(PaymentMethod::Card).unwrap_err();
        assert_eq!(
            err,
            CheckoutError::NotAtPaymentStep {
                stage: CheckoutStage::CartReview
            }
        );
        assert_eq!(flow.method(), None);
    }

    #[test]
    fn test_customer_details_survive_back() {
        let mut flow = CheckoutFlow::new();
        flow.next().unwrap();
        flow.set_customer(CustomerDetails {
            name: "Asha Rao".to_string(),
            phone: "+91 90000 00000".to_string(),
            email: String::new(),
        });

        flow.back().unwrap();
        flow.next().unwrap();
        assert_eq!(flow.customer().name, "Asha Rao");
    }

    #[test]
    fn test_apply_dispatches_actions() {
        let mut flow = CheckoutFlow::new();
        flow.apply(CheckoutAction::Next).unwrap();
        flow.apply(CheckoutAction::Next).unwrap();
        flow.apply(CheckoutAction::SelectMethod(PaymentMethod::Upi)).unwrap();
        flow.apply(CheckoutAction::Complete).unwrap();
        assert!(flow.is_complete());

        // Terminal stage accepts nothing further
        assert!(flow.apply(CheckoutAction::Next).is_err());
        assert!(flow.apply(CheckoutAction::Back).is_err());
        assert!(flow.apply(CheckoutAction::Complete).is_err());
    }

    #[test]
    fn test_reset_returns_to_initial_state() {
        let mut flow = CheckoutFlow::new();
        flow.next().unwrap();
        flow.next().unwrap();
        flow.select_method(PaymentMethod::Credit).unwrap();
        flow.complete().unwrap();

        flow.reset();
        assert_eq!(flow, CheckoutFlow::new());
    }
}
