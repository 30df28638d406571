//! # Transaction Log
//!
//! The in-memory record of settled bills, most recent first. Bills created
//! by completing a checkout are appended here; nothing survives the
//! process.

use tracing::info;

use medipos_core::money::Money;
use medipos_core::types::{Transaction, TransactionStatus};

/// In-memory transaction history, newest first.
#[derive(Debug, Clone, Default)]
pub struct TransactionLog {
    entries: Vec<Transaction>,
}

impl TransactionLog {
    /// Creates a log pre-populated with `entries` (expected newest first).
    pub fn new(entries: Vec<Transaction>) -> Self {
        TransactionLog { entries }
    }

    /// Records a new transaction at the head of the log.
    pub fn record(&mut self, tx: Transaction) {
        info!(id = %tx.id, amount = %tx.amount(), method = ?tx.method, "transaction recorded");
        self.entries.insert(0, tx);
    }

    /// The most recent `limit` transactions.
    pub fn recent(&self, limit: usize) -> &[Transaction] {
        &self.entries[..limit.min(self.entries.len())]
    }

    /// All transactions, newest first.
    pub fn all(&self) -> &[Transaction] {
        &self.entries
    }

    /// Sum of all completed transaction amounts.
    pub fn completed_total(&self) -> Money {
        self.entries
            .iter()
            .filter(|t| t.status == TransactionStatus::Completed)
            .fold(Money::zero(), |acc, t| acc + t.amount())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
