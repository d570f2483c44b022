//! Summary statistics shown in the dashboard cards.
//!
//! Everything is recomputed from the store snapshot on each render.

use crate::store::TransactionStore;

/// Totals derived from the transactions in the store.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DashboardStats {
    pub total_count: usize,
    pub categorized_count: usize,
    pub uncategorized_count: usize,
    pub total_amount: f64,
    /// The share of categorized transactions as a whole-number percentage.
    ///
    /// Zero when there are no transactions.
    pub categorized_percentage: u32,
}

impl DashboardStats {
    pub fn from_store(store: &TransactionStore) -> Self {
        let total_count = store.len();
        let categorized_count = store.categorized_count();
        let total_amount = store
            .transactions()
            .iter()
            .map(|transaction| transaction.amount)
            .sum();

        let categorized_percentage = if total_count == 0 {
            0
        } else {
            (categorized_count as f64 / total_count as f64 * 100.0).round() as u32
        };

        Self {
            total_count,
            categorized_count,
            uncategorized_count: store.uncategorized_count(),
            total_amount,
            categorized_percentage,
        }
    }
}
