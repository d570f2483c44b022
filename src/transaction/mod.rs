//! Transactions and the views and route handlers that change them.
//!
//! This module contains:
//! - The `Transaction` model, `TransactionBuilder` and `TransactionUpdate`
//! - The transactions table shown on the dashboard
//! - Route handlers for correcting, deleting and clearing transactions

mod clear_endpoint;
mod core;
mod correction_endpoint;
mod delete_endpoint;
mod table;

pub use clear_endpoint::clear_transactions_endpoint;
pub use core::{
    CATEGORIZED_CONFIDENCE_THRESHOLD, Category, Transaction, TransactionBuilder, TransactionId,
    TransactionUpdate, format_confidence, next_transaction_id,
};
pub use correction_endpoint::correct_transaction_endpoint;
pub use delete_endpoint::delete_transaction_endpoint;
pub(crate) use table::{category_badge, transactions_section};
