use std::sync::{Arc, Mutex};

use time::macros::datetime;

use crate::{
    store::TransactionStore,
    transaction::{Category, Transaction, TransactionId},
};

pub(crate) fn test_transaction(
    id: TransactionId,
    description: &str,
    category: Category,
    confidence: f64,
) -> Transaction {
    Transaction::build(description, category, confidence)
        .finalize(id, datetime!(2025-10-05 12:00 UTC))
}

pub(crate) fn test_store(transactions: Vec<Transaction>) -> Arc<Mutex<TransactionStore>> {
    let mut store = TransactionStore::new();

    for transaction in transactions {
        store.add(transaction);
    }

    Arc::new(Mutex::new(store))
}
