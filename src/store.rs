//! The in-memory transaction store shared by all route handlers.
//!
//! The store owns the only copy of the transaction list. Views get read-only
//! slices via [TransactionStore::transactions] and change the list through the
//! mutators, which notify subscribers synchronously before they return.

use std::fmt;

use crate::transaction::{Transaction, TransactionId, TransactionUpdate};

/// A change to the store, passed to subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    /// A transaction was appended.
    Added(TransactionId),
    /// A transaction's fields were changed.
    Updated(TransactionId),
    /// A transaction was deleted.
    Removed(TransactionId),
    /// All transactions were deleted.
    Cleared,
}

/// Identifies a subscriber so it can be removed with [TransactionStore::unsubscribe].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn Fn(&StoreEvent) + Send>;

/// An ordered collection of transactions with change notification.
///
/// Transactions are kept in insertion order and never reordered. The store
/// does not check IDs for uniqueness, callers should use
/// [next_transaction_id](crate::transaction::next_transaction_id).
#[derive(Default)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription_id: u64,
}

impl fmt::Debug for TransactionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransactionStore")
            .field("transactions", &self.transactions)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl TransactionStore {
    /// Create an empty store with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `callback` to be called after every change to the store.
    pub fn subscribe(&mut self, callback: impl Fn(&StoreEvent) + Send + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription_id);
        self.next_subscription_id += 1;
        self.subscribers.push((id, Box::new(callback)));

        id
    }

    /// Remove a subscriber. Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let count_before = self.subscribers.len();
        self.subscribers
            .retain(|(subscription_id, _)| *subscription_id != id);

        self.subscribers.len() != count_before
    }

    /// Append `transaction` to the end of the store.
    pub fn add(&mut self, transaction: Transaction) {
        let id = transaction.id;
        self.transactions.push(transaction);
        self.notify(StoreEvent::Added(id));
    }

    /// Merge `update` into the transaction with `id`.
    ///
    /// Does nothing if no transaction has that ID.
    pub fn update(&mut self, id: TransactionId, update: TransactionUpdate) {
        let Some(transaction) = self.transactions.iter_mut().find(|t| t.id == id) else {
            return;
        };

        transaction.apply(update);
        self.notify(StoreEvent::Updated(id));
    }

    /// Delete the transaction with `id`.
    ///
    /// Does nothing if no transaction has that ID.
    pub fn remove(&mut self, id: TransactionId) {
        let count_before = self.transactions.len();
        self.transactions.retain(|transaction| transaction.id != id);

        if self.transactions.len() != count_before {
            self.notify(StoreEvent::Removed(id));
        }
    }

    /// Delete every transaction.
    pub fn clear(&mut self) {
        self.transactions.clear();
        self.notify(StoreEvent::Cleared);
    }

    /// The transactions in insertion order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|transaction| transaction.id == id)
    }

    /// The largest transaction ID in the store.
    pub fn latest_id(&self) -> Option<TransactionId> {
        self.transactions.iter().map(|transaction| transaction.id).max()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// The number of transactions with a predicted confidence above 0.5.
    pub fn categorized_count(&self) -> usize {
        self.transactions
            .iter()
            .filter(|transaction| transaction.is_categorized())
            .count()
    }

    /// The number of transactions with a predicted confidence of 0.5 or less.
    pub fn uncategorized_count(&self) -> usize {
        self.len() - self.categorized_count()
    }

    fn notify(&self, event: StoreEvent) {
        for (_, subscriber) in &self.subscribers {
            subscriber(&event);
        }
    }
}
