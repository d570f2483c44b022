//! Implements a struct that holds the state of the web server.

use std::sync::{Arc, Mutex};

use crate::{
    api_client::ApiClient,
    store::{StoreEvent, TransactionStore},
};

/// The state of the web server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The client for the external categorization service.
    pub api_client: ApiClient,

    /// The transactions shown in the app.
    pub store: Arc<Mutex<TransactionStore>>,
}

impl AppState {
    /// Create a new [AppState] with an empty transaction store.
    ///
    /// Every change to the store is logged at the debug level.
    pub fn new(api_client: ApiClient) -> Self {
        let mut store = TransactionStore::new();
        store.subscribe(log_store_event);

        Self {
            api_client,
            store: Arc::new(Mutex::new(store)),
        }
    }
}

fn log_store_event(event: &StoreEvent) {
    match event {
        StoreEvent::Added(id) => tracing::debug!("added transaction {id} to the store"),
        StoreEvent::Updated(id) => tracing::debug!("updated transaction {id} in the store"),
        StoreEvent::Removed(id) => tracing::debug!("removed transaction {id} from the store"),
        StoreEvent::Cleared => tracing::debug!("cleared all transactions from the store"),
    }
}
