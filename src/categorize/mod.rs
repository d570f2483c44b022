//! The categorize page and the endpoints that send descriptions and receipts
//! to the categorization service.

mod batch_endpoint;
mod endpoint;
mod form;
mod page;
mod receipt_endpoint;

use std::sync::{Arc, Mutex};

use axum::extract::FromRef;
use time::OffsetDateTime;

use crate::{
    AppState,
    api_client::ApiClient,
    store::TransactionStore,
    transaction::{TransactionBuilder, TransactionId, next_transaction_id},
};

pub use batch_endpoint::batch_categorize_endpoint;
pub use endpoint::categorize_endpoint;
pub use page::get_categorize_page;
pub use receipt_endpoint::receipt_categorize_endpoint;

/// The state needed to categorize transactions.
#[derive(Debug, Clone)]
pub struct CategorizeState {
    pub store: Arc<Mutex<TransactionStore>>,
    pub api_client: ApiClient,
}

impl FromRef<AppState> for CategorizeState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
            api_client: state.api_client.clone(),
        }
    }
}

/// Give `transaction` a fresh ID, stamp it with the current time and append it to `store`.
fn add_new_transaction(store: &mut TransactionStore, transaction: TransactionBuilder) -> TransactionId {
    let now = OffsetDateTime::now_utc();
    let id = next_transaction_id(now, store.latest_id());
    store.add(transaction.finalize(id, now));

    id
}
