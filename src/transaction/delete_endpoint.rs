use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    response::{IntoResponse, Response},
};
use maud::html;

use crate::{
    AppState, Error,
    dashboard::{DashboardStats, stats_section},
    store::TransactionStore,
};

use super::{core::TransactionId, table::transactions_section};

/// The state needed to delete a transaction.
#[derive(Debug, Clone)]
pub struct DeleteTransactionState {
    pub store: Arc<Mutex<TransactionStore>>,
}

impl FromRef<AppState> for DeleteTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// A route handler for deleting a transaction.
///
/// Responds with the re-rendered transactions section and an out-of-band
/// swap of the dashboard stats, so the cards, the empty state and the clear
/// button reflect the store after the delete.
///
/// Deleting a transaction that is not in the store succeeds without changing anything.
pub async fn delete_transaction_endpoint(
    State(state): State<DeleteTransactionState>,
    Path(transaction_id): Path<TransactionId>,
) -> Response {
    let mut store = match state.store.lock() {
        Ok(store) => store,
        Err(error) => {
            tracing::error!("could not acquire store lock: {error}");
            return Error::StoreLockError.into_alert_response();
        }
    };

    store.remove(transaction_id);
    let stats = DashboardStats::from_store(&store);

    // The status code has to be 200 OK or HTMX will not swap the response in.
    html! {
        (transactions_section(store.transactions()))
        (stats_section(&stats, true))
    }
    .into_response()
}
