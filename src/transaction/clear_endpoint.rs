use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;

use crate::{AppState, Error, endpoints, store::TransactionStore};

/// The state needed to delete every transaction.
#[derive(Debug, Clone)]
pub struct ClearTransactionsState {
    pub store: Arc<Mutex<TransactionStore>>,
}

impl FromRef<AppState> for ClearTransactionsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// A route handler that empties the store and redirects to the dashboard.
pub async fn clear_transactions_endpoint(State(state): State<ClearTransactionsState>) -> Response {
    let mut store = match state.store.lock() {
        Ok(store) => store,
        Err(error) => {
            tracing::error!("could not acquire store lock: {error}");
            return Error::StoreLockError.into_alert_response();
        }
    };

    let count = store.len();
    store.clear();
    tracing::info!("cleared {count} transactions");

    (
        HxRedirect(endpoints::DASHBOARD_VIEW.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}
