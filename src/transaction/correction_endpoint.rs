use std::sync::{Arc, Mutex};

use axum::{
    Form,
    extract::{FromRef, Path, State},
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;

use crate::{AppState, Error, api_client::ApiClient, store::TransactionStore};

use super::{
    core::{Category, TransactionId, TransactionUpdate},
    table::transaction_row,
};

/// The state needed to correct a transaction's category.
#[derive(Debug, Clone)]
pub struct CorrectionState {
    pub store: Arc<Mutex<TransactionStore>>,
    pub api_client: ApiClient,
}

impl FromRef<AppState> for CorrectionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            store: state.store.clone(),
            api_client: state.api_client.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CorrectionForm {
    /// The label of the category chosen by the user.
    pub category: String,
}

/// A route handler for correcting a transaction's category, responds with the
/// updated table row.
///
/// The correction is sent to the categorization service before the store is
/// updated, so a failed request leaves the row as it was.
pub async fn correct_transaction_endpoint(
    State(state): State<CorrectionState>,
    Path(transaction_id): Path<TransactionId>,
    Form(form): Form<CorrectionForm>,
) -> Response {
    match correct_transaction(&state, transaction_id, &form.category).await {
        Ok(row) => Html(row).into_response(),
        Err(error) => error.into_alert_response(),
    }
}

async fn correct_transaction(
    state: &CorrectionState,
    transaction_id: TransactionId,
    label: &str,
) -> Result<String, Error> {
    let category = Category::from_label(label)?;

    let exists = lock_store(&state.store)?.get(transaction_id).is_some();
    if !exists {
        return Err(Error::CorrectMissingTransaction);
    }

    let ack = state
        .api_client
        .record_correction(transaction_id, category)
        .await?;
    tracing::info!(
        "recorded correction of transaction {transaction_id} to {category}: {}",
        ack.status
    );

    let mut store = lock_store(&state.store)?;
    store.update(transaction_id, TransactionUpdate::correction(category));

    // The transaction may have been deleted while waiting for the service.
    store
        .get(transaction_id)
        .map(|transaction| transaction_row(transaction).into_string())
        .ok_or(Error::CorrectMissingTransaction)
}

fn lock_store(
    store: &Mutex<TransactionStore>,
) -> Result<std::sync::MutexGuard<'_, TransactionStore>, Error> {
    store
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire store lock: {error}"))
        .map_err(|_| Error::StoreLockError)
}
