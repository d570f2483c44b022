use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::{Error, transaction::Transaction};

use super::{
    CategorizeState, add_new_transaction,
    form::{CategorizeOutcome, categorize_form},
};

#[derive(Debug, Deserialize)]
pub struct CategorizeForm {
    pub description: String,
}

/// A route handler for the categorize form, responds with the re-rendered form.
///
/// Blank descriptions are ignored without calling the categorization service.
/// On success the result is added to the store and the input is cleared. On
/// failure the store is left alone and a generic error is shown.
pub async fn categorize_endpoint(
    State(state): State<CategorizeState>,
    Form(form): Form<CategorizeForm>,
) -> Response {
    let description = form.description.trim();

    if description.is_empty() {
        return categorize_form("", None).into_response();
    }

    let result = match state.api_client.categorize(description).await {
        Ok(result) => result,
        Err(error) => {
            tracing::error!("Could not categorize \"{description}\": {error}");
            return categorize_form(description, Some(&CategorizeOutcome::Failed)).into_response();
        }
    };

    let id = {
        let mut store = match state.store.lock() {
            Ok(store) => store,
            Err(error) => {
                tracing::error!("could not acquire store lock: {error}");
                return Error::StoreLockError.into_alert_response();
            }
        };

        add_new_transaction(
            &mut store,
            Transaction::build(&result.description, result.category, result.confidence),
        )
    };

    tracing::info!(
        "categorized transaction {id} \"{}\" as {} ({})",
        result.description,
        result.category,
        result.confidence
    );

    categorize_form("", Some(&CategorizeOutcome::Categorized(result))).into_response()
}
