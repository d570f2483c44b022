use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::{
    Error,
    alert::Alert,
    transaction::{CATEGORIZED_CONFIDENCE_THRESHOLD, Transaction},
};

use super::{CategorizeState, add_new_transaction};

#[derive(Debug, Deserialize)]
pub struct BatchCategorizeForm {
    /// One description per line.
    pub descriptions: String,
}

/// Split the textarea contents into trimmed, non-blank descriptions.
fn parse_descriptions(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

/// A route handler for categorizing many descriptions at once, responds with an alert.
///
/// Every result is added to the store, including low-confidence ones.
pub async fn batch_categorize_endpoint(
    State(state): State<CategorizeState>,
    Form(form): Form<BatchCategorizeForm>,
) -> Response {
    match batch_categorize(&state, &form.descriptions).await {
        Ok(alert) => alert.into_response(),
        Err(error) => error.into_alert_response(),
    }
}

async fn batch_categorize(state: &CategorizeState, text: &str) -> Result<Alert, Error> {
    let descriptions = parse_descriptions(text);

    if descriptions.is_empty() {
        return Err(Error::NoDescriptions);
    }

    let batch = state.api_client.batch_categorize(&descriptions).await?;

    let mut store = state
        .store
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire store lock: {error}"))
        .map_err(|_| Error::StoreLockError)?;

    for result in &batch.results {
        add_new_transaction(
            &mut store,
            Transaction::build(&result.description, result.category, result.confidence),
        );
    }

    tracing::info!(
        "batch categorized {} descriptions, {} above the confidence threshold",
        batch.processed,
        batch.categorized
    );

    Ok(Alert::Success {
        message: format!("Categorized {} transactions", batch.results.len()),
        details: format!(
            "{} of {} had a confidence above {:.0}%.",
            batch.categorized,
            batch.processed,
            CATEGORIZED_CONFIDENCE_THRESHOLD * 100.0
        ),
    })
}
