use axum::{
    extract::{FromRef, Multipart, State},
    response::{IntoResponse, Response},
};

use crate::{AppState, Error, alert::Alert, api_client::ApiClient, upload::read_upload};

/// The state needed to import a CSV file.
#[derive(Debug, Clone)]
pub struct ImportState {
    pub api_client: ApiClient,
}

impl FromRef<AppState> for ImportState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            api_client: state.api_client.clone(),
        }
    }
}

/// A route handler for uploading a CSV file, responds with an alert
/// summarising what the categorization service imported.
///
/// The service keeps the imported transactions, so the store is not changed.
pub async fn import_endpoint(State(state): State<ImportState>, multipart: Multipart) -> Response {
    match import_csv(&state, multipart).await {
        Ok(alert) => alert.into_response(),
        Err(error) => error.into_alert_response(),
    }
}

async fn import_csv(state: &ImportState, multipart: Multipart) -> Result<Alert, Error> {
    let file = read_upload(multipart).await?;
    let file_name = file.file_name.clone();

    let summary = state.api_client.import_csv(file).await?;
    tracing::info!(
        "imported {file_name}: {} processed, {} categorized, {} uncategorized",
        summary.processed,
        summary.categorized,
        summary.uncategorized
    );

    Ok(Alert::Success {
        message: format!("Imported {} transactions", summary.processed),
        details: format!(
            "{} categorized, {} need review.",
            summary.categorized, summary.uncategorized
        ),
    })
}
