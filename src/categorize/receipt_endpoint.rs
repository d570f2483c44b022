use axum::{
    extract::{Multipart, State},
    response::{IntoResponse, Response},
};

use crate::{
    Error,
    alert::Alert,
    html::format_currency,
    transaction::{Transaction, format_confidence},
    upload::read_upload,
};

use super::{CategorizeState, add_new_transaction};

/// The description used when neither the merchant nor the file name is known.
const UNNAMED_RECEIPT_DESCRIPTION: &str = "Receipt";

/// A route handler for uploading a receipt image, responds with an alert.
///
/// The service reads the merchant and total from the receipt. The merchant
/// becomes the transaction description, falling back to the file name when
/// the service could not read one, then to "Receipt".
pub async fn receipt_categorize_endpoint(
    State(state): State<CategorizeState>,
    multipart: Multipart,
) -> Response {
    match categorize_receipt(&state, multipart).await {
        Ok(alert) => alert.into_response(),
        Err(error) => error.into_alert_response(),
    }
}

async fn categorize_receipt(state: &CategorizeState, multipart: Multipart) -> Result<Alert, Error> {
    let file = read_upload(multipart).await?;
    let file_name = file.file_name.clone();
    tracing::debug!("scanning receipt {file_name} ({} bytes)", file.bytes.len());

    let receipt = state.api_client.ocr_categorize(file).await?;

    let description = [receipt.merchant.trim(), file_name.trim()]
        .into_iter()
        .find(|name| !name.is_empty())
        .unwrap_or(UNNAMED_RECEIPT_DESCRIPTION)
        .to_owned();

    let mut store = state
        .store
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire store lock: {error}"))
        .map_err(|_| Error::StoreLockError)?;

    add_new_transaction(
        &mut store,
        Transaction::build(&description, receipt.category, receipt.confidence)
            .amount(receipt.amount),
    );

    Ok(Alert::Success {
        message: "Receipt categorized".to_owned(),
        details: format!(
            "{description}, {}: {} ({} confidence)",
            format_currency(receipt.amount),
            receipt.category,
            format_confidence(receipt.confidence)
        ),
    })
}
