//! The URIs served by this app.
//!
//! For endpoints that take a parameter, e.g., '/api/transactions/{transaction_id}', use [format_endpoint].

/// The root route which redirects to the dashboard.
pub const ROOT: &str = "/";
/// The page with the summary cards and the transactions table.
pub const DASHBOARD_VIEW: &str = "/dashboard";
/// The page with the categorization forms.
pub const CATEGORIZE_VIEW: &str = "/categorize";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";

/// The route for categorizing a single description.
pub const CATEGORIZE: &str = "/api/categorize";
/// The route for categorizing one description per line.
pub const BATCH_CATEGORIZE: &str = "/api/batch-categorize";
/// The route for uploading a receipt image.
pub const OCR_CATEGORIZE: &str = "/api/ocr-categorize";
/// The route for uploading a CSV file of transactions.
pub const IMPORT: &str = "/api/import";
/// The route to delete a single transaction.
pub const DELETE_TRANSACTION: &str = "/api/transactions/{transaction_id}";
/// The route to correct the category of a single transaction.
pub const CORRECT_TRANSACTION: &str = "/api/transactions/{transaction_id}/correction";
/// The route to delete all transactions.
pub const CLEAR_TRANSACTIONS: &str = "/api/transactions/clear";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/api/transactions/{transaction_id}',
/// '{transaction_id}' is the parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_owned();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|end| param_start + end + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
