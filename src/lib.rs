//! ExpenseFlow is a web front end for an expense categorization service.
//!
//! This library provides a REST API that directly serves HTML pages. Each
//! transaction description the user enters is sent to the categorization
//! service, and the results are kept in an in-memory store that drives the
//! dashboard.

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use tokio::signal;

mod alert;
mod api_client;
mod app_state;
mod categorize;
mod config;
mod dashboard;
mod endpoints;
mod html;
mod internal_server_error;
mod logging;
mod navigation;
mod not_found;
mod routing;
mod store;
mod transaction;
mod upload;

#[cfg(test)]
mod test_utils;

pub use api_client::{ApiClient, ApiError};
pub use app_state::AppState;
pub use config::Config;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;
pub use store::{StoreEvent, SubscriptionId, TransactionStore};
pub use transaction::{Category, Transaction, TransactionId, TransactionUpdate};

use crate::{alert::Alert, internal_server_error::InternalServerError};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A category label that is not one of the eight known categories.
    #[error("unknown category \"{0}\"")]
    UnknownCategory(String),

    /// The multipart form could not be parsed.
    #[error("Could not parse multipart form: {0}")]
    MultipartError(String),

    /// The upload is larger than the body limit of the upload routes.
    #[error("the uploaded file is too large")]
    FileTooLarge,

    /// The multipart form did not contain a file in the `file` field.
    #[error("no file was uploaded")]
    MissingFile,

    /// A batch submission had no non-blank lines.
    #[error("no descriptions to categorize")]
    NoDescriptions,

    /// A call to the categorization service failed.
    ///
    /// The string is the [ApiError] message. It should only be logged, the
    /// client is shown a generic message instead.
    #[error("categorization service request failed: {0}")]
    CategorizationServiceError(String),

    /// Tried to correct a transaction that is not in the store.
    #[error("tried to correct a transaction that is not in the store")]
    CorrectMissingTransaction,

    /// Could not acquire the store lock
    #[error("could not acquire the store lock")]
    StoreLockError,
}

impl From<ApiError> for Error {
    fn from(value: ApiError) -> Self {
        tracing::error!("{value}");
        Error::CategorizationServiceError(value.to_string())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::CategorizationServiceError(_) => InternalServerError {
                description: "Categorization service unavailable",
                fix: "Check that the categorization service is running and try again.",
            }
            .into_response(),
            Error::StoreLockError => InternalServerError::default().into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}

impl Error {
    fn into_alert_response(self) -> Response {
        let (status, alert) = match self {
            Error::UnknownCategory(label) => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Invalid category".to_owned(),
                    details: format!("\"{label}\" is not one of the known categories."),
                },
            ),
            Error::NoDescriptions => (
                StatusCode::BAD_REQUEST,
                Alert::ErrorSimple {
                    message: "Enter at least one description, one per line.".to_owned(),
                },
            ),
            Error::MultipartError(_) | Error::MissingFile => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Could not read the uploaded file".to_owned(),
                    details: "Choose a file and try again.".to_owned(),
                },
            ),
            Error::FileTooLarge => (
                StatusCode::PAYLOAD_TOO_LARGE,
                Alert::Error {
                    message: "File too large".to_owned(),
                    details: format!(
                        "Files must be {} MB or smaller.",
                        upload::MAX_UPLOAD_SIZE / (1024 * 1024)
                    ),
                },
            ),
            Error::CategorizationServiceError(_) => (
                StatusCode::BAD_GATEWAY,
                Alert::Error {
                    message: "Categorization service unavailable".to_owned(),
                    details: "Check that the categorization service is running and try again."
                        .to_owned(),
                },
            ),
            Error::CorrectMissingTransaction => (
                StatusCode::NOT_FOUND,
                Alert::Error {
                    message: "Could not correct transaction".to_owned(),
                    details: "The transaction could not be found. \
                        Try refreshing the page to see if the transaction has been deleted."
                        .to_owned(),
                },
            ),
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Alert::Error {
                        message: "Something went wrong".to_owned(),
                        details:
                            "An unexpected error occurred, check the server logs for more details."
                                .to_owned(),
                    },
                )
            }
        };

        (status, alert.into_html()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::{
        Error,
        test_utils::{parse_html_fragment, select_text},
    };

    #[tokio::test]
    async fn missing_transaction_alert_is_not_found() {
        let response = Error::CorrectMissingTransaction.into_alert_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let html = parse_html_fragment(response).await;
        assert_eq!(
            select_text(&html, ".alert-message"),
            ["Could not correct transaction"]
        );
    }

    #[tokio::test]
    async fn service_error_hides_details_from_client() {
        let response =
            Error::CategorizationServiceError("connection refused".to_owned()).into_alert_response();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let html = parse_html_fragment(response).await;
        let details = select_text(&html, ".alert-details");
        assert_eq!(details.len(), 1);
        assert!(!details[0].contains("connection refused"));
    }

    #[tokio::test]
    async fn file_too_large_alert_states_limit() {
        let response = Error::FileTooLarge.into_alert_response();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        let html = parse_html_fragment(response).await;
        assert_eq!(select_text(&html, ".alert-message"), ["File too large"]);
        assert_eq!(
            select_text(&html, ".alert-details"),
            ["Files must be 20 MB or smaller."]
        );
    }

    #[tokio::test]
    async fn store_lock_error_renders_error_page() {
        let response = Error::StoreLockError.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
