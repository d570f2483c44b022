//! Application router configuration.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    response::Redirect,
    routing::{delete, get, post},
};

use crate::{
    AppState,
    categorize::{
        batch_categorize_endpoint, categorize_endpoint, get_categorize_page,
        receipt_categorize_endpoint,
    },
    dashboard::{get_dashboard_page, import_endpoint},
    endpoints,
    internal_server_error::get_internal_server_error_page,
    not_found::get_404_not_found,
    transaction::{
        clear_transactions_endpoint, correct_transaction_endpoint, delete_transaction_endpoint,
    },
    upload::MAX_UPLOAD_SIZE,
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let page_routes = Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::DASHBOARD_VIEW, get(get_dashboard_page))
        .route(endpoints::CATEGORIZE_VIEW, get(get_categorize_page))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        );

    let api_routes = Router::new()
        .route(endpoints::CATEGORIZE, post(categorize_endpoint))
        .route(endpoints::BATCH_CATEGORIZE, post(batch_categorize_endpoint))
        .route(
            endpoints::OCR_CATEGORIZE,
            post(receipt_categorize_endpoint).layer(DefaultBodyLimit::max(MAX_UPLOAD_SIZE)),
        )
        .route(
            endpoints::IMPORT,
            post(import_endpoint).layer(DefaultBodyLimit::max(MAX_UPLOAD_SIZE)),
        )
        .route(
            endpoints::CORRECT_TRANSACTION,
            post(correct_transaction_endpoint),
        )
        .route(
            endpoints::DELETE_TRANSACTION,
            delete(delete_transaction_endpoint),
        )
        .route(
            endpoints::CLEAR_TRANSACTIONS,
            post(clear_transactions_endpoint),
        );

    page_routes
        .merge(api_routes)
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the dashboard page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::DASHBOARD_VIEW)
}

#[cfg(test)]
mod root_route_tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::{endpoints, routing::get_index_page};

    #[tokio::test]
    async fn root_redirects_to_dashboard() {
        let response = get_index_page().await.into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let location = response.headers().get("location").unwrap();
        assert_eq!(location, endpoints::DASHBOARD_VIEW);
    }
}
