//! A stand-in for the categorization service that records every request.

use std::{
    net::SocketAddr,
    sync::{Arc, Mutex},
};

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use serde_json::{Value, json};
use tokio::net::TcpListener;
use url::Url;

use crate::api_client::{
    ApiClient, BATCH_CATEGORIZE_PATH, CATEGORIZE_PATH, CORRECT_PATH, IMPORT_PATH,
    OCR_CATEGORIZE_PATH,
};

/// A request received by [FakeService].
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum RecordedRequest {
    Json {
        path: String,
        body: Value,
    },
    File {
        path: String,
        field_name: String,
        file_name: String,
        content_type: String,
        bytes: Vec<u8>,
    },
}

#[derive(Clone)]
struct FakeState {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    failure: Option<StatusCode>,
    receipt_merchant: String,
}

pub(crate) struct FakeService {
    address: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl FakeService {
    /// Start a service that answers every request successfully.
    pub(crate) async fn start() -> Self {
        Self::start_with(None, "Countdown").await
    }

    /// Start a service that answers every request with `status`.
    pub(crate) async fn start_failing(status: StatusCode) -> Self {
        Self::start_with(Some(status), "Countdown").await
    }

    /// Start a service whose receipt scans return `merchant`.
    pub(crate) async fn start_with_receipt_merchant(merchant: &str) -> Self {
        Self::start_with(None, merchant).await
    }

    async fn start_with(failure: Option<StatusCode>, receipt_merchant: &str) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = FakeState {
            requests: requests.clone(),
            failure,
            receipt_merchant: receipt_merchant.to_owned(),
        };

        let router = Router::new()
            .route(CATEGORIZE_PATH, post(categorize))
            .route(BATCH_CATEGORIZE_PATH, post(batch_categorize))
            .route(IMPORT_PATH, post(import_csv))
            .route(OCR_CATEGORIZE_PATH, post(ocr_categorize))
            .route(CORRECT_PATH, post(correct))
            .layer(DefaultBodyLimit::disable())
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Could not bind fake categorization service");
        let address = listener
            .local_addr()
            .expect("Could not get fake service address");

        tokio::spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("Fake categorization service stopped");
        });

        Self { address, requests }
    }

    pub(crate) fn client(&self) -> ApiClient {
        ApiClient::new(self.url())
    }

    pub(crate) fn url(&self) -> Url {
        Url::parse(&format!("http://{}", self.address)).expect("Invalid fake service URL")
    }

    /// The requests received so far, oldest first.
    pub(crate) fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

/// A client for an address that nothing listens on.
pub(crate) async fn closed_port_client() -> ApiClient {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Could not bind port");
    let address = listener.local_addr().expect("Could not get address");
    drop(listener);

    ApiClient::new(Url::parse(&format!("http://{address}")).expect("Invalid URL"))
}

/// Uber rides are Transport with middling confidence, everything else is Food.
fn fake_categorization(description: &str) -> Value {
    if description.contains("Uber") {
        json!({ "description": description, "category": "Transport", "confidence": 0.65 })
    } else {
        json!({ "description": description, "category": "Food", "confidence": 0.92 })
    }
}

fn failure_response(status: StatusCode) -> Response {
    (
        status,
        Json(json!({ "detail": "Model not loaded. Please train the model first." })),
    )
        .into_response()
}

fn record_json(state: &FakeState, path: &str, body: &Value) {
    state.requests.lock().unwrap().push(RecordedRequest::Json {
        path: path.to_owned(),
        body: body.clone(),
    });
}

async fn record_file(state: &FakeState, path: &str, mut multipart: Multipart) {
    while let Some(field) = multipart.next_field().await.unwrap() {
        let field_name = field.name().unwrap_or_default().to_owned();
        let file_name = field.file_name().unwrap_or_default().to_owned();
        let content_type = field.content_type().unwrap_or_default().to_owned();
        let bytes = field.bytes().await.unwrap().to_vec();

        state.requests.lock().unwrap().push(RecordedRequest::File {
            path: path.to_owned(),
            field_name,
            file_name,
            content_type,
            bytes,
        });
    }
}

async fn categorize(State(state): State<FakeState>, Json(body): Json<Value>) -> Response {
    record_json(&state, CATEGORIZE_PATH, &body);

    if let Some(status) = state.failure {
        return failure_response(status);
    }

    let description = body["description"].as_str().unwrap_or_default();
    Json(fake_categorization(description)).into_response()
}

async fn batch_categorize(State(state): State<FakeState>, Json(body): Json<Value>) -> Response {
    record_json(&state, BATCH_CATEGORIZE_PATH, &body);

    if let Some(status) = state.failure {
        return failure_response(status);
    }

    let results: Vec<Value> = body["descriptions"]
        .as_array()
        .map(|descriptions| {
            descriptions
                .iter()
                .map(|description| fake_categorization(description.as_str().unwrap_or_default()))
                .collect()
        })
        .unwrap_or_default();
    let categorized = results
        .iter()
        .filter(|result| result["confidence"].as_f64().unwrap_or_default() > 0.5)
        .count();

    Json(json!({
        "processed": results.len(),
        "categorized": categorized,
        "results": results,
    }))
    .into_response()
}

async fn import_csv(State(state): State<FakeState>, multipart: Multipart) -> Response {
    record_file(&state, IMPORT_PATH, multipart).await;

    if let Some(status) = state.failure {
        return failure_response(status);
    }

    Json(json!({ "processed": 1, "categorized": 1, "uncategorized": 0 })).into_response()
}

async fn ocr_categorize(State(state): State<FakeState>, multipart: Multipart) -> Response {
    record_file(&state, OCR_CATEGORIZE_PATH, multipart).await;

    if let Some(status) = state.failure {
        return failure_response(status);
    }

    Json(json!({
        "merchant": state.receipt_merchant,
        "amount": 54.2,
        "category": "Food",
        "confidence": 0.88,
    }))
    .into_response()
}

async fn correct(State(state): State<FakeState>, Json(body): Json<Value>) -> Response {
    record_json(&state, CORRECT_PATH, &body);

    if let Some(status) = state.failure {
        return failure_response(status);
    }

    Json(json!({ "status": "recorded", "retraining_scheduled": "tonight" })).into_response()
}
