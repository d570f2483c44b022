//! HTTP client for the external categorization service.
//!
//! Each method maps to one endpoint of the service and returns the parsed JSON
//! response. There are no retries and no timeouts beyond reqwest's defaults,
//! so errors reach the caller untouched.

use reqwest::{
    Client, Response,
    header::{CONTENT_TYPE, HeaderMap, HeaderValue},
    multipart::{Form, Part},
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use url::Url;

use crate::transaction::{Category, TransactionId};

/// The path for categorizing a single description.
pub const CATEGORIZE_PATH: &str = "/api/categorize";
/// The path for categorizing a list of descriptions.
pub const BATCH_CATEGORIZE_PATH: &str = "/api/batch-categorize";
/// The path for uploading a CSV file of transactions.
pub const IMPORT_PATH: &str = "/api/import";
/// The path for uploading a receipt image.
pub const OCR_CATEGORIZE_PATH: &str = "/api/ocr-categorize";
/// The path for recording a user's correction.
pub const CORRECT_PATH: &str = "/api/correct";

/// The name of the multipart field that holds an uploaded file.
const FILE_FIELD: &str = "file";

/// The content type sent for uploads whose own content type is unusable.
const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// The errors that may occur when calling the categorization service.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request could not be sent or the response could not be read.
    #[error("could not reach the categorization service: {0}")]
    Transport(reqwest::Error),

    /// The service responded with a non-2xx status code.
    #[error("the categorization service responded with {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The response body was not the expected JSON.
    #[error("could not decode the response from the categorization service: {0}")]
    Decode(reqwest::Error),

    /// A request path could not be joined onto the base URL.
    #[error("invalid URL for path \"{0}\"")]
    InvalidUrl(String),
}

/// The categorization of one transaction description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorizationResult {
    pub description: String,
    pub category: Category,
    pub confidence: f64,
}

/// The categorizations for a batch of descriptions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchCategorization {
    /// How many descriptions the service processed.
    pub processed: usize,
    /// How many results have a confidence above 0.5.
    pub categorized: usize,
    /// One result per description, in request order.
    pub results: Vec<CategorizationResult>,
}

/// The summary the service returns after importing a CSV file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportSummary {
    pub processed: usize,
    pub categorized: usize,
    pub uncategorized: usize,
}

/// The details extracted from a receipt image and their categorization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptCategorization {
    pub merchant: String,
    pub amount: f64,
    pub category: Category,
    pub confidence: f64,
}

/// The service's acknowledgement of a correction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrectionAck {
    pub status: String,
    #[serde(default)]
    pub retraining_scheduled: Option<String>,
}

#[derive(Debug, Serialize)]
struct CategorizeRequest<'a> {
    description: &'a str,
}

#[derive(Debug, Serialize)]
struct BatchCategorizeRequest<'a> {
    descriptions: &'a [String],
}

#[derive(Debug, Serialize)]
struct CorrectionRequest {
    transaction_id: TransactionId,
    correct_category: Category,
}

/// A file uploaded by the user, forwarded to the service as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    /// Wrap the file in a multipart form.
    ///
    /// The content type is sent as a raw part header. A content type that is
    /// not a valid header value is sent as `application/octet-stream` instead.
    fn into_form(self) -> Form {
        let content_type = HeaderValue::from_str(&self.content_type).unwrap_or_else(|error| {
            tracing::warn!(
                "invalid content type \"{}\" for {}, sending as {DEFAULT_CONTENT_TYPE}: {error}",
                self.content_type,
                self.file_name
            );
            HeaderValue::from_static(DEFAULT_CONTENT_TYPE)
        });

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, content_type);

        let part = Part::bytes(self.bytes)
            .file_name(self.file_name)
            .headers(headers);

        Form::new().part(FILE_FIELD, part)
    }
}

/// A client for the categorization service at a fixed base URL.
///
/// Cloning is cheap, the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a client that sends requests to `base_url`, e.g. "http://localhost:5000".
    pub fn new(base_url: Url) -> Self {
        Self {
            http: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Categorize a single transaction description.
    pub async fn categorize(&self, description: &str) -> Result<CategorizationResult, ApiError> {
        let response = self
            .http
            .post(self.url(CATEGORIZE_PATH)?)
            .json(&CategorizeRequest { description })
            .send()
            .await
            .map_err(ApiError::Transport)?;

        parse_response(response).await
    }

    /// Categorize multiple transaction descriptions in one request.
    pub async fn batch_categorize(
        &self,
        descriptions: &[String],
    ) -> Result<BatchCategorization, ApiError> {
        let response = self
            .http
            .post(self.url(BATCH_CATEGORIZE_PATH)?)
            .json(&BatchCategorizeRequest { descriptions })
            .send()
            .await
            .map_err(ApiError::Transport)?;

        parse_response(response).await
    }

    /// Upload a CSV file for the service to import and categorize.
    pub async fn import_csv(&self, file: UploadFile) -> Result<ImportSummary, ApiError> {
        let response = self
            .http
            .post(self.url(IMPORT_PATH)?)
            .multipart(file.into_form())
            .send()
            .await
            .map_err(ApiError::Transport)?;

        parse_response(response).await
    }

    /// Upload a receipt image to extract and categorize the purchase.
    pub async fn ocr_categorize(&self, file: UploadFile) -> Result<ReceiptCategorization, ApiError> {
        let response = self
            .http
            .post(self.url(OCR_CATEGORIZE_PATH)?)
            .multipart(file.into_form())
            .send()
            .await
            .map_err(ApiError::Transport)?;

        parse_response(response).await
    }

    /// Tell the service that `transaction_id` should have been `correct_category`.
    pub async fn record_correction(
        &self,
        transaction_id: TransactionId,
        correct_category: Category,
    ) -> Result<CorrectionAck, ApiError> {
        let response = self
            .http
            .post(self.url(CORRECT_PATH)?)
            .json(&CorrectionRequest {
                transaction_id,
                correct_category,
            })
            .send()
            .await
            .map_err(ApiError::Transport)?;

        parse_response(response).await
    }

    fn url(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|_| ApiError::InvalidUrl(path.to_owned()))
    }
}

async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();

    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unable to read response body".to_owned());
        tracing::debug!("categorization service responded with {status}: {body}");

        return Err(ApiError::Status { status, body });
    }

    response.json::<T>().await.map_err(ApiError::Decode)
}
