//! Reads files uploaded through multipart forms.

use axum::{
    extract::{
        Multipart,
        multipart::{Field, MultipartError},
    },
    http::StatusCode,
};

use crate::{Error, api_client::UploadFile};

/// The name of the form field that holds the uploaded file.
pub const FILE_FIELD: &str = "file";

/// The largest request body accepted by the upload routes, in bytes.
///
/// Phone photos of receipts are often several megabytes, well over axum's
/// default limit of 2 MB.
pub const MAX_UPLOAD_SIZE: usize = 20 * 1024 * 1024;

/// Get the first file in the `file` field of `multipart`.
///
/// Other fields are skipped.
///
/// # Errors
/// Returns [Error::MissingFile] if there is no non-empty `file` field,
/// [Error::FileTooLarge] if the request is over the route's body limit, or
/// [Error::MultipartError] if the form could not be read otherwise.
pub async fn read_upload(mut multipart: Multipart) -> Result<UploadFile, Error> {
    loop {
        let field = multipart.next_field().await.map_err(|error| {
            tracing::error!("Could not read multipart form: {error}");
            multipart_error(error)
        })?;

        let Some(field) = field else {
            return Err(Error::MissingFile);
        };

        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file = parse_file_field(field).await?;

        if file.bytes.is_empty() {
            return Err(Error::MissingFile);
        }

        return Ok(file);
    }
}

async fn parse_file_field(field: Field<'_>) -> Result<UploadFile, Error> {
    let file_name = field.file_name().unwrap_or_default().to_owned();
    let content_type = field
        .content_type()
        .unwrap_or("application/octet-stream")
        .to_owned();

    let bytes = field.bytes().await.map_err(|error| {
        tracing::error!("Could not read data from multipart form field: {error}");
        multipart_error(error)
    })?;

    Ok(UploadFile {
        file_name,
        content_type,
        bytes: bytes.to_vec(),
    })
}

fn multipart_error(error: MultipartError) -> Error {
    if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
        Error::FileTooLarge
    } else {
        Error::MultipartError(error.body_text())
    }
}
