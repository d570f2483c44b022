use axum::{
    extract::{FromRequest, Multipart},
    http::{Method, Request},
};

const BOUNDARY: &str = "MY_BOUNDARY123456789";

async fn must_build_multipart(part_lines: Vec<String>) -> Multipart {
    let mut lines = part_lines;
    lines.push(format!("--{BOUNDARY}--"));

    let data = lines.join("\r\n").into_bytes();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/")
        .header(
            "Content-Type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(data.into())
        .unwrap();

    Multipart::from_request(request, &()).await.unwrap()
}

/// Build a multipart form with a single file field.
pub(crate) async fn must_make_multipart(
    field_name: &str,
    file_name: &str,
    content_type: &str,
    contents: &str,
) -> Multipart {
    must_build_multipart(vec![
        format!("--{BOUNDARY}"),
        format!("Content-Disposition: form-data; name=\"{field_name}\"; filename=\"{file_name}\""),
        format!("Content-Type: {content_type}"),
        String::new(),
        contents.to_owned(),
    ])
    .await
}

/// Build a multipart form with a single text field.
pub(crate) async fn must_make_multipart_text(field_name: &str, value: &str) -> Multipart {
    must_build_multipart(vec![
        format!("--{BOUNDARY}"),
        format!("Content-Disposition: form-data; name=\"{field_name}\""),
        String::new(),
        value.to_owned(),
    ])
    .await
}
