#![allow(missing_docs)]

pub(crate) mod fake_service;
pub(crate) mod form;
pub(crate) mod html;
pub(crate) mod http;
pub(crate) mod multipart;
pub(crate) mod store;

pub(crate) use fake_service::{FakeService, RecordedRequest, closed_port_client};
pub(crate) use form::{assert_form_input, assert_form_submit_button, assert_hx_endpoint, must_get_form};
pub(crate) use html::{
    assert_valid_html, must_select, parse_html_document, parse_html_fragment, select_text,
};
pub(crate) use http::{assert_content_type, assert_hx_redirect};
pub(crate) use multipart::{must_make_multipart, must_make_multipart_text};
pub(crate) use store::{test_store, test_transaction};
