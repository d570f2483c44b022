//! Alert system for displaying success and error messages to users.
//!
//! Alerts are rendered as HTML fragments that htmx swaps into the
//! `#alert-container` element of the page layout.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use maud::{Markup, html};

/// An alert message with success or error styling.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    Success { message: String, details: String },
    Error { message: String, details: String },
    ErrorSimple { message: String },
}

impl Alert {
    fn is_error(&self) -> bool {
        matches!(self, Alert::Error { .. } | Alert::ErrorSimple { .. })
    }

    pub fn into_html(self) -> Html<String> {
        Html(self.into_markup().into_string())
    }

    pub fn into_markup(self) -> Markup {
        let container_style = if self.is_error() {
            "bg-red-500/20 border border-red-500/50 rounded-lg p-4 text-red-400"
        } else {
            "bg-green-500/20 border border-green-500/50 rounded-lg p-4 text-green-400"
        };

        let (message, details) = match self {
            Alert::Success { message, details } | Alert::Error { message, details } => {
                (message, Some(details))
            }
            Alert::ErrorSimple { message } => (message, None),
        };

        html! {
            div
                class=(container_style)
                role="alert"
            {
                p class="font-medium alert-message" { (message) }

                @if let Some(details) = details {
                    p class="text-sm mt-1 alert-details" { (details) }
                }
            }
        }
    }
}

impl IntoResponse for Alert {
    fn into_response(self) -> Response {
        let status = if self.is_error() {
            StatusCode::INTERNAL_SERVER_ERROR
        } else {
            StatusCode::OK
        };

        (status, self.into_html()).into_response()
    }
}
