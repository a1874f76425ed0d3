//! Route handlers, one module per page.

pub mod embed;
pub mod home;
pub mod search;

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use tracing::error;

use crate::error::Result;

/// Turn a rendered page into a response, or a plain-text 500 if rendering failed
fn render(page: Result<String>) -> Response {
    match page {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to render page");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error.").into_response()
        }
    }
}
