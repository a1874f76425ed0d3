use axum::Form;
use axum::extract::State;
use axum::extract::rejection::FormRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use tracing::{debug, info};

use super::render;
use crate::server::AppState;
use crate::youtube::search_youtube;

/// Body of `POST /search`
#[derive(Debug, Default, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub query: String,
}

/// `POST /search` — look the query up on YouTube and list the matches.
///
/// A missing or unreadable form body counts as an empty query.
pub async fn run(
    State(state): State<AppState>,
    form: Result<Form<SearchForm>, FormRejection>,
) -> Response {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            debug!(%rejection, "Search form unreadable, using an empty query");
            SearchForm::default()
        }
    };

    let videos = search_youtube(&state.youtube, &form.query).await;

    if videos.is_empty() {
        return (StatusCode::NOT_FOUND, "No videos found.").into_response();
    }

    info!(query = %form.query, count = videos.len(), "Rendering search results");
    render(state.views.results(&videos))
}
