use axum::extract::{Path, State};
use axum::response::Response;

use super::render;
use crate::server::AppState;

const EMBED_URL_PREFIX: &str = "https://www.youtube.com/embed/";

/// Build the player URL for a video id. The id is not validated.
pub fn embed_url(video_id: &str) -> String {
    format!("{}{}", EMBED_URL_PREFIX, video_id)
}

/// `GET /embed/{id}` — embedded player for one video
pub async fn run(State(state): State<AppState>, Path(video_id): Path<String>) -> Response {
    render(state.views.embed(&embed_url(&video_id)))
}
