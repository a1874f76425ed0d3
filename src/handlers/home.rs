use axum::extract::State;
use axum::response::Response;

use super::render;
use crate::server::AppState;

/// `GET /` — the empty search form
pub async fn run(State(state): State<AppState>) -> Response {
    render(state.views.home())
}
