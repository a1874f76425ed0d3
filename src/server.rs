//! HTTP server wiring.
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | `GET`  | `/` | [`handlers::home`] |
//! | `POST` | `/search` | [`handlers::search`] |
//! | `GET`  | `/embed/{id}` | [`handlers::embed`] |

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::routing::{get, post};
use rusqlite::Connection;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::Result;
use crate::handlers;
use crate::views::Views;
use crate::youtube::YouTubeConfig;

/// State shared by every handler
#[derive(Clone)]
pub struct AppState {
    /// Credential and endpoint for the YouTube Data API
    pub youtube: YouTubeConfig,
    pub views: Arc<Views>,
    /// Opened at startup so schema problems fail fast; no route queries it.
    pub db: Arc<Mutex<Connection>>,
}

impl AppState {
    pub fn new(youtube: YouTubeConfig, views: Views, db: Connection) -> Self {
        Self {
            youtube,
            views: Arc::new(views),
            db: Arc::new(Mutex::new(db)),
        }
    }
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home::run))
        .route("/search", post(handlers::search::run))
        .route("/embed/{id}", get(handlers::embed::run))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind to `bind_addr` and serve until the process is stopped
pub async fn run_server(bind_addr: &str, state: AppState) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(state)).await?;
    Ok(())
}
