//! Static page server.
//!
//! A single-route HTTP server that answers the root path with the contents
//! of a fixed local file. The page is reread from disk on every request.

use std::env;
use std::fs;
use std::path::PathBuf;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;

/// Port used when `PORT` is unset or unparsable.
pub const DEFAULT_PORT: u16 = 5000;

/// File served on the root path.
pub const PAGE_FILE: &str = "index.html";

/// Listening port from the `PORT` environment variable.
#[must_use]
pub fn port_from_env() -> u16 {
    parse_port(env::var("PORT").ok())
}

fn parse_port(raw: Option<String>) -> u16 {
    raw.and_then(|raw| raw.parse().ok()).unwrap_or(DEFAULT_PORT)
}

/// Router serving `page` on `/`. Every other path is a 404.
#[must_use]
pub fn router(page: PathBuf) -> Router {
    Router::new().route("/", get(serve_page)).with_state(page)
}

async fn serve_page(State(page): State<PathBuf>) -> Response {
    match fs::read_to_string(&page) {
        Ok(body) => Html(body).into_response(),
        Err(err) => {
            tracing::error!(page = %page.display(), %err, "failed to read page");
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
        }
    }
}
