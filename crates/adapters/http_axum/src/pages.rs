//! Static HTML pages served outside the API.
//!
//! The pages are opaque files read from disk on every request and returned
//! verbatim, so they can be edited without restarting the server.

use std::path::PathBuf;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use shelf_app::ports::ItemStore;

use crate::error::ApiError;
use crate::state::AppState;

/// File served for `/` and `/index.html`.
pub const INDEX_PAGE: &str = "index.html";
/// File served for any other `*.html` path.
pub const NOT_FOUND_PAGE: &str = "404.html";

/// Directory holding the static pages.
#[derive(Debug, Clone)]
pub struct StaticPages {
    dir: PathBuf,
}

impl StaticPages {
    /// Serve pages from `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Read `name` from the page directory and answer with `status`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::StaticPage`] when the file cannot be read.
    pub async fn render(&self, name: &str, status: StatusCode) -> Result<Response, ApiError> {
        let path = self.dir.join(name);
        match tokio::fs::read_to_string(&path).await {
            Ok(content) => Ok((status, Html(content)).into_response()),
            Err(err) => {
                tracing::error!(path = %path.display(), error = %err, "failed to read static page");
                Err(ApiError::StaticPage)
            }
        }
    }
}

/// `/` and `/index.html`
pub async fn index<S>(State(state): State<AppState<S>>) -> Result<Response, ApiError>
where
    S: ItemStore + Send + Sync + 'static,
{
    state.pages.render(INDEX_PAGE, StatusCode::OK).await
}

/// Any other `*.html` path.
pub async fn not_found<S>(state: &AppState<S>) -> Result<Response, ApiError>
where
    S: ItemStore + Send + Sync + 'static,
{
    state.pages.render(NOT_FOUND_PAGE, StatusCode::NOT_FOUND).await
}
