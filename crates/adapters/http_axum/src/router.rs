//! Axum router assembly.

use std::any::Any;

use axum::Router;
use axum::extract::{OriginalUri, Request, State};
use axum::http::Method;
use axum::http::header::ACCESS_CONTROL_ALLOW_ORIGIN;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::normalize_path::NormalizePath;
use tower_http::trace::TraceLayer;

use shelf_app::ports::ItemStore;

use crate::api::ITEMS_PATH_PREFIX;
use crate::error::ApiError;
use crate::state::AppState;

/// The complete HTTP application: the router behind trailing-slash
/// normalization.
pub type App = NormalizePath<Router>;

/// Build the HTTP application.
///
/// Serves the landing page at `/` and `/index.html`, answers every other
/// `*.html` path with the not-found page (ahead of the API routes), nests
/// API routes under `/api`, and answers everything else from [`fallback`].
/// Trailing slashes are trimmed before routing, so `/api/items/` is the
/// collection and `/api/items/{id}/` the item.
/// A [`CatchPanicLayer`] turns handler panics into a 500 envelope, and a
/// [`TraceLayer`] logs each HTTP request/response at the `DEBUG` level using
/// the `tracing` ecosystem.
pub fn build<S>(state: AppState<S>) -> App
where
    S: ItemStore + Send + Sync + 'static,
{
    let router = Router::new()
        .route("/", any(crate::pages::index::<S>))
        .route("/index.html", any(crate::pages::index::<S>))
        .nest("/api", crate::api::routes())
        .fallback(fallback)
        .layer(middleware::from_fn_with_state(state.clone(), html_pages::<S>))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    NormalizePath::trim_trailing_slash(router)
}

/// Answer `*.html` paths other than the landing page with the not-found
/// page, whatever route they would otherwise reach.
async fn html_pages<S>(
    State(state): State<AppState<S>>,
    request: Request,
    next: Next,
) -> Response
where
    S: ItemStore + Send + Sync + 'static,
{
    let path = request.uri().path();
    if path.ends_with(".html") && path != "/index.html" {
        return crate::pages::not_found(&state).await.into_response();
    }
    next.run(request).await
}

/// Answer requests no route matched.
///
/// - Paths under the items prefix are a known resource: preflight is
///   honoured and every other method is refused with 405.
/// - Anything else is a JSON 404.
async fn fallback(method: Method, OriginalUri(uri): OriginalUri) -> Response {
    if uri.path().starts_with(ITEMS_PATH_PREFIX) {
        if method == Method::OPTIONS {
            return crate::api::items::preflight().await;
        }
        return (
            [(ACCESS_CONTROL_ALLOW_ORIGIN, "*")],
            ApiError::MethodNotAllowed,
        )
            .into_response();
    }

    ApiError::RouteNotFound.into_response()
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<&str>()
        .map(ToString::to_string)
        .or_else(|| err.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string());
    tracing::error!(panic = %detail, "request handler panicked");
    ApiError::Internal.into_response()
}
