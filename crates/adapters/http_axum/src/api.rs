//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod items;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::HeaderValue;
use axum::http::header::ACCESS_CONTROL_ALLOW_ORIGIN;
use axum::routing::get;
use tower_http::set_header::SetResponseHeaderLayer;

use shelf_app::ports::ItemStore;

use crate::payload::MAX_BODY_BYTES;
use crate::state::AppState;

/// Every path starting with this prefix belongs to the items resource,
/// including paths no route matches.
pub const ITEMS_PATH_PREFIX: &str = "/api/items";

/// Build the `/api` sub-router.
///
/// Every response from these routes allows any origin; unknown methods on a
/// known path answer 405 in the JSON envelope. `HEAD` is refused explicitly
/// since axum would otherwise answer it from the `GET` handler.
pub fn routes<S>() -> Router<AppState<S>>
where
    S: ItemStore + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/items",
            get(items::list::<S>)
                .post(items::create::<S>)
                .options(items::preflight)
                .head(items::method_not_allowed)
                .fallback(items::method_not_allowed),
        )
        .route(
            "/items/{id}",
            get(items::get::<S>)
                .put(items::update::<S>)
                .delete(items::delete::<S>)
                .options(items::preflight)
                .head(items::method_not_allowed)
                .fallback(items::method_not_allowed),
        )
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(SetResponseHeaderLayer::if_not_present(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
}
