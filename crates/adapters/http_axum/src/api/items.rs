//! JSON REST handlers for items.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
};
use axum::response::{IntoResponse, Response};

use shelf_app::ports::ItemStore;
use shelf_domain::id::ItemId;
use shelf_domain::item::{Item, ItemChanges, NewItem};

use crate::envelope::Envelope;
use crate::error::ApiError;
use crate::payload::JsonPayload;
use crate::state::AppState;

/// Methods advertised to CORS preflight requests.
pub const ALLOWED_METHODS: &str = "GET,POST,PUT,DELETE,OPTIONS";
/// Request headers advertised to CORS preflight requests.
pub const ALLOWED_HEADERS: &str = "Content-Type";

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Vec<Item>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(items) => Envelope::Success(items).with_status(StatusCode::OK),
        }
    }
}

/// Possible responses from the get, update and delete endpoints.
pub enum ItemResponse {
    Ok(Item),
}

impl IntoResponse for ItemResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(item) => Envelope::Success(item).with_status(StatusCode::OK),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Item),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(item) => Envelope::Success(item).with_status(StatusCode::CREATED),
        }
    }
}

/// `GET /api/items`
pub async fn list<S>(State(state): State<AppState<S>>) -> Result<ListResponse, ApiError>
where
    S: ItemStore + Send + Sync + 'static,
{
    let items = state.item_service.list_items().await?;
    Ok(ListResponse::Ok(items))
}

/// `POST /api/items`
pub async fn create<S>(
    State(state): State<AppState<S>>,
    payload: JsonPayload,
) -> Result<CreateResponse, ApiError>
where
    S: ItemStore + Send + Sync + 'static,
{
    let new = NewItem::try_from(payload.value())?;
    let created = state.item_service.create_item(new).await?;
    Ok(CreateResponse::Created(created))
}

/// `GET /api/items/{id}`
pub async fn get<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<ItemResponse, ApiError>
where
    S: ItemStore + Send + Sync + 'static,
{
    let item = state.item_service.get_item(&ItemId::from(id.as_str())).await?;
    Ok(ItemResponse::Ok(item))
}

/// `PUT /api/items/{id}`
///
/// The payload is validated before the id is looked up, so an invalid body
/// answers 400 even for an unknown id.
pub async fn update<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    payload: JsonPayload,
) -> Result<ItemResponse, ApiError>
where
    S: ItemStore + Send + Sync + 'static,
{
    let changes = ItemChanges::try_from(payload.value())?;
    let updated = state
        .item_service
        .update_item(&ItemId::from(id.as_str()), changes)
        .await?;
    Ok(ItemResponse::Ok(updated))
}

/// `DELETE /api/items/{id}`
pub async fn delete<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<ItemResponse, ApiError>
where
    S: ItemStore + Send + Sync + 'static,
{
    let removed = state
        .item_service
        .delete_item(&ItemId::from(id.as_str()))
        .await?;
    Ok(ItemResponse::Ok(removed))
}

/// `OPTIONS /api/items*`
pub async fn preflight() -> Response {
    (
        StatusCode::NO_CONTENT,
        [
            (ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (ACCESS_CONTROL_ALLOW_METHODS, ALLOWED_METHODS),
            (ACCESS_CONTROL_ALLOW_HEADERS, ALLOWED_HEADERS),
        ],
    )
        .into_response()
}

/// Any other method on an items path.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
