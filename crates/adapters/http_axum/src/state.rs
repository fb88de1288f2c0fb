//! Shared application state for axum handlers.

use std::sync::Arc;

use shelf_app::ports::ItemStore;
use shelf_app::services::item_service::ItemService;

use crate::pages::StaticPages;

/// Application state shared across all axum handlers.
///
/// Generic over the item store to avoid dynamic dispatch.
/// `Clone` is implemented manually so the store itself does not need to be
/// `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<S> {
    /// Item CRUD service.
    pub item_service: Arc<ItemService<S>>,
    /// Static HTML pages served outside the API.
    pub pages: Arc<StaticPages>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            item_service: Arc::clone(&self.item_service),
            pages: Arc::clone(&self.pages),
        }
    }
}

impl<S> AppState<S>
where
    S: ItemStore + Send + Sync + 'static,
{
    /// Create a new application state from a service and the page directory.
    pub fn new(item_service: ItemService<S>, pages: StaticPages) -> Self {
        Self {
            item_service: Arc::new(item_service),
            pages: Arc::new(pages),
        }
    }
}
