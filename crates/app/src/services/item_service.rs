//! Item service — use-cases for managing the item collection.

use tokio::sync::Mutex;

use shelf_domain::error::{NotFoundError, ShelfError};
use shelf_domain::id::ItemId;
use shelf_domain::item::{Item, ItemChanges, NewItem};

use crate::ports::ItemStore;

/// Application service for item CRUD operations.
///
/// Every operation loads the whole collection from the store. Mutations are
/// read-modify-write cycles over that collection, serialized through an
/// internal lock so two requests in the same process never overwrite each
/// other's changes. Writers in *other* processes are not coordinated.
pub struct ItemService<S> {
    store: S,
    write_lock: Mutex<()>,
}

impl<S: ItemStore> ItemService<S> {
    /// Create a new service backed by the given store.
    pub fn new(store: S) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// List every item in insertion order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    pub async fn list_items(&self) -> Result<Vec<Item>, ShelfError> {
        self.store.read_all().await
    }

    /// Look up an item by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`ShelfError::NotFound`] when no item with `id` exists,
    /// or a storage error from the store.
    pub async fn get_item(&self, id: &ItemId) -> Result<Item, ShelfError> {
        self.store
            .read_all()
            .await?
            .into_iter()
            .find(|item| &item.id == id)
            .ok_or_else(|| not_found(id))
    }

    /// Create a new item with a generated id and append it to the collection.
    ///
    /// # Errors
    ///
    /// Returns [`ShelfError::Validation`] if invariants fail, or a
    /// storage error propagated from the store.
    pub async fn create_item(&self, new: NewItem) -> Result<Item, ShelfError> {
        let item = Item::create(new);
        item.validate()?;

        let _guard = self.write_lock.lock().await;
        let mut items = self.store.read_all().await?;
        items.push(item.clone());
        self.store.write_all(&items).await?;

        tracing::debug!(id = %item.id, "item created");
        Ok(item)
    }

    /// Overwrite the fields present in `changes` on the item with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ShelfError::NotFound`] when no item with `id` exists,
    /// or a storage error from the store.
    pub async fn update_item(&self, id: &ItemId, changes: ItemChanges) -> Result<Item, ShelfError> {
        let _guard = self.write_lock.lock().await;
        let mut items = self.store.read_all().await?;
        let item = items
            .iter_mut()
            .find(|item| &item.id == id)
            .ok_or_else(|| not_found(id))?;

        item.apply(changes);
        let updated = item.clone();
        self.store.write_all(&items).await?;

        tracing::debug!(id = %updated.id, "item updated");
        Ok(updated)
    }

    /// Remove the item with `id` and return it.
    ///
    /// # Errors
    ///
    /// Returns [`ShelfError::NotFound`] when no item with `id` exists,
    /// or a storage error from the store.
    pub async fn delete_item(&self, id: &ItemId) -> Result<Item, ShelfError> {
        let _guard = self.write_lock.lock().await;
        let mut items = self.store.read_all().await?;
        let index = items
            .iter()
            .position(|item| &item.id == id)
            .ok_or_else(|| not_found(id))?;

        let removed = items.remove(index);
        self.store.write_all(&items).await?;

        tracing::debug!(id = %removed.id, "item deleted");
        Ok(removed)
    }
}

fn not_found(id: &ItemId) -> ShelfError {
    NotFoundError {
        entity: "Item",
        id: id.to_string(),
    }
    .into()
}
