//! In-process item store backed by a `Vec` behind a mutex.

use std::future::Future;
use std::sync::{Mutex, PoisonError};

use shelf_domain::error::ShelfError;
use shelf_domain::item::Item;

use crate::ports::ItemStore;

/// Volatile [`ItemStore`] that keeps the collection in memory.
///
/// Useful for tests and for running the service without a data file.
/// Contents are lost when the process exits.
#[derive(Default)]
pub struct InMemoryItemStore {
    items: Mutex<Vec<Item>>,
}

impl InMemoryItemStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with `items`.
    #[must_use]
    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            items: Mutex::new(items),
        }
    }
}

impl ItemStore for InMemoryItemStore {
    fn read_all(&self) -> impl Future<Output = Result<Vec<Item>, ShelfError>> + Send {
        let items = self
            .items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        async { Ok(items) }
    }

    fn write_all(&self, items: &[Item]) -> impl Future<Output = Result<(), ShelfError>> + Send {
        *self.items.lock().unwrap_or_else(PoisonError::into_inner) = items.to_vec();
        async { Ok(()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelf_domain::item::{NewItem, Size};

    fn item(name: &str) -> Item {
        Item::create(NewItem {
            name: name.to_string(),
            price: serde_json::Number::from(1),
            size: Size::M,
        })
    }

    #[tokio::test]
    async fn should_start_empty() {
        let store = InMemoryItemStore::new();
        assert!(store.read_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_return_what_was_written_in_order() {
        let store = InMemoryItemStore::new();
        let items = vec![item("a"), item("b"), item("c")];

        store.write_all(&items).await.unwrap();

        assert_eq!(store.read_all().await.unwrap(), items);
    }

    #[tokio::test]
    async fn should_keep_collection_unchanged_when_rewriting_what_was_read() {
        let store = InMemoryItemStore::with_items(vec![item("a"), item("b")]);
        let before = store.read_all().await.unwrap();

        store.write_all(&before).await.unwrap();

        assert_eq!(store.read_all().await.unwrap(), before);
    }
}
