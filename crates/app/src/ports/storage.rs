//! Storage port — whole-collection persistence for items.

use std::future::Future;

use shelf_domain::error::ShelfError;
use shelf_domain::item::Item;

/// Loads and saves the entire item collection as one unit.
///
/// There are no partial reads or writes: every call moves the whole
/// collection, in insertion order.
pub trait ItemStore {
    /// Return every stored item.
    ///
    /// Implementations create an empty collection on first access and
    /// replace an unreadable one with an empty collection instead of failing.
    fn read_all(&self) -> impl Future<Output = Result<Vec<Item>, ShelfError>> + Send;

    /// Replace the stored collection with `items`.
    fn write_all(&self, items: &[Item]) -> impl Future<Output = Result<(), ShelfError>> + Send;
}

impl<T: ItemStore + Send + Sync> ItemStore for std::sync::Arc<T> {
    fn read_all(&self) -> impl Future<Output = Result<Vec<Item>, ShelfError>> + Send {
        (**self).read_all()
    }

    fn write_all(&self, items: &[Item]) -> impl Future<Output = Result<(), ShelfError>> + Send {
        (**self).write_all(items)
    }
}
