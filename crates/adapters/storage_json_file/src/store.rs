//! JSON file implementation of [`ItemStore`].

use std::future::Future;
use std::path::{Path, PathBuf};

use shelf_app::ports::ItemStore;
use shelf_domain::error::ShelfError;
use shelf_domain::item::Item;

use crate::error::StorageError;

const EMPTY_COLLECTION: &[u8] = b"[]";

/// Configuration for the flat-file storage adapter.
pub struct Config {
    /// Location of the JSON document (e.g. `items.json`).
    pub path: PathBuf,
}

impl Config {
    /// Build a [`JsonFileItemStore`] from this configuration.
    ///
    /// Nothing touches the disk until the first read.
    #[must_use]
    pub fn build(self) -> JsonFileItemStore {
        JsonFileItemStore::new(self.path)
    }
}

/// Item store persisting the whole collection as one JSON array.
///
/// Writes overwrite the document in place. A crash mid-write can leave a
/// truncated file, which the next read resets to an empty collection.
pub struct JsonFileItemStore {
    path: PathBuf,
}

impl JsonFileItemStore {
    /// Create a store backed by the document at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing document.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

async fn ensure_file(path: &Path) -> Result<(), StorageError> {
    if tokio::fs::try_exists(path).await? {
        return Ok(());
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, EMPTY_COLLECTION).await?;
    tracing::info!(path = %path.display(), "created empty data file");
    Ok(())
}

async fn load(path: &Path) -> Result<Vec<Item>, StorageError> {
    ensure_file(path).await?;
    let raw = tokio::fs::read(path).await?;

    match serde_json::from_slice::<Vec<Item>>(&raw) {
        Ok(items) => Ok(items),
        Err(err) => {
            tracing::warn!(
                path = %path.display(),
                error = %err,
                "data file is not a valid item list, resetting to an empty collection"
            );
            tokio::fs::write(path, EMPTY_COLLECTION).await?;
            Ok(Vec::new())
        }
    }
}

impl ItemStore for JsonFileItemStore {
    fn read_all(&self) -> impl Future<Output = Result<Vec<Item>, ShelfError>> + Send {
        let path = self.path.clone();
        async move { Ok(load(&path).await?) }
    }

    fn write_all(&self, items: &[Item]) -> impl Future<Output = Result<(), ShelfError>> + Send {
        let path = self.path.clone();
        let encoded = serde_json::to_vec_pretty(items);
        async move {
            let encoded = encoded.map_err(StorageError::from)?;
            tokio::fs::write(&path, encoded)
                .await
                .map_err(StorageError::from)?;
            Ok(())
        }
    }
}
