use std::{marker::PhantomData, path::PathBuf};

use et_core::{CoreError, RecordRepository};
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::{BlobStore, FileBlobStore};

/// Stores a whole collection of `T` as one JSON array in a named blob.
pub struct JsonRepository<T, B = FileBlobStore> {
    store: B,
    name: String,
    _records: PhantomData<fn() -> T>,
}

impl<T> JsonRepository<T, FileBlobStore> {
    /// Repository over `root/name` on the local filesystem.
    pub fn open(root: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self::new(FileBlobStore::new(root), name)
    }

    pub fn path(&self) -> PathBuf {
        self.store.path_of(&self.name)
    }
}

impl<T, B> JsonRepository<T, B> {
    pub fn new(store: B, name: impl Into<String>) -> Self {
        Self {
            store,
            name: name.into(),
            _records: PhantomData,
        }
    }
}

impl<T, B> RecordRepository<T> for JsonRepository<T, B>
where
    T: Serialize + DeserializeOwned,
    B: BlobStore,
{
    /// Blank content and a JSON `null` both decode as an empty collection.
    fn load_all(&self) -> Result<Vec<T>, CoreError> {
        let data = self.store.read(&self.name)?;
        if data.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }
        let items: Option<Vec<T>> = serde_json::from_slice(&data)
            .map_err(|err| CoreError::Decode(format!("{}: {}", self.name, err)))?;
        let items = items.unwrap_or_default();
        debug!(resource = %self.name, count = items.len(), "records decoded");
        Ok(items)
    }

    fn save_all(&self, items: &[T]) -> Result<(), CoreError> {
        let data = serde_json::to_vec_pretty(items)
            .map_err(|err| CoreError::Encode(format!("{}: {}", self.name, err)))?;
        self.store.write(&self.name, &data)?;
        debug!(resource = %self.name, count = items.len(), "records encoded");
        Ok(())
    }
}
