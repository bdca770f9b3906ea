use jfs::Store;
use serde::{de::DeserializeOwned, Serialize};
use std::{
    fs,
    io::{self, ErrorKind},
    path::Path,
};

use bookstore_app::{Storage, StorageError};

/// Keeps every value in a JSON file of its own.
pub struct JsonFileStorage {
    json_store: Store,
}

impl JsonFileStorage {
    pub fn try_new<P: AsRef<Path>>(directory: P) -> io::Result<Self> {
        fs::create_dir_all(&directory)?;
        let json_store = Store::new(directory)?;
        Ok(Self { json_store })
    }
    pub fn path(&self) -> &Path {
        self.json_store.path()
    }
}

impl Storage for JsonFileStorage {
    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<T, StorageError> {
        self.json_store
            .get(key)
            .map_err(|err| storage_error(key, &err))
    }
    fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let value = serde_json::to_value(value)?;
        self.json_store
            .save_with_id(&value, key)
            .map(|_| ())
            .map_err(|err| storage_error(key, &err))
    }
    fn delete(&self, key: &str) -> Result<(), StorageError> {
        match self.json_store.delete(key) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log::debug!("Nothing to delete: {key} does not exist");
                Ok(())
            }
            Err(err) => Err(storage_error(key, &err)),
        }
    }
}

fn storage_error(key: &str, err: &io::Error) -> StorageError {
    match err.kind() {
        ErrorKind::NotFound => StorageError::NotFound(key.to_string()),
        ErrorKind::InvalidData => StorageError::Serde(err.to_string()),
        _ => StorageError::Access(err.to_string()),
    }
}
