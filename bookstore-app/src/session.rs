use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

use bookstore_boundary as boundary;
use bookstore_entities::user::UserData;

/// Key of the session record.
pub const USER_STORAGE_KEY: &str = "user";

/// A persistent key-value store.
pub trait Storage {
    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<T, StorageError>;
    fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError>;
    fn delete(&self, key: &str) -> Result<(), StorageError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("Key {0} not found")]
    NotFound(String),
    #[error("Unable to (de)serialize value: {0}")]
    Serde(String),
    #[error("Storage not accessible: {0}")]
    Access(String),
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

/// Loads the session of the last logged in user.
///
/// Failures are treated as if nobody was logged in.
pub fn load_user<S: Storage>(storage: &S) -> Option<UserData> {
    match storage.load::<boundary::UserData>(USER_STORAGE_KEY) {
        Ok(user) => Some(user.into()),
        Err(StorageError::NotFound(_)) => None,
        Err(err) => {
            log::warn!("Unable to load user: {err}");
            None
        }
    }
}

pub fn save_user<S: Storage>(storage: &S, user: &UserData) -> Result<(), StorageError> {
    log::debug!("Save user {} in storage", user.user_name);
    let user = boundary::UserData::from(user.clone());
    storage.save(USER_STORAGE_KEY, &user)
}

pub fn delete_user<S: Storage>(storage: &S) -> Result<(), StorageError> {
    log::debug!("Delete user from storage");
    storage.delete(USER_STORAGE_KEY)
}

#[cfg(test)]
pub mod tests {
    use std::{cell::RefCell, collections::HashMap};

    use super::*;

    /// In-memory storage that keeps values as JSON.
    #[derive(Debug, Default)]
    pub struct MockStorage {
        pub values: RefCell<HashMap<String, String>>,
        pub read_only: bool,
    }

    impl MockStorage {
        pub fn with_user(user: &UserData) -> Self {
            let storage = Self::default();
            save_user(&storage, user).unwrap();
            storage
        }
        pub fn read_only(self) -> Self {
            Self {
                read_only: true,
                ..self
            }
        }
    }

    impl Storage for MockStorage {
        fn load<T: DeserializeOwned>(&self, key: &str) -> Result<T, StorageError> {
            let values = self.values.borrow();
            let json = values
                .get(key)
                .ok_or_else(|| StorageError::NotFound(key.to_string()))?;
            Ok(serde_json::from_str(json)?)
        }
        fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
            if self.read_only {
                return Err(StorageError::Access("read only".into()));
            }
            let json = serde_json::to_string(value)?;
            self.values.borrow_mut().insert(key.to_string(), json);
            Ok(())
        }
        fn delete(&self, key: &str) -> Result<(), StorageError> {
            if self.read_only {
                return Err(StorageError::Access("read only".into()));
            }
            self.values.borrow_mut().remove(key);
            Ok(())
        }
    }

    fn user() -> UserData {
        UserData {
            user_name: "test".into(),
            token: "secret-token".into(),
        }
    }

    #[test]
    fn save_load_and_delete_user() {
        let storage = MockStorage::default();
        assert_eq!(load_user(&storage), None);
        save_user(&storage, &user()).unwrap();
        assert_eq!(load_user(&storage), Some(user()));
        delete_user(&storage).unwrap();
        assert_eq!(load_user(&storage), None);
    }

    #[test]
    fn corrupt_record_is_no_user() {
        let storage = MockStorage::default();
        storage
            .values
            .borrow_mut()
            .insert(USER_STORAGE_KEY.into(), "{ no json".into());
        assert_eq!(load_user(&storage), None);
    }

    #[test]
    fn write_failures_are_reported() {
        let storage = MockStorage::with_user(&user()).read_only();
        assert!(matches!(
            save_user(&storage, &user()),
            Err(StorageError::Access(_))
        ));
        assert!(delete_user(&storage).is_err());
        assert_eq!(load_user(&storage), Some(user()));
    }
}
