//! Browser implementations of the collaborators of the runtime.

use async_trait::async_trait;
use gloo_storage::{errors::StorageError as GlooStorageError, Storage as _};
use leptos::window;
use serde::{de::DeserializeOwned, Serialize};
use wasm_bindgen::JsValue;

use bookstore_app::{
    entities::{
        user::{Login, UserData},
        wish_list::WishList,
    },
    Api, ApiError, Navigator, Storage, StorageError,
};
use bookstore_frontend_api as api;

/// The local storage of the browser.
pub struct LocalStorage;

impl Storage for LocalStorage {
    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<T, StorageError> {
        gloo_storage::LocalStorage::get(key).map_err(storage_error)
    }
    fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        gloo_storage::LocalStorage::set(key, value).map_err(storage_error)
    }
    fn delete(&self, key: &str) -> Result<(), StorageError> {
        gloo_storage::LocalStorage::delete(key);
        Ok(())
    }
}

fn storage_error(err: GlooStorageError) -> StorageError {
    match err {
        GlooStorageError::KeyNotFound(key) => StorageError::NotFound(key),
        GlooStorageError::SerdeError(err) => StorageError::Serde(err.to_string()),
        GlooStorageError::JsError(err) => StorageError::Access(err.to_string()),
    }
}

/// Keeps the page in the fragment of the URL.
pub struct HashNavigator;

impl HashNavigator {
    fn url(path: &str) -> String {
        format!("#{path}")
    }
}

impl Navigator for HashNavigator {
    fn push_url(&self, path: &str) {
        let result = window().history().and_then(|history| {
            history.push_state_with_url(&JsValue::NULL, "", Some(&Self::url(path)))
        });
        if let Err(err) = result {
            log::warn!("Unable to push {path} to the history: {err:?}");
        }
    }
    fn replace_url(&self, path: &str) {
        let result = window().history().and_then(|history| {
            history.replace_state_with_url(&JsValue::NULL, "", Some(&Self::url(path)))
        });
        if let Err(err) = result {
            log::warn!("Unable to replace {path} in the history: {err:?}");
        }
    }
}

/// The REST API reached with `fetch`.
pub struct HttpApi {
    public: api::PublicApi,
}

impl HttpApi {
    pub const fn new(url: String) -> Self {
        Self {
            public: api::PublicApi::new(url),
        }
    }
}

#[async_trait(?Send)]
impl Api for HttpApi {
    async fn login(&self, login: &Login) -> Result<UserData, ApiError> {
        let user = self
            .public
            .login(&login.clone().into())
            .await
            .map_err(api_error)?;
        Ok(user.into())
    }
    async fn wish_list_count(&self) -> Result<usize, ApiError> {
        self.public.wish_list_count().await.map_err(api_error)
    }
    async fn wish_list(&self, token: &str) -> Result<WishList, ApiError> {
        let wish_list = self
            .public
            .user_api(token.to_string())
            .wish_list()
            .await
            .map_err(api_error)?;
        Ok(wish_list.into())
    }
    async fn save_wish_list(&self, token: &str, wish_list: &WishList) -> Result<WishList, ApiError> {
        let wish_list = self
            .public
            .user_api(token.to_string())
            .save_wish_list(&wish_list.clone().into())
            .await
            .map_err(api_error)?;
        Ok(wish_list.into())
    }
    async fn reset_time(&self, token: &str) -> Result<String, ApiError> {
        let details = self
            .public
            .user_api(token.to_string())
            .reset_time()
            .await
            .map_err(api_error)?;
        Ok(details.time)
    }
}

fn api_error(err: api::Error) -> ApiError {
    match err {
        api::Error::Fetch(msg) => ApiError::Fetch(msg),
        api::Error::Api(err) => err.into(),
    }
}
