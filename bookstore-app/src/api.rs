use async_trait::async_trait;
use thiserror::Error;

use bookstore_boundary as boundary;
use bookstore_entities::{
    user::{Login, UserData},
    wish_list::WishList,
};

type Result<T> = std::result::Result<T, ApiError>;

/// The REST API of the book store.
#[async_trait(?Send)]
pub trait Api {
    async fn login(&self, login: &Login) -> Result<UserData>;
    /// Number of books on all wish lists.
    async fn wish_list_count(&self) -> Result<usize>;
    async fn wish_list(&self, token: &str) -> Result<WishList>;
    async fn save_wish_list(&self, token: &str, wish_list: &WishList) -> Result<WishList>;
    /// Time of the last server side reset of all wish lists.
    async fn reset_time(&self, token: &str) -> Result<String>;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{0}")]
    Fetch(String),
    #[error("{message}")]
    Api { http_status: u16, message: String },
}

impl From<boundary::Error> for ApiError {
    fn from(from: boundary::Error) -> Self {
        let boundary::Error {
            http_status,
            message,
        } = from;
        Self::Api {
            http_status,
            message,
        }
    }
}
