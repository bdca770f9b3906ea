//! Browser client of the book store REST API.

use gloo_net::http::Response;
use serde::de::DeserializeOwned;
use thiserror::Error;

mod public;
mod user;

pub use self::{public::*, user::*};

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    #[error("{0}")]
    Fetch(String),

    #[error(transparent)]
    Api(#[from] bookstore_boundary::Error),
}

impl From<gloo_net::Error> for Error {
    fn from(err: gloo_net::Error) -> Self {
        Self::Fetch(format!("{err}"))
    }
}

pub async fn into_json<T>(response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    // ensure we've got 2xx status
    if response.ok() {
        Ok(response.json().await?)
    } else {
        Err(response.json::<bookstore_boundary::Error>().await?.into())
    }
}
