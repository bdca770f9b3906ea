use gloo_net::http::Request;
use web_sys::RequestCredentials;

use bookstore_boundary::{Login, UserData};

use crate::{into_json, Result, UserApi};

/// Public book store API
#[derive(Clone)]
pub struct PublicApi {
    url: String,
}

impl PublicApi {
    #[must_use]
    pub const fn new(url: String) -> Self {
        Self { url }
    }

    pub async fn login(&self, login: &Login) -> Result<UserData> {
        let url = format!("{}/users/login", self.url);
        let response = Request::post(&url)
            .credentials(RequestCredentials::Include)
            .json(login)?
            .send()
            .await?;
        into_json(response).await
    }

    /// Number of books on all wish lists.
    pub async fn wish_list_count(&self) -> Result<usize> {
        let url = format!("{}/wishlist/count", self.url);
        let response = Request::get(&url).send().await?;
        into_json(response).await
    }

    #[must_use]
    pub fn user_api(&self, token: String) -> UserApi {
        UserApi::new(self.url.clone(), token)
    }
}
