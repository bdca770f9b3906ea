use gloo_net::http::{Request, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};
use web_sys::RequestCredentials;

use bookstore_boundary::{WishList, WishListResetDetails};

use crate::{into_json, Result};

/// Authorized book store API
#[derive(Clone)]
pub struct UserApi {
    url: String,
    token: String,
}

impl UserApi {
    #[must_use]
    pub const fn new(url: String, token: String) -> Self {
        Self { url, token }
    }
    fn auth_header_value(&self) -> String {
        format!("Bearer {}", self.token)
    }
    async fn send<T>(&self, req: RequestBuilder) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = self
            .add_auth_headers(req)
            .header("Content-Type", "application/json")
            .send()
            .await?;
        into_json(response).await
    }
    async fn send_json<D, T>(&self, req: RequestBuilder, data: &D) -> Result<T>
    where
        T: DeserializeOwned,
        D: Serialize,
    {
        let response = self.add_auth_headers(req).json(data)?.send().await?;
        into_json(response).await
    }
    fn add_auth_headers(&self, req: RequestBuilder) -> RequestBuilder {
        req.header("Authorization", &self.auth_header_value())
            .credentials(RequestCredentials::Include)
    }
    pub async fn wish_list(&self) -> Result<WishList> {
        let url = format!("{}/wishlist", self.url);
        self.send(Request::get(&url)).await
    }
    /// Replaces the wish list and returns the stored one.
    pub async fn save_wish_list(&self, wish_list: &WishList) -> Result<WishList> {
        let url = format!("{}/wishlist", self.url);
        self.send_json(Request::post(&url), wish_list).await
    }
    pub async fn reset_time(&self) -> Result<WishListResetDetails> {
        let url = format!("{}/wishlist/reset-time", self.url);
        self.send(Request::get(&url)).await
    }
}
