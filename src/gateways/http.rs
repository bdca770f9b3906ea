use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use bookstore_app::{
    boundary,
    entities::{
        user::{Login, UserData},
        wish_list::WishList,
    },
    Api, ApiError,
};

type Result<T> = std::result::Result<T, ApiError>;

/// The REST API of the book store reached over HTTP.
pub struct HttpApi {
    client: Client,
    url: String,
}

impl HttpApi {
    #[must_use]
    pub fn new(url: String) -> Self {
        Self {
            client: Client::new(),
            url,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.url)
    }

    async fn send<T>(req: RequestBuilder) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = req.send().await.map_err(fetch_error)?;
        into_json(response).await
    }

    fn authorized(req: RequestBuilder, token: &str) -> RequestBuilder {
        req.bearer_auth(token)
    }
}

async fn into_json<T>(response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    // ensure we've got 2xx status
    if response.status().is_success() {
        response.json().await.map_err(fetch_error)
    } else {
        let status = response.status();
        match response.json::<boundary::Error>().await {
            Ok(err) => Err(err.into()),
            Err(_) => Err(ApiError::Api {
                http_status: status.as_u16(),
                message: status.canonical_reason().unwrap_or_default().to_string(),
            }),
        }
    }
}

fn fetch_error(err: reqwest::Error) -> ApiError {
    ApiError::Fetch(err.to_string())
}

#[async_trait(?Send)]
impl Api for HttpApi {
    async fn login(&self, login: &Login) -> Result<UserData> {
        let login = boundary::Login::from(login.clone());
        let req = self.client.post(self.endpoint("users/login")).json(&login);
        let user: boundary::UserData = Self::send(req).await?;
        Ok(user.into())
    }

    async fn wish_list_count(&self) -> Result<usize> {
        let req = self.client.get(self.endpoint("wishlist/count"));
        Self::send(req).await
    }

    async fn wish_list(&self, token: &str) -> Result<WishList> {
        let req = Self::authorized(self.client.get(self.endpoint("wishlist")), token);
        let wish_list: boundary::WishList = Self::send(req).await?;
        Ok(wish_list.into())
    }

    async fn save_wish_list(&self, token: &str, wish_list: &WishList) -> Result<WishList> {
        let wish_list = boundary::WishList::from(wish_list.clone());
        let req =
            Self::authorized(self.client.post(self.endpoint("wishlist")), token).json(&wish_list);
        let wish_list: boundary::WishList = Self::send(req).await?;
        Ok(wish_list.into())
    }

    async fn reset_time(&self, token: &str) -> Result<String> {
        let req = Self::authorized(self.client.get(self.endpoint("wishlist/reset-time")), token);
        let details: boundary::WishListResetDetails = Self::send(req).await?;
        Ok(details.time)
    }
}
