use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Login {
    pub user_name: String,
    pub password: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct UserData {
    pub user_name: String,
    pub token: String,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Book {
    pub title      : String,
    pub authors    : String,
    pub link       : String,
    pub image_link : String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct WishList {
    pub user_name: String,
    pub books: Vec<Book>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct WishListResetDetails {
    /// RFC 3339 timestamp of the last reset.
    pub time: String,
}

/// Initial state of the web application,
/// injected by the server as `window.__INIT_MODEL__`.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct ApplicationState {
    pub menu: Menu,
    pub page: PageModel,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Menu {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub user: Option<UserData>,
    pub rendered_on_server: bool,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(rename_all = "snake_case")]
pub enum PageModel {
    Home(HomeModel),
    Login(LoginModel),
    WishList(WishListModel),
    NotFound,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct HomeModel {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub wish_list_count: Option<u64>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct LoginModel {
    pub login: Login,
    pub running: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub user: Option<UserData>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct WishListModel {
    pub wish_list: WishList,
    pub token: String,
    pub new_book: Book,
    #[serde(default)]
    pub new_book_errors: BookErrors,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub reset_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct BookErrors {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub authors: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub image_link: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, thiserror::Error)]
#[cfg_attr(feature = "extra-derive", derive(Clone, PartialEq, Eq))]
#[error("{message} ({http_status})")]
pub struct Error {
    pub http_status: u16,
    pub message: String,
}
