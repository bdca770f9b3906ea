//! # bookstore-app
//!
//! The state machine of the book store web application,
//! independent of any rendering framework.
//!
//! A [`Runtime`] owns the application model ([`Mdl`]) and feeds
//! every [`Msg`] through [`update`]. Side effects are requested
//! as [`Cmd`]s and their results re-enter the loop as messages.

use bookstore_entities::user::UserData;

mod api;
mod cmd;
mod conv;
mod hydrate;
pub mod pages;
mod route;
mod runtime;
mod session;
mod update;

pub use self::{
    api::*,
    cmd::*,
    hydrate::{export, hydrate, init, HydrationError},
    pages::{home, login, wish_list},
    route::*,
    runtime::{Navigator, Runtime},
    session::{delete_user, load_user, save_user, Storage, StorageError, USER_STORAGE_KEY},
    update::{route_changed, update},
};

pub use bookstore_boundary as boundary;
pub use bookstore_entities as entities;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mdl {
    pub menu: Menu,
    pub page: PageMdl,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Menu {
    pub user: Option<UserData>,
    /// The model was adopted from the server
    /// and no message has been processed yet.
    pub rendered_on_server: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageMdl {
    Home(home::Mdl),
    Login(login::Mdl),
    WishList(wish_list::Mdl),
    NotFound,
}

impl PageMdl {
    #[must_use]
    pub const fn page(&self) -> Page {
        match self {
            Self::Home(_) => Page::Home,
            Self::Login(_) => Page::Login,
            Self::WishList(_) => Page::WishList,
            Self::NotFound => Page::NotFound,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// `None` if the URL could not be parsed.
    RouteChanged(Option<Page>),
    Home(home::Msg),
    Login(login::Msg),
    WishList(wish_list::Msg),
    LoginSucceeded(UserData),
    LogoutRequested,
    LoggedOut,
    StorageWriteFailed(StorageError),
    Hydrated,
}
