use bookstore_entities::{
    user::{Login, UserData},
    wish_list::WishList,
};

use crate::{home, login, wish_list, Api, Msg, Page};

/// Collects the messages and commands
/// that result from processing a single message.
#[derive(Debug, Default)]
pub struct Orders {
    msgs: Vec<Msg>,
    cmds: Vec<Cmd>,
}

impl Orders {
    /// Enqueue a message that is processed after the current one.
    pub fn send_msg(&mut self, msg: Msg) -> &mut Self {
        self.msgs.push(msg);
        self
    }

    pub fn perform_cmd(&mut self, cmd: Cmd) -> &mut Self {
        self.cmds.push(cmd);
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.msgs.is_empty() && self.cmds.is_empty()
    }

    #[must_use]
    pub fn msgs(&self) -> &[Msg] {
        &self.msgs
    }

    #[must_use]
    pub fn cmds(&self) -> &[Cmd] {
        &self.cmds
    }

    #[must_use]
    pub fn into_parts(self) -> (Vec<Msg>, Vec<Cmd>) {
        let Self { msgs, cmds } = self;
        (msgs, cmds)
    }
}

/// A side effect whose result re-enters the application as a [`Msg`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Push a new history entry.
    Navigate(Page),
    /// Replace the current history entry.
    ModifyUrl(Page),
    /// Persist the session: [`Msg::LoginSucceeded`] or [`Msg::StorageWriteFailed`].
    SaveUser(UserData),
    /// Delete the session: [`Msg::LoggedOut`] or [`Msg::StorageWriteFailed`].
    DeleteUser,
    Request(Request),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Login(Login),
    WishListCount,
    WishList { token: String },
    SaveWishList { token: String, wish_list: WishList },
    ResetTime { token: String },
}

impl Request {
    pub async fn perform<A>(self, api: &A) -> Msg
    where
        A: Api + ?Sized,
    {
        match self {
            Self::Login(credentials) => match api.login(&credentials).await {
                Ok(user) => Msg::Login(login::Msg::LoginSuccess(user)),
                Err(err) => {
                    log::warn!("Unable to login as {}: {err}", credentials.user_name);
                    Msg::Login(login::Msg::AuthError(err.to_string()))
                }
            },
            Self::WishListCount => match api.wish_list_count().await {
                Ok(count) => Msg::Home(home::Msg::FetchedWishListCount(count)),
                Err(err) => Msg::Home(home::Msg::FetchError(err.to_string())),
            },
            Self::WishList { token } => match api.wish_list(&token).await {
                Ok(wish_list) => Msg::WishList(wish_list::Msg::FetchedWishList(wish_list)),
                Err(err) => Msg::WishList(wish_list::Msg::FetchError(err.to_string())),
            },
            Self::SaveWishList { token, wish_list } => {
                match api.save_wish_list(&token, &wish_list).await {
                    Ok(wish_list) => Msg::WishList(wish_list::Msg::FetchedWishList(wish_list)),
                    Err(err) => Msg::WishList(wish_list::Msg::FetchError(err.to_string())),
                }
            }
            Self::ResetTime { token } => match api.reset_time(&token).await {
                Ok(time) => Msg::WishList(wish_list::Msg::FetchedResetTime(time)),
                Err(err) => Msg::WishList(wish_list::Msg::FetchError(err.to_string())),
            },
        }
    }
}
