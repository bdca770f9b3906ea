//! Login form

use bookstore_entities::user::{Login, UserData};

use crate::{Cmd, Orders, Request};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Mdl {
    pub login: Login,
    /// Waiting for the server to answer.
    pub running: bool,
    pub error: Option<String>,
    /// The user that was logged in when the page was opened.
    pub user: Option<UserData>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    UserNameChanged(String),
    PasswordChanged(String),
    Submit,
    /// The application reducer intercepts this message to keep the session,
    /// so it only reaches [`update`] if the login page is driven on its own.
    LoginSuccess(UserData),
    AuthError(String),
}

#[must_use]
pub fn init(user: Option<UserData>) -> Mdl {
    Mdl {
        user,
        ..Default::default()
    }
}

pub fn update(msg: Msg, mdl: &mut Mdl, orders: &mut Orders) {
    match msg {
        Msg::UserNameChanged(user_name) => {
            mdl.login.user_name = user_name;
        }
        Msg::PasswordChanged(password) => {
            mdl.login.password = password;
        }
        Msg::Submit => {
            if mdl.running {
                log::debug!("Login is already running");
                return;
            }
            if !mdl.login.is_complete() {
                mdl.error = Some("Please enter user name and password".to_string());
                return;
            }
            log::info!("Logging in as {}", mdl.login.user_name);
            mdl.running = true;
            mdl.error = None;
            orders.perform_cmd(Cmd::Request(Request::Login(mdl.login.clone())));
        }
        Msg::LoginSuccess(user) => {
            mdl.running = false;
            mdl.error = None;
            mdl.user = Some(user);
        }
        Msg::AuthError(err) => {
            mdl.running = false;
            mdl.error = Some(err);
        }
    }
}
