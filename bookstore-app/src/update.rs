use crate::{home, login, wish_list, Cmd, Mdl, Msg, Orders, Page, PageMdl};

pub fn update(msg: Msg, mdl: &mut Mdl, orders: &mut Orders) {
    match msg {
        Msg::RouteChanged(page) => {
            route_changed(page, mdl, orders);
        }
        Msg::Home(msg) => match &mut mdl.page {
            PageMdl::Home(home_mdl) => home::update(msg, home_mdl, orders),
            page => ignore(page, &msg),
        },
        Msg::Login(login::Msg::LoginSuccess(user)) => {
            orders.perform_cmd(Cmd::SaveUser(user));
        }
        Msg::Login(msg) => match &mut mdl.page {
            PageMdl::Login(login_mdl) => login::update(msg, login_mdl, orders),
            page => ignore(page, &msg),
        },
        Msg::WishList(msg) => match &mut mdl.page {
            PageMdl::WishList(wish_list_mdl) => wish_list::update(msg, wish_list_mdl, orders),
            page => ignore(page, &msg),
        },
        Msg::LoginSucceeded(user) => {
            log::info!("Successfully logged in as {}", user.user_name);
            mdl.menu.user = Some(user);
            orders.perform_cmd(Cmd::Navigate(Page::WishList));
        }
        Msg::LogoutRequested => {
            orders.perform_cmd(Cmd::DeleteUser);
        }
        Msg::LoggedOut => {
            log::info!("Logged out");
            mdl.menu.user = None;
            mdl.page = PageMdl::Home(home::Mdl::default());
            orders.perform_cmd(Cmd::Navigate(Page::Home));
        }
        Msg::StorageWriteFailed(err) => {
            log::error!("Unable to write to local storage: {err}");
            // The session stays as it is but the login form must accept a retry.
            if let PageMdl::Login(login_mdl) = &mut mdl.page {
                if login_mdl.running {
                    login_mdl.running = false;
                    login_mdl.error = Some(format!("Unable to keep the session: {err}"));
                }
            }
        }
        Msg::Hydrated => {
            mdl.menu.rendered_on_server = false;
        }
    }
}

/// Initializes the page that belongs to the new route.
pub fn route_changed(page: Option<Page>, mdl: &mut Mdl, orders: &mut Orders) {
    let Some(page) = page else {
        log::error!("Unable to parse URL");
        orders.perform_cmd(Cmd::ModifyUrl(Page::NotFound));
        return;
    };
    log::debug!("Route changed: {page:?}");
    match page {
        Page::Home => {
            mdl.page = PageMdl::Home(home::init(orders));
        }
        Page::Login => {
            mdl.page = PageMdl::Login(login::init(mdl.menu.user.clone()));
        }
        Page::WishList => match &mdl.menu.user {
            Some(user) => {
                mdl.page = PageMdl::WishList(wish_list::init(user, orders));
            }
            None => {
                log::info!("Not logged in");
                orders.send_msg(Msg::LogoutRequested);
            }
        },
        Page::NotFound => {
            mdl.page = PageMdl::NotFound;
        }
    }
}

// Results of requests can arrive after the user left the page.
fn ignore<M: std::fmt::Debug>(page: &PageMdl, msg: &M) {
    log::debug!("Ignore {msg:?} on {:?} page", page.page());
}

#[cfg(test)]
mod tests {
    use bookstore_entities::{user::UserData, wish_list::WishList};

    use super::*;
    use crate::{Menu, Request, StorageError};

    fn user() -> UserData {
        UserData {
            user_name: "test".into(),
            token: "token".into(),
        }
    }

    fn mdl(user: Option<UserData>, page: PageMdl) -> Mdl {
        Mdl {
            menu: Menu {
                user,
                rendered_on_server: false,
            },
            page,
        }
    }

    fn home() -> PageMdl {
        PageMdl::Home(home::Mdl::default())
    }

    #[test]
    fn route_to_home_reinitializes_home() {
        let mut mdl = mdl(
            None,
            PageMdl::Home(home::Mdl {
                wish_list_count: Some(7),
            }),
        );
        let mut orders = Orders::default();
        update(Msg::RouteChanged(Some(Page::Home)), &mut mdl, &mut orders);
        assert_eq!(mdl.page, home());
        assert_eq!(orders.cmds(), &[Cmd::Request(Request::WishListCount)]);
    }

    #[test]
    fn route_to_login_seeds_current_user() {
        let mut mdl = mdl(Some(user()), home());
        let mut orders = Orders::default();
        update(Msg::RouteChanged(Some(Page::Login)), &mut mdl, &mut orders);
        let PageMdl::Login(login_mdl) = &mdl.page else {
            panic!("Unexpected page: {:?}", mdl.page);
        };
        assert_eq!(login_mdl.user, Some(user()));
        assert!(orders.is_empty());
    }

    #[test]
    fn route_to_wish_list_with_session() {
        let mut mdl = mdl(Some(user()), home());
        let mut orders = Orders::default();
        update(Msg::RouteChanged(Some(Page::WishList)), &mut mdl, &mut orders);
        let PageMdl::WishList(wish_list_mdl) = &mdl.page else {
            panic!("Unexpected page: {:?}", mdl.page);
        };
        assert_eq!(wish_list_mdl.wish_list, WishList::new("test"));
        assert_eq!(wish_list_mdl.token, "token");
        assert_eq!(orders.cmds().len(), 2);
        assert!(orders.msgs().is_empty());
    }

    #[test]
    fn route_to_wish_list_without_session_requests_logout() {
        let mut mdl = mdl(None, home());
        let mut orders = Orders::default();
        update(Msg::RouteChanged(Some(Page::WishList)), &mut mdl, &mut orders);
        assert_eq!(mdl.page, home());
        assert_eq!(orders.msgs(), &[Msg::LogoutRequested]);
        assert!(orders.cmds().is_empty());
    }

    #[test]
    fn route_to_not_found() {
        let mut mdl = mdl(None, home());
        let mut orders = Orders::default();
        update(Msg::RouteChanged(Some(Page::NotFound)), &mut mdl, &mut orders);
        assert_eq!(mdl.page, PageMdl::NotFound);
        assert!(orders.is_empty());
    }

    #[test]
    fn unparsable_route_rewrites_url() {
        let mut mdl = mdl(None, home());
        let mut orders = Orders::default();
        update(Msg::RouteChanged(None), &mut mdl, &mut orders);
        assert_eq!(mdl.page, home());
        assert_eq!(orders.cmds(), &[Cmd::ModifyUrl(Page::NotFound)]);
    }

    #[test]
    fn ignore_wish_list_msg_on_other_page() {
        let login = PageMdl::Login(login::init(None));
        let mut mdl = mdl(Some(user()), login);
        let before = mdl.clone();
        let mut orders = Orders::default();
        update(
            Msg::WishList(wish_list::Msg::RemoveBook(Default::default())),
            &mut mdl,
            &mut orders,
        );
        update(
            Msg::WishList(wish_list::Msg::FetchedWishList(WishList::new("test"))),
            &mut mdl,
            &mut orders,
        );
        assert_eq!(mdl, before);
        assert!(orders.is_empty());
    }

    #[test]
    fn ignore_home_and_login_msgs_on_other_page() {
        let mut mdl = mdl(None, PageMdl::NotFound);
        let mut orders = Orders::default();
        update(
            Msg::Home(home::Msg::FetchedWishListCount(3)),
            &mut mdl,
            &mut orders,
        );
        update(Msg::Login(login::Msg::Submit), &mut mdl, &mut orders);
        assert_eq!(mdl.page, PageMdl::NotFound);
        assert!(orders.is_empty());
    }

    #[test]
    fn login_success_persists_user() {
        let mut mdl = mdl(None, PageMdl::Login(login::init(None)));
        let before = mdl.clone();
        let mut orders = Orders::default();
        update(
            Msg::Login(login::Msg::LoginSuccess(user())),
            &mut mdl,
            &mut orders,
        );
        assert_eq!(mdl, before);
        assert_eq!(orders.cmds(), &[Cmd::SaveUser(user())]);
    }

    #[test]
    fn login_succeeded_navigates_to_wish_list() {
        let mut mdl = mdl(None, PageMdl::Login(login::init(None)));
        let mut orders = Orders::default();
        update(Msg::LoginSucceeded(user()), &mut mdl, &mut orders);
        assert_eq!(mdl.menu.user, Some(user()));
        assert_eq!(orders.cmds(), &[Cmd::Navigate(Page::WishList)]);
    }

    #[test]
    fn logout_requested_deletes_user() {
        let mut mdl = mdl(Some(user()), home());
        let mut orders = Orders::default();
        update(Msg::LogoutRequested, &mut mdl, &mut orders);
        assert_eq!(mdl.menu.user, Some(user()));
        assert_eq!(orders.cmds(), &[Cmd::DeleteUser]);
    }

    #[test]
    fn logged_out_resets_to_home() {
        let mut orders = Orders::default();
        let wish_list_mdl = wish_list::init(&user(), &mut orders);
        let mut mdl = mdl(Some(user()), PageMdl::WishList(wish_list_mdl));
        let mut orders = Orders::default();
        update(Msg::LoggedOut, &mut mdl, &mut orders);
        assert_eq!(mdl.menu.user, None);
        assert_eq!(mdl.page, home());
        assert_eq!(orders.cmds(), &[Cmd::Navigate(Page::Home)]);
    }

    #[test]
    fn storage_failure_keeps_state() {
        let mut mdl = mdl(Some(user()), home());
        let before = mdl.clone();
        let mut orders = Orders::default();
        update(
            Msg::StorageWriteFailed(StorageError::Access("quota exceeded".into())),
            &mut mdl,
            &mut orders,
        );
        assert_eq!(mdl, before);
        assert!(orders.is_empty());
    }

    #[test]
    fn storage_failure_releases_login_form() {
        let mut login_mdl = login::init(None);
        login_mdl.running = true;
        let mut mdl = mdl(None, PageMdl::Login(login_mdl));
        let mut orders = Orders::default();
        update(
            Msg::StorageWriteFailed(StorageError::Access("quota exceeded".into())),
            &mut mdl,
            &mut orders,
        );
        assert_eq!(mdl.menu.user, None);
        let PageMdl::Login(login_mdl) = &mdl.page else {
            panic!("Unexpected page: {:?}", mdl.page);
        };
        assert!(!login_mdl.running);
        assert_eq!(
            login_mdl.error.as_deref(),
            Some("Unable to keep the session: Storage not accessible: quota exceeded")
        );
        assert!(orders.is_empty());
    }

    #[test]
    fn hydrated_clears_flag() {
        let mut mdl = mdl(None, home());
        mdl.menu.rendered_on_server = true;
        let mut orders = Orders::default();
        update(Msg::Hydrated, &mut mdl, &mut orders);
        assert!(!mdl.menu.rendered_on_server);
        assert_eq!(mdl.page, home());
        assert!(orders.is_empty());
    }
}
