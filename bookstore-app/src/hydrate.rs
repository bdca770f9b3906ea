use thiserror::Error;

use bookstore_boundary as boundary;

use crate::{
    home, load_user, parse_route, update::route_changed, Mdl, Menu, Msg, Orders, Page, PageMdl,
    Storage,
};

#[derive(Debug, Error)]
pub enum HydrationError {
    #[error(transparent)]
    Decode(#[from] serde_json::Error),
    #[error("The {found:?} page does not belong to the {route:?} route")]
    PageMismatch { route: Page, found: Page },
    #[error("The home page has no wish list count")]
    MissingWishListCount,
    #[error("The wish list page requires a logged in user")]
    MissingUser,
}

/// Creates the initial model.
///
/// If the server rendered the page and the state it sent
/// matches the route, the state is adopted. Otherwise the
/// model is initialized from scratch.
pub fn init<S>(url: &str, initial_state: Option<&str>, storage: &S, orders: &mut Orders) -> Mdl
where
    S: Storage,
{
    let page = parse_route(url);
    if let (Some(json), Some(page)) = (initial_state, page) {
        match hydrate(json, page, storage) {
            Ok(mdl) => {
                log::debug!("Adopt server state for the {page:?} page");
                orders.send_msg(Msg::Hydrated);
                return mdl;
            }
            Err(err) => {
                log::debug!("Discard server state: {err}");
            }
        }
    }
    let mut mdl = Mdl {
        menu: Menu {
            user: load_user(storage),
            rendered_on_server: false,
        },
        page: PageMdl::Home(home::Mdl::default()),
    };
    route_changed(page, &mut mdl, orders);
    mdl
}

/// Turns the model into the payload that a server embeds into the page.
#[must_use]
pub fn export(mdl: &Mdl) -> boundary::ApplicationState {
    mdl.into()
}

/// Decodes the server state and checks that it belongs to the page.
///
/// The user is always taken from the storage.
pub fn hydrate<S>(json: &str, page: Page, storage: &S) -> Result<Mdl, HydrationError>
where
    S: Storage,
{
    let state: boundary::ApplicationState = serde_json::from_str(json)?;
    let mut mdl = Mdl::from(state);
    match (&mdl.page, page) {
        (PageMdl::Home(home_mdl), Page::Home) => {
            if home_mdl.wish_list_count.is_none() {
                return Err(HydrationError::MissingWishListCount);
            }
        }
        (PageMdl::Login(_), Page::Login)
        | (PageMdl::WishList(_), Page::WishList)
        | (PageMdl::NotFound, Page::NotFound) => {}
        (found, route) => {
            return Err(HydrationError::PageMismatch {
                route,
                found: found.page(),
            });
        }
    }
    mdl.menu.user = load_user(storage);
    if matches!(mdl.page, PageMdl::WishList(_)) && mdl.menu.user.is_none() {
        return Err(HydrationError::MissingUser);
    }
    Ok(mdl)
}
