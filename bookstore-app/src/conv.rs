use bookstore_boundary as b;

use crate::{home, login, wish_list, Mdl, Menu, PageMdl};

impl From<b::ApplicationState> for Mdl {
    fn from(from: b::ApplicationState) -> Self {
        let b::ApplicationState { menu, page } = from;
        Self {
            menu: menu.into(),
            page: page.into(),
        }
    }
}

impl From<&Mdl> for b::ApplicationState {
    fn from(from: &Mdl) -> Self {
        let Mdl { menu, page } = from;
        Self {
            menu: menu.into(),
            page: page.into(),
        }
    }
}

impl From<b::Menu> for Menu {
    fn from(from: b::Menu) -> Self {
        let b::Menu {
            user,
            rendered_on_server,
        } = from;
        Self {
            user: user.map(Into::into),
            rendered_on_server,
        }
    }
}

impl From<&Menu> for b::Menu {
    fn from(from: &Menu) -> Self {
        let Menu {
            user,
            rendered_on_server,
        } = from;
        Self {
            user: user.clone().map(Into::into),
            rendered_on_server: *rendered_on_server,
        }
    }
}

impl From<b::PageModel> for PageMdl {
    fn from(from: b::PageModel) -> Self {
        match from {
            b::PageModel::Home(b::HomeModel { wish_list_count }) => Self::Home(home::Mdl {
                // A count that does not fit is treated as missing.
                wish_list_count: wish_list_count.and_then(|count| usize::try_from(count).ok()),
            }),
            b::PageModel::Login(b::LoginModel {
                login,
                running,
                error,
                user,
            }) => Self::Login(login::Mdl {
                login: login.into(),
                running,
                error,
                user: user.map(Into::into),
            }),
            b::PageModel::WishList(b::WishListModel {
                wish_list,
                token,
                new_book,
                new_book_errors,
                reset_time,
                error,
            }) => Self::WishList(wish_list::Mdl {
                wish_list: wish_list.into(),
                token,
                new_book: new_book.into(),
                new_book_errors: new_book_errors.into(),
                reset_time,
                error,
            }),
            b::PageModel::NotFound => Self::NotFound,
        }
    }
}

impl From<&PageMdl> for b::PageModel {
    fn from(from: &PageMdl) -> Self {
        match from.clone() {
            PageMdl::Home(home::Mdl { wish_list_count }) => Self::Home(b::HomeModel {
                wish_list_count: wish_list_count.and_then(|count| u64::try_from(count).ok()),
            }),
            PageMdl::Login(login::Mdl {
                login,
                running,
                error,
                user,
            }) => Self::Login(b::LoginModel {
                login: login.into(),
                running,
                error,
                user: user.map(Into::into),
            }),
            PageMdl::WishList(wish_list::Mdl {
                wish_list,
                token,
                new_book,
                new_book_errors,
                reset_time,
                error,
            }) => Self::WishList(b::WishListModel {
                wish_list: wish_list.into(),
                token,
                new_book: new_book.into(),
                new_book_errors: new_book_errors.into(),
                reset_time,
                error,
            }),
            PageMdl::NotFound => Self::NotFound,
        }
    }
}

impl From<b::BookErrors> for wish_list::BookErrors {
    fn from(from: b::BookErrors) -> Self {
        let b::BookErrors {
            title,
            authors,
            link,
            image_link,
        } = from;
        Self {
            title,
            authors,
            link,
            image_link,
        }
    }
}

impl From<wish_list::BookErrors> for b::BookErrors {
    fn from(from: wish_list::BookErrors) -> Self {
        let wish_list::BookErrors {
            title,
            authors,
            link,
            image_link,
        } = from;
        Self {
            title,
            authors,
            link,
            image_link,
        }
    }
}
