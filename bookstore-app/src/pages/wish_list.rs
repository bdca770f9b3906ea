use bookstore_entities::{
    book::{Book, BookInvalidation},
    user::UserData,
    wish_list::{AddBookError, WishList},
};

use crate::{Cmd, Orders, Request};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Mdl {
    pub wish_list: WishList,
    pub token: String,
    /// The book that is currently entered.
    pub new_book: Book,
    pub new_book_errors: BookErrors,
    pub reset_time: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BookErrors {
    pub title: Option<String>,
    pub authors: Option<String>,
    pub link: Option<String>,
    pub image_link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    FetchedWishList(WishList),
    FetchedResetTime(String),
    TitleChanged(String),
    AuthorsChanged(String),
    LinkChanged(String),
    ImageLinkChanged(String),
    AddBook,
    RemoveBook(Book),
    FetchError(String),
}

pub fn init(user: &UserData, orders: &mut Orders) -> Mdl {
    let UserData { user_name, token } = user;
    orders
        .perform_cmd(Cmd::Request(Request::WishList {
            token: token.clone(),
        }))
        .perform_cmd(Cmd::Request(Request::ResetTime {
            token: token.clone(),
        }));
    Mdl {
        wish_list: WishList::new(user_name.as_str()),
        token: token.clone(),
        ..Default::default()
    }
}

pub fn update(msg: Msg, mdl: &mut Mdl, orders: &mut Orders) {
    match msg {
        Msg::FetchedWishList(wish_list) => {
            mdl.wish_list = wish_list;
            mdl.error = None;
        }
        Msg::FetchedResetTime(time) => {
            mdl.reset_time = Some(time);
        }
        Msg::TitleChanged(title) => {
            mdl.new_book.title = title;
            mdl.new_book_errors.title = field_error(&mdl.new_book, BookInvalidation::Title);
        }
        Msg::AuthorsChanged(authors) => {
            mdl.new_book.authors = authors;
            mdl.new_book_errors.authors = field_error(&mdl.new_book, BookInvalidation::Authors);
        }
        Msg::LinkChanged(link) => {
            mdl.new_book.link = link;
            mdl.new_book_errors.link = field_error(&mdl.new_book, BookInvalidation::Link);
        }
        Msg::ImageLinkChanged(image_link) => {
            mdl.new_book.image_link = image_link;
            mdl.new_book_errors.image_link =
                field_error(&mdl.new_book, BookInvalidation::ImageLink);
        }
        Msg::AddBook => match mdl.wish_list.add_book(mdl.new_book.clone()) {
            Ok(()) => {
                mdl.new_book = Book::default();
                mdl.new_book_errors = BookErrors::default();
                mdl.error = None;
                save(mdl, orders);
            }
            Err(AddBookError::Invalid(invalidations)) => {
                mdl.new_book_errors = BookErrors::from(invalidations.as_slice());
            }
            Err(err @ AddBookError::Duplicate) => {
                mdl.error = Some(err.to_string());
            }
        },
        Msg::RemoveBook(book) => {
            if mdl.wish_list.remove_book(&book) {
                save(mdl, orders);
            } else {
                log::debug!("'{}' is not on the wish list", book.title);
            }
        }
        Msg::FetchError(err) => {
            log::warn!("Wish list request failed: {err}");
            mdl.error = Some(err);
        }
    }
}

fn save(mdl: &Mdl, orders: &mut Orders) {
    orders.perform_cmd(Cmd::Request(Request::SaveWishList {
        token: mdl.token.clone(),
        wish_list: mdl.wish_list.clone(),
    }));
}

fn field_error(book: &Book, field: BookInvalidation) -> Option<String> {
    book.invalidations()
        .contains(&field)
        .then(|| field.message().to_string())
}

impl From<&[BookInvalidation]> for BookErrors {
    fn from(from: &[BookInvalidation]) -> Self {
        let mut errors = Self::default();
        for invalidation in from {
            let msg = Some(invalidation.message().to_string());
            match invalidation {
                BookInvalidation::Title => errors.title = msg,
                BookInvalidation::Authors => errors.authors = msg,
                BookInvalidation::Link => errors.link = msg,
                BookInvalidation::ImageLink => errors.image_link = msg,
            }
        }
        errors
    }
}

impl BookErrors {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.authors.is_none()
            && self.link.is_none()
            && self.image_link.is_none()
    }
}
