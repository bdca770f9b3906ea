use super::*;
use bookstore_entities as e;

impl From<e::user::UserData> for UserData {
    fn from(from: e::user::UserData) -> Self {
        let e::user::UserData { user_name, token } = from;
        Self { user_name, token }
    }
}

impl From<UserData> for e::user::UserData {
    fn from(from: UserData) -> Self {
        let UserData { user_name, token } = from;
        Self { user_name, token }
    }
}

impl From<e::user::Login> for Login {
    fn from(from: e::user::Login) -> Self {
        let e::user::Login {
            user_name,
            password,
        } = from;
        Self {
            user_name,
            password,
        }
    }
}

impl From<Login> for e::user::Login {
    fn from(from: Login) -> Self {
        let Login {
            user_name,
            password,
        } = from;
        Self {
            user_name,
            password,
        }
    }
}

impl From<e::book::Book> for Book {
    fn from(from: e::book::Book) -> Self {
        let e::book::Book {
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

impl From<Book> for e::book::Book {
    fn from(from: Book) -> Self {
        let Book {
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

impl From<e::wish_list::WishList> for WishList {
    fn from(from: e::wish_list::WishList) -> Self {
        let e::wish_list::WishList { user_name, books } = from;
        Self {
            user_name,
            books: books.into_iter().map(Book::from).collect(),
        }
    }
}

impl From<WishList> for e::wish_list::WishList {
    fn from(from: WishList) -> Self {
        let WishList { user_name, books } = from;
        Self {
            user_name,
            books: books.into_iter().map(e::book::Book::from).collect(),
        }
    }
}
