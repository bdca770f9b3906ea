use thiserror::Error;

use crate::book::{Book, BookInvalidation};

#[rustfmt::skip]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WishList {
    pub user_name : String,
    pub books     : Vec<Book>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddBookError {
    #[error("The book is incomplete")]
    Invalid(Vec<BookInvalidation>),
    #[error("Your wishlist contains this book already")]
    Duplicate,
}

impl WishList {
    #[must_use]
    pub fn new(user_name: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            books: vec![],
        }
    }

    #[must_use]
    pub fn contains(&self, book: &Book) -> bool {
        self.books.iter().any(|b| b.is_same_book(book))
    }

    pub fn add_book(&mut self, book: Book) -> Result<(), AddBookError> {
        let invalidations = book.invalidations();
        if !invalidations.is_empty() {
            return Err(AddBookError::Invalid(invalidations));
        }
        if self.contains(&book) {
            return Err(AddBookError::Duplicate);
        }
        self.books.push(book);
        Ok(())
    }

    /// Returns `true` if at least one book was removed.
    pub fn remove_book(&mut self, book: &Book) -> bool {
        let count = self.books.len();
        self.books.retain(|b| !b.is_same_book(book));
        self.books.len() != count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::*;

    fn wish_list() -> WishList {
        let mut wl = WishList::new("test");
        wl.books.push(
            Book::build()
                .authors("X")
                .title("Y")
                .link("link")
                .image_link("img")
                .finish(),
        );
        wl
    }

    #[test]
    fn reject_duplicate_with_other_link() {
        let mut wl = wish_list();
        let book = Book::build()
            .authors("X")
            .title("Y")
            .link("other")
            .image_link("img")
            .finish();
        assert!(wl.contains(&book));
        assert_eq!(wl.add_book(book), Err(AddBookError::Duplicate));
        assert_eq!(wl.books.len(), 1);
    }

    #[test]
    fn accept_book_with_other_title() {
        let mut wl = wish_list();
        let book = Book::build()
            .authors("X")
            .title("Z")
            .link("link")
            .image_link("img")
            .finish();
        assert!(!wl.contains(&book));
        assert!(wl.add_book(book).is_ok());
        assert_eq!(wl.books.len(), 2);
        assert_eq!(wl.books[1].title, "Z");
    }

    #[test]
    fn reject_invalid_book() {
        let mut wl = WishList::new("test");
        let book = Book::build().authors("X").title("Z").finish();
        assert_eq!(
            wl.add_book(book),
            Err(AddBookError::Invalid(vec![
                BookInvalidation::Link,
                BookInvalidation::ImageLink
            ]))
        );
        assert!(wl.books.is_empty());
    }

    #[test]
    fn remove_book() {
        let mut wl = wish_list();
        let other = Book::build().authors("X").title("Z").finish();
        assert!(!wl.remove_book(&other));
        assert_eq!(wl.books.len(), 1);
        let same = Book::build().authors("X").title("Y").finish();
        assert!(wl.remove_book(&same));
        assert!(wl.books.is_empty());
    }
}
