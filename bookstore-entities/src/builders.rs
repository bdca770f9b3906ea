pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::book_builder::*;

pub mod book_builder {

    use super::*;
    use crate::book::*;

    #[derive(Debug)]
    pub struct BookBuild {
        book: Book,
    }

    impl BookBuild {
        pub fn title(mut self, title: &str) -> Self {
            self.book.title = title.into();
            self
        }
        pub fn authors(mut self, authors: &str) -> Self {
            self.book.authors = authors.into();
            self
        }
        pub fn link(mut self, link: &str) -> Self {
            self.book.link = link.into();
            self
        }
        pub fn image_link(mut self, image_link: &str) -> Self {
            self.book.image_link = image_link.into();
            self
        }
        pub fn finish(self) -> Book {
            self.book
        }
    }

    impl Builder for Book {
        type Build = BookBuild;
        fn build() -> BookBuild {
            BookBuild {
                book: Book::default(),
            }
        }
    }
}
