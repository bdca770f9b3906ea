#[rustfmt::skip]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Book {
    pub title      : String,
    pub authors    : String,
    pub link       : String,
    pub image_link : String,
}

/// A required field of a [`Book`] that is blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookInvalidation {
    Title,
    Authors,
    Link,
    ImageLink,
}

impl Book {
    #[must_use]
    pub fn invalidations(&self) -> Vec<BookInvalidation> {
        let Self {
            title,
            authors,
            link,
            image_link,
        } = self;
        [
            (title, BookInvalidation::Title),
            (authors, BookInvalidation::Authors),
            (link, BookInvalidation::Link),
            (image_link, BookInvalidation::ImageLink),
        ]
        .into_iter()
        .filter(|(value, _)| is_blank(value))
        .map(|(_, invalidation)| invalidation)
        .collect()
    }

    #[must_use]
    pub fn validate(&self) -> bool {
        self.invalidations().is_empty()
    }

    /// Two books are the same if authors and title match.
    /// Links are not taken into account.
    #[must_use]
    pub fn is_same_book(&self, other: &Book) -> bool {
        self.authors == other.authors && self.title == other.title
    }
}

impl BookInvalidation {
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Title => "No title was entered",
            Self::Authors => "No author was entered",
            Self::Link => "No link was entered",
            Self::ImageLink => "No image link was entered",
        }
    }
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
