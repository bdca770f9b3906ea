#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Login,
    WishList,
    NotFound,
}

impl Page {
    pub const ALL: [Page; 4] = [Self::Home, Self::Login, Self::WishList, Self::NotFound];

    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::WishList => "/wishlist",
            Self::NotFound => "/notfound",
        }
    }
}

/// Maps a URL to a page.
///
/// Accepts absolute URLs, bare paths and fragments (`#/login`).
/// If the URL contains a fragment only the fragment is taken into account.
/// Returns `None` if no page matches.
#[must_use]
pub fn parse_route(url: &str) -> Option<Page> {
    let path = match url.split_once('#') {
        Some((_, fragment)) => fragment,
        None => strip_origin(url),
    };
    let path = path.split('?').next().unwrap_or_default();
    let path = path.strip_prefix('/').unwrap_or(path);
    let path = path.strip_suffix('/').unwrap_or(path);
    match path {
        "" => Some(Page::Home),
        "login" => Some(Page::Login),
        "wishlist" => Some(Page::WishList),
        "notfound" => Some(Page::NotFound),
        _ => None,
    }
}

fn strip_origin(url: &str) -> &str {
    match url.split_once("://") {
        Some((_, rest)) => rest.find('/').map_or("", |idx| &rest[idx..]),
        None => url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_round_trip() {
        for page in Page::ALL {
            assert_eq!(parse_route(page.path()), Some(page));
        }
    }

    #[test]
    fn fragment_round_trip() {
        for page in Page::ALL {
            let url = format!("http://localhost:8080/#{}", page.path());
            assert_eq!(parse_route(&url), Some(page));
        }
    }

    #[test]
    fn fragment_takes_precedence() {
        assert_eq!(parse_route("/login#/wishlist"), Some(Page::WishList));
        assert_eq!(parse_route("https://example.com/wishlist#"), Some(Page::Home));
    }

    #[test]
    fn empty_url_is_home() {
        assert_eq!(parse_route(""), Some(Page::Home));
        assert_eq!(parse_route("http://localhost:8080"), Some(Page::Home));
    }

    #[test]
    fn ignore_query_and_trailing_slash() {
        assert_eq!(parse_route("/login?next=wishlist"), Some(Page::Login));
        assert_eq!(parse_route("#/wishlist/"), Some(Page::WishList));
        assert_eq!(parse_route("login"), Some(Page::Login));
    }

    #[test]
    fn unknown_paths_are_no_pages() {
        assert_eq!(parse_route("/dashboard"), None);
        assert_eq!(parse_route("#/login/extra"), None);
        assert_eq!(parse_route("http://localhost/books/1"), None);
    }
}
