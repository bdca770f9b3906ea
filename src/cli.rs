use anyhow::{anyhow, bail, Result};
use clap::{Parser, Subcommand};
use std::{cell::RefCell, fs, path::PathBuf};

use bookstore_app::{
    entities::book::Book, export, login, parse_route, wish_list, Msg, Navigator, PageMdl, Runtime,
};

use crate::{
    config::Config,
    gateways::{HttpApi, JsonFileStorage},
};

#[derive(Parser)]
#[command(author, version, about = "Book store wish list", long_about = None)]
struct Cli {
    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the page that belongs to a URL
    Route { url: String },
    /// Open a page and print the resulting application state as JSON
    Show {
        #[arg(long, default_value = "/")]
        url: String,
        /// JSON file with the state rendered on the server
        #[arg(long, value_name = "FILE")]
        initial_state: Option<PathBuf>,
    },
    /// Log in and keep the session
    Login {
        #[arg(long)]
        user_name: String,
        #[arg(long)]
        password: String,
    },
    /// Delete the session
    Logout,
    /// Add a book to the wish list
    AddBook {
        #[arg(long)]
        title: String,
        #[arg(long)]
        authors: String,
        #[arg(long)]
        link: String,
        #[arg(long)]
        image_link: String,
    },
    /// Remove a book from the wish list
    RemoveBook {
        #[arg(long)]
        title: String,
        #[arg(long)]
        authors: String,
    },
}

/// Logs the URLs instead of changing a location bar.
#[derive(Default)]
struct LogNavigator {
    location: RefCell<String>,
}

impl Navigator for LogNavigator {
    fn push_url(&self, path: &str) {
        log::info!("Navigate to {path}");
        self.location.replace(path.to_string());
    }
    fn replace_url(&self, path: &str) {
        log::info!("Redirect to {path}");
        self.location.replace(path.to_string());
    }
}

type NativeRuntime = Runtime<JsonFileStorage, HttpApi, LogNavigator>;

pub fn run() -> Result<()> {
    let Cli { config, command } = Cli::parse();

    if let Command::Route { url } = &command {
        print_route(url);
        return Ok(());
    }

    let cfg = Config::try_load_from_file_or_default(config)?;
    log::debug!("{cfg:?}");
    let storage = JsonFileStorage::try_new(&cfg.session.dir)?;
    let api = HttpApi::new(cfg.api.url);

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    rt.block_on(execute(command, storage, api))
}

async fn execute(command: Command, storage: JsonFileStorage, api: HttpApi) -> Result<()> {
    let start = |url: &str, initial_state: Option<&str>| {
        Runtime::start(url, initial_state, storage, api, LogNavigator::default())
    };
    match command {
        Command::Route { url } => print_route(&url),
        Command::Show { url, initial_state } => {
            let initial_state = initial_state.map(fs::read_to_string).transpose()?;
            let mut runtime = start(&url, initial_state.as_deref());
            runtime.run_until_idle().await;
            print_state(&runtime)?;
        }
        Command::Login {
            user_name,
            password,
        } => {
            let mut runtime = start("/login", None);
            runtime.dispatch(Msg::Login(login::Msg::UserNameChanged(user_name)));
            runtime.dispatch(Msg::Login(login::Msg::PasswordChanged(password)));
            runtime.dispatch(Msg::Login(login::Msg::Submit));
            runtime.run_until_idle().await;
            match &runtime.model().menu.user {
                Some(user) => println!("Logged in as {}", user.user_name),
                None => bail!("Login failed: {}", page_error(&runtime)),
            }
        }
        Command::Logout => {
            let mut runtime = start("/", None);
            runtime.dispatch(Msg::LogoutRequested);
            runtime.run_until_idle().await;
            if runtime.model().menu.user.is_some() {
                bail!("Unable to delete the session");
            }
            println!("Logged out");
        }
        Command::AddBook {
            title,
            authors,
            link,
            image_link,
        } => {
            let mut runtime = open_wish_list(start("/wishlist", None)).await?;
            runtime.dispatch(Msg::WishList(wish_list::Msg::TitleChanged(title)));
            runtime.dispatch(Msg::WishList(wish_list::Msg::AuthorsChanged(authors)));
            runtime.dispatch(Msg::WishList(wish_list::Msg::LinkChanged(link)));
            runtime.dispatch(Msg::WishList(wish_list::Msg::ImageLinkChanged(image_link)));
            runtime.dispatch(Msg::WishList(wish_list::Msg::AddBook));
            runtime.run_until_idle().await;
            check_wish_list(&runtime)?;
            print_books(&runtime);
        }
        Command::RemoveBook { title, authors } => {
            let mut runtime = open_wish_list(start("/wishlist", None)).await?;
            let book = Book {
                title,
                authors,
                ..Default::default()
            };
            runtime.dispatch(Msg::WishList(wish_list::Msg::RemoveBook(book)));
            runtime.run_until_idle().await;
            check_wish_list(&runtime)?;
            print_books(&runtime);
        }
    }
    Ok(())
}

async fn open_wish_list(mut runtime: NativeRuntime) -> Result<NativeRuntime> {
    runtime.run_until_idle().await;
    if !matches!(runtime.model().page, PageMdl::WishList(_)) {
        bail!("Not logged in");
    }
    check_wish_list(&runtime)?;
    Ok(runtime)
}

fn check_wish_list(runtime: &NativeRuntime) -> Result<()> {
    let PageMdl::WishList(mdl) = &runtime.model().page else {
        bail!("The wish list has been closed");
    };
    if let Some(err) = &mdl.error {
        bail!("{err}");
    }
    let wish_list::BookErrors {
        title,
        authors,
        link,
        image_link,
    } = &mdl.new_book_errors;
    let invalid_fields = [title, authors, link, image_link]
        .into_iter()
        .flatten()
        .cloned()
        .collect::<Vec<_>>();
    if !invalid_fields.is_empty() {
        return Err(anyhow!("Invalid book: {}", invalid_fields.join(", ")));
    }
    Ok(())
}

fn page_error(runtime: &NativeRuntime) -> String {
    let error = match &runtime.model().page {
        PageMdl::Login(mdl) => mdl.error.clone(),
        PageMdl::WishList(mdl) => mdl.error.clone(),
        PageMdl::Home(_) | PageMdl::NotFound => None,
    };
    error.unwrap_or_else(|| "unknown reason".to_string())
}

fn print_route(url: &str) {
    match parse_route(url) {
        Some(page) => println!("{page:?} ({})", page.path()),
        None => println!("Unable to parse {url}"),
    }
}

fn print_books(runtime: &NativeRuntime) {
    if let PageMdl::WishList(mdl) = &runtime.model().page {
        for book in &mdl.wish_list.books {
            println!("{} by {} ({})", book.title, book.authors, book.link);
        }
    }
}

fn print_state(runtime: &NativeRuntime) -> Result<()> {
    let state = export(runtime.model());
    println!("{}", serde_json::to_string_pretty(&state)?);
    let location = runtime.navigator().location.borrow();
    if !location.is_empty() {
        log::info!("Current location: {location}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_show_command() {
        let cli = Cli::try_parse_from([
            "bookstore",
            "show",
            "--url",
            "/#/wishlist",
            "--initial-state",
            "state.json",
        ])
        .unwrap();
        let Command::Show { url, initial_state } = cli.command else {
            panic!("Unexpected command");
        };
        assert_eq!(url, "/#/wishlist");
        assert_eq!(initial_state, Some(PathBuf::from("state.json")));
    }

    #[test]
    fn show_home_by_default() {
        let cli = Cli::try_parse_from(["bookstore", "show"]).unwrap();
        assert!(matches!(cli.command, Command::Show { url, initial_state: None } if url == "/"));
    }

    #[test]
    fn parse_add_book_command() {
        let cli = Cli::try_parse_from([
            "bookstore",
            "--config",
            "custom.toml",
            "add-book",
            "--title",
            "Y",
            "--authors",
            "X",
            "--link",
            "https://example.com",
            "--image-link",
            "https://example.com/cover.png",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        assert!(matches!(cli.command, Command::AddBook { title, .. } if title == "Y"));
    }

    #[test]
    fn add_book_requires_all_fields() {
        assert!(Cli::try_parse_from(["bookstore", "add-book", "--title", "Y"]).is_err());
    }

    #[test]
    fn login_requires_credentials() {
        assert!(Cli::try_parse_from(["bookstore", "login", "--user-name", "test"]).is_err());
    }
}
