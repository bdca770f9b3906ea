use anyhow::{bail, Result};
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "bookstore.toml";

const ENV_NAME_API_URL: &str = "BOOKSTORE_API_URL";
const ENV_NAME_SESSION_DIR: &str = "BOOKSTORE_SESSION_DIR";

#[derive(Debug)]
pub struct Config {
    pub api: Api,
    pub session: Session,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::debug!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::debug!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        cfg.override_from(|name| env::var(name).ok())?;
        Ok(cfg)
    }

    fn override_from<F>(&mut self, var: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = var(ENV_NAME_API_URL) {
            self.api.url = validate_api_url(&url)?;
        }
        if let Some(dir) = var(ENV_NAME_SESSION_DIR) {
            self.session.dir = PathBuf::from(dir);
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct Api {
    /// Base URL without a trailing slash.
    pub url: String,
}

#[derive(Debug)]
pub struct Session {
    pub dir: PathBuf,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config { api, session } = from;

        let raw::Api { url } = api.unwrap_or_default();
        let api = Api {
            url: validate_api_url(&url)?,
        };

        let raw::Session { dir } = session.unwrap_or_default();
        if dir.as_os_str().is_empty() {
            bail!("Missing session directory");
        }
        let session = Session { dir };

        Ok(Self { api, session })
    }
}

fn validate_api_url(url: &str) -> Result<String> {
    let url = url.trim().trim_end_matches('/');
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        bail!("Invalid API URL '{url}': expected an absolute http(s) URL");
    }
    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_default_config() {
        let cfg = Config::try_from(raw::Config::default()).unwrap();
        assert_eq!(cfg.api.url, "http://127.0.0.1:8080/api");
        assert_eq!(cfg.session.dir, PathBuf::from(".bookstore"));
    }

    #[test]
    fn fall_back_to_default_if_file_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("missing.toml");
        let cfg = Config::try_load_from_file_or_default(Some(file)).unwrap();
        assert_eq!(cfg.session.dir, PathBuf::from(".bookstore"));
    }

    #[test]
    fn load_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("bookstore.toml");
        fs::write(
            &file,
            r#"
            [api]
            url = "https://books.example.com/api/"

            [session]
            dir = "/tmp/books"
            "#,
        )
        .unwrap();
        let raw_config: raw::Config = toml::from_str(&fs::read_to_string(&file).unwrap()).unwrap();
        let cfg = Config::try_from(raw_config).unwrap();
        assert_eq!(cfg.api.url, "https://books.example.com/api");
        assert_eq!(cfg.session.dir, PathBuf::from("/tmp/books"));
    }

    #[test]
    fn missing_sections_are_taken_from_default() {
        let raw_config: raw::Config = toml::from_str(
            r#"
            [session]
            dir = "sessions"
            "#,
        )
        .unwrap();
        let cfg = Config::try_from(raw_config).unwrap();
        assert_eq!(cfg.api.url, "http://127.0.0.1:8080/api");
        assert_eq!(cfg.session.dir, PathBuf::from("sessions"));
    }

    #[test]
    fn reject_relative_api_url() {
        let raw_config: raw::Config = toml::from_str(
            r#"
            [api]
            url = "/api"
            "#,
        )
        .unwrap();
        assert!(Config::try_from(raw_config).is_err());
    }

    #[test]
    fn override_from_environment() {
        let mut cfg = Config::try_from(raw::Config::default()).unwrap();
        cfg.override_from(|name| match name {
            ENV_NAME_API_URL => Some("https://example.com/".to_string()),
            ENV_NAME_SESSION_DIR => Some("/var/lib/bookstore".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(cfg.api.url, "https://example.com");
        assert_eq!(cfg.session.dir, PathBuf::from("/var/lib/bookstore"));
    }

    #[test]
    fn reject_invalid_url_from_environment() {
        let mut cfg = Config::try_from(raw::Config::default()).unwrap();
        let result = cfg.override_from(|name| (name == ENV_NAME_API_URL).then(|| "ftp://x".into()));
        assert!(result.is_err());
    }
}
