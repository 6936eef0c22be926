//! Configuration loaded from environment variables at startup.
//!
//! Every value has a default so the service starts out of the box; the
//! loaded configuration is immutable for the lifetime of the process.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `SERVER_HOST` | `0.0.0.0` |
//! | `SERVER_PORT` | `3000` |
//! | `ROUTE_PREFIX` | `/proxy/api/v1/books` |
//! | `UPSTREAM_BASE_URL` | `http://localhost:8080/api/v1` |
//! | `UPSTREAM_FIND_ALL_PATH` | `/books` |
//! | `UPSTREAM_FIND_BY_TITLE_PATH` | `/books/title/` |
//! | `UPSTREAM_FIND_BY_AUTHOR_PATH` | `/books/author/` |
//! | `UPSTREAM_FIND_BY_ID_PATH` | `/books/` |
//! | `UPSTREAM_CREATE_PATH` | `/books` |
//! | `UPSTREAM_UPDATE_PATH` | `/books/` |
//! | `UPSTREAM_DELETE_PATH` | `/books/` |
//! | `UPSTREAM_TIMEOUT_SECS` | `30` |

use std::env;
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable is set but cannot be parsed
    #[error("invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

/// Top-level service configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Prefix all book routes are rooted at
    pub route_prefix: String,
    pub upstream: UpstreamConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env_or("SERVER_HOST", "0.0.0.0"),
            port: parse_env("SERVER_PORT", 3000)?,
            route_prefix: env_or("ROUTE_PREFIX", "/proxy/api/v1/books"),
            upstream: UpstreamConfig::from_env()?,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            route_prefix: "/proxy/api/v1/books".to_string(),
            upstream: UpstreamConfig::default(),
        }
    }
}

/// Upstream endpoint configuration
///
/// Base URL plus one path template per operation. Full URLs are built by
/// concatenating the path parameter (id, title, author) onto the
/// configured prefix.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub find_all_path: String,
    pub find_by_title_path: String,
    pub find_by_author_path: String,
    pub find_by_id_path: String,
    pub create_path: String,
    pub update_path: String,
    pub delete_path: String,
    /// Bound on each outbound call; expiry counts as an unknown failure
    pub timeout: Duration,
}

impl UpstreamConfig {
    /// Load upstream configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let base_url = match env::var("UPSTREAM_BASE_URL") {
            Ok(url) => url,
            Err(_) => {
                tracing::warn!(
                    default = %defaults.base_url,
                    "UPSTREAM_BASE_URL not set, using default"
                );
                defaults.base_url
            }
        };

        Ok(Self {
            base_url,
            find_all_path: env_or("UPSTREAM_FIND_ALL_PATH", &defaults.find_all_path),
            find_by_title_path: env_or("UPSTREAM_FIND_BY_TITLE_PATH", &defaults.find_by_title_path),
            find_by_author_path: env_or(
                "UPSTREAM_FIND_BY_AUTHOR_PATH",
                &defaults.find_by_author_path,
            ),
            find_by_id_path: env_or("UPSTREAM_FIND_BY_ID_PATH", &defaults.find_by_id_path),
            create_path: env_or("UPSTREAM_CREATE_PATH", &defaults.create_path),
            update_path: env_or("UPSTREAM_UPDATE_PATH", &defaults.update_path),
            delete_path: env_or("UPSTREAM_DELETE_PATH", &defaults.delete_path),
            timeout: Duration::from_secs(parse_env("UPSTREAM_TIMEOUT_SECS", 30)?),
        })
    }

    pub fn find_all_url(&self) -> String {
        format!("{}{}", self.base_url, self.find_all_path)
    }

    pub fn find_by_title_url(&self, title: &str) -> String {
        format!("{}{}{}", self.base_url, self.find_by_title_path, title)
    }

    pub fn find_by_author_url(&self, author: &str) -> String {
        format!("{}{}{}", self.base_url, self.find_by_author_path, author)
    }

    pub fn find_by_id_url(&self, id: i64) -> String {
        format!("{}{}{}", self.base_url, self.find_by_id_path, id)
    }

    pub fn create_url(&self) -> String {
        format!("{}{}", self.base_url, self.create_path)
    }

    pub fn update_url(&self, id: i64) -> String {
        format!("{}{}{}", self.base_url, self.update_path, id)
    }

    pub fn delete_url(&self, id: i64) -> String {
        format!("{}{}{}", self.base_url, self.delete_path, id)
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/api/v1".to_string(),
            find_all_path: "/books".to_string(),
            find_by_title_path: "/books/title/".to_string(),
            find_by_author_path: "/books/author/".to_string(),
            find_by_id_path: "/books/".to_string(),
            create_path: "/books".to_string(),
            update_path: "/books/".to_string(),
            delete_path: "/books/".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .parse()
            .map_err(|e: T::Err| ConfigError::InvalidValue(key.to_string(), e.to_string())),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_route_prefix() {
        let config = AppConfig::default();
        assert_eq!(config.route_prefix, "/proxy/api/v1/books");
    }

    #[test]
    fn find_all_url_joins_base_and_path() {
        let config = UpstreamConfig::default();
        assert_eq!(config.find_all_url(), "http://localhost:8080/api/v1/books");
    }

    #[test]
    fn find_by_id_url_appends_id() {
        let config = UpstreamConfig::default();
        assert_eq!(
            config.find_by_id_url(42),
            "http://localhost:8080/api/v1/books/42"
        );
    }

    #[test]
    fn find_by_title_url_appends_title() {
        let config = UpstreamConfig::default();
        assert_eq!(
            config.find_by_title_url("Dune"),
            "http://localhost:8080/api/v1/books/title/Dune"
        );
    }

    #[test]
    fn find_by_author_url_appends_author() {
        let config = UpstreamConfig::default();
        assert_eq!(
            config.find_by_author_url("Herbert"),
            "http://localhost:8080/api/v1/books/author/Herbert"
        );
    }

    #[test]
    fn update_and_delete_urls_append_id() {
        let config = UpstreamConfig::default();
        assert_eq!(
            config.update_url(7),
            "http://localhost:8080/api/v1/books/7"
        );
        assert_eq!(
            config.delete_url(7),
            "http://localhost:8080/api/v1/books/7"
        );
    }

    #[test]
    fn path_templates_are_configurable() {
        let config = UpstreamConfig {
            base_url: "http://upstream:9000".to_string(),
            find_by_id_path: "/v2/catalog/".to_string(),
            ..UpstreamConfig::default()
        };
        assert_eq!(config.find_by_id_url(1), "http://upstream:9000/v2/catalog/1");
    }
}
