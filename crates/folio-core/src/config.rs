//! API endpoint configuration
//!
//! Base server address plus the symbolic endpoint map. Request-issuing
//! layers build full URLs by concatenating the two; this module has no
//! other behavior.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Symbolic endpoint names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Login,
    Register,
    Books,
}

/// Server address and endpoint map for the book API
///
/// Immutable once constructed. Defaults match the shipped deployment;
/// [`ApiConfig::load`] lets a deployment override them from a TOML file
/// without a rebuild.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server base address, e.g. `http://localhost:8082`
    pub base_url: String,

    /// Relative request paths by endpoint name
    pub endpoints: Endpoints,
}

/// Endpoint name to relative path map
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Endpoints {
    pub login: String,
    pub register: String,
    pub books: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8082".to_string(),
            endpoints: Endpoints::default(),
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            login: "/login".to_string(),
            register: "/register".to_string(),
            books: "/books".to_string(),
        }
    }
}

impl ApiConfig {
    /// Parse configuration from a TOML document
    ///
    /// Missing keys fall back to the defaults.
    pub fn from_toml(input: &str) -> Result<Self> {
        Ok(toml::from_str(input)?)
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        Self::from_toml(&fs::read_to_string(path)?)
    }

    /// Relative request path for an endpoint
    pub fn path(&self, endpoint: Endpoint) -> &str {
        match endpoint {
            Endpoint::Login => &self.endpoints.login,
            Endpoint::Register => &self.endpoints.register,
            Endpoint::Books => &self.endpoints.books,
        }
    }

    /// Full request URL: base address plus endpoint path
    pub fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, self.path(endpoint))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_literals() {
        let config = ApiConfig::default();

        assert_eq!(config.base_url, "http://localhost:8082");
        assert_eq!(config.endpoints.login, "/login");
        assert_eq!(config.endpoints.register, "/register");
        assert_eq!(config.endpoints.books, "/books");
    }

    #[test]
    fn test_url_concatenation() {
        let config = ApiConfig::default();

        assert_eq!(config.url(Endpoint::Login), "http://localhost:8082/login");
        assert_eq!(config.url(Endpoint::Books), "http://localhost:8082/books");
    }

    #[test]
    fn test_path_lookup() {
        let config = ApiConfig::default();

        assert_eq!(config.path(Endpoint::Login), "/login");
        assert_eq!(config.path(Endpoint::Register), "/register");
        assert_eq!(config.path(Endpoint::Books), "/books");
    }

    #[test]
    fn test_toml_partial_override() {
        let config = ApiConfig::from_toml(
            r#"
            base_url = "https://books.example.com"
            "#,
        )
        .unwrap();

        assert_eq!(config.base_url, "https://books.example.com");
        // Endpoint map keeps its defaults
        assert_eq!(config.endpoints.login, "/login");
        assert_eq!(config.url(Endpoint::Books), "https://books.example.com/books");
    }

    #[test]
    fn test_toml_full_override() {
        let config = ApiConfig::from_toml(
            r#"
            base_url = "http://10.0.0.5:9000"

            [endpoints]
            login = "/api/login"
            register = "/api/register"
            books = "/api/books"
            "#,
        )
        .unwrap();

        assert_eq!(config.url(Endpoint::Register), "http://10.0.0.5:9000/api/register");
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(ApiConfig::from_toml("base_url = [not toml").is_err());
    }
}
