//! Error types for folio-core

use thiserror::Error;

/// Result type alias for folio operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the folio navigation core
#[derive(Debug, Error)]
pub enum Error {
    /// Route table construction failed
    #[error(transparent)]
    Router(#[from] folio_router::RouterError),

    /// Two route table entries share a name
    #[error("duplicate route name: {0}")]
    DuplicateRouteName(String),

    /// Navigation target matches no route
    #[error("no route matches path: {0}")]
    RouteNotFound(String),

    /// Guards kept redirecting without settling on a route
    #[error("redirect loop while navigating to {0}")]
    RedirectLoop(String),

    /// IO error while reading a configuration file
    #[error("config IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file did not parse
    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}
