//! folio-core: routing and API configuration for the folio book app
//!
//! Client-side navigation over a declarative route table, an
//! authentication guard driven by cookie presence, and the API endpoint
//! map consumed by the request-issuing layers.
//!
//! ## Shape
//! - `config` - base URL and endpoint map
//! - `routes` - the application route table and assembled navigator
//! - `guard` - navigation guards and the guard chain
//! - `session` - injected session-presence capability
//! - `cookie` - best-effort Cookie header parsing
//! - `navigator` - runs guards, resolves routes, binds `:id` params

#![forbid(unsafe_code)]
#![warn(clippy::all)]

pub mod config;
pub mod cookie;
pub mod error;
pub mod guard;
pub mod navigator;
pub mod routes;
pub mod session;

// Re-exports
pub use config::{ApiConfig, Endpoint, Endpoints};
pub use cookie::CookieJar;
pub use error::{Error, Result};
pub use guard::{AuthGuard, Guard, GuardChain, GuardOutcome};
pub use navigator::{Navigation, Navigator, ResolvedRoute};
pub use routes::{app_navigator, routes, Route, View};
pub use session::{CookieSession, SessionReader, USER_TOKEN_COOKIE};
