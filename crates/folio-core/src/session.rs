//! Session observation
//!
//! Navigation never owns a session; it only observes whether a token is
//! present. [`SessionReader`] is the injected capability that keeps the
//! guard's redirect logic testable without a real cookie store.

use crate::cookie::CookieJar;

/// Cookie that carries the session token
pub const USER_TOKEN_COOKIE: &str = "userToken";

/// Read-only view of the ambient session
pub trait SessionReader: Send + Sync {
    /// Current session token, or `None` when no session is present
    fn token(&self) -> Option<String>;

    /// Token presence alone signals an authenticated session
    fn has_token(&self) -> bool {
        self.token().is_some()
    }
}

/// Session reader backed by a cookie header source
///
/// The source is consulted on every call, so the token is read fresh per
/// navigation attempt and never cached. An empty cookie value counts as
/// no session.
pub struct CookieSession<F>
where
    F: Fn() -> String + Send + Sync,
{
    cookie_name: String,
    source: F,
}

impl<F> CookieSession<F>
where
    F: Fn() -> String + Send + Sync,
{
    /// Session reader for the standard `userToken` cookie
    pub fn new(source: F) -> Self {
        Self::named(USER_TOKEN_COOKIE, source)
    }

    /// Session reader for a custom cookie name
    pub fn named(cookie_name: impl Into<String>, source: F) -> Self {
        Self {
            cookie_name: cookie_name.into(),
            source,
        }
    }
}

impl<F> SessionReader for CookieSession<F>
where
    F: Fn() -> String + Send + Sync,
{
    fn token(&self) -> Option<String> {
        let header = (self.source)();
        CookieJar::parse(&header)
            .get(&self.cookie_name)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    }
}
