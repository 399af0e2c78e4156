//! Navigation guards
//!
//! Guards run before a navigation completes and decide whether it
//! proceeds, redirects elsewhere, or aborts.

use crate::session::SessionReader;

/// Decision produced by a guard for one navigation attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Continue to the requested path
    Proceed,
    /// Continue to this path instead
    Redirect(String),
    /// Cancel the navigation
    Abort,
}

/// Navigation guard - inspects a navigation before it completes
pub trait Guard: Send + Sync {
    /// Decide the outcome for a navigation from `from` to `to`
    fn check(&self, to: &str, from: &str) -> GuardOutcome;
}

/// Guard chain
///
/// Guards run in registration order; the first non-proceed outcome wins,
/// so each navigation attempt yields exactly one decision.
pub struct GuardChain {
    guards: Vec<Box<dyn Guard>>,
}

impl GuardChain {
    pub fn new() -> Self {
        Self { guards: Vec::new() }
    }

    pub fn add<G: Guard + 'static>(&mut self, guard: G) {
        self.guards.push(Box::new(guard));
    }

    /// Run the chain for a navigation attempt
    pub fn run(&self, to: &str, from: &str) -> GuardOutcome {
        for guard in &self.guards {
            match guard.check(to, from) {
                GuardOutcome::Proceed => continue,
                outcome => return outcome,
            }
        }
        GuardOutcome::Proceed
    }

    pub fn len(&self) -> usize {
        self.guards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guards.is_empty()
    }
}

impl Default for GuardChain {
    fn default() -> Self {
        Self::new()
    }
}

/// Authentication guard
///
/// Redirects navigations to protected paths when no session token is
/// present. Presence alone authorizes; the token value is never
/// inspected.
pub struct AuthGuard<S: SessionReader> {
    protected: Vec<String>,
    redirect_to: String,
    session: S,
}

impl<S: SessionReader> AuthGuard<S> {
    /// Guard protecting `/bookstore`, redirecting to `/`
    ///
    /// Only the bookstore page is protected; the book detail and reader
    /// pages are deliberately left as shipped. Use [`AuthGuard::protect`]
    /// to widen the set.
    pub fn new(session: S) -> Self {
        Self {
            protected: vec!["/bookstore".to_string()],
            redirect_to: "/".to_string(),
            session,
        }
    }

    /// Add a protected path
    pub fn protect(mut self, path: impl Into<String>) -> Self {
        self.protected.push(path.into());
        self
    }

    /// Override the redirect target
    pub fn redirect_to(mut self, path: impl Into<String>) -> Self {
        self.redirect_to = path.into();
        self
    }
}

impl<S: SessionReader> Guard for AuthGuard<S> {
    fn check(&self, to: &str, _from: &str) -> GuardOutcome {
        if self.protected.iter().any(|p| p == to) && !self.session.has_token() {
            tracing::debug!(path = to, "no session token, redirecting");
            return GuardOutcome::Redirect(self.redirect_to.clone());
        }
        GuardOutcome::Proceed
    }
}
