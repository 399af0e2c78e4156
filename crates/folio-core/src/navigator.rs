//! Navigation engine
//!
//! Runs the guard chain for a navigation target, then resolves the
//! target against the route table.

use std::collections::{HashMap, HashSet};

use folio_router::Router;

use crate::error::{Error, Result};
use crate::guard::{Guard, GuardChain, GuardOutcome};
use crate::routes::Route;

/// Guard redirects tolerated before declaring a loop
const MAX_REDIRECTS: usize = 8;

/// A route resolved for a concrete path
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRoute {
    pub route: Route,
    /// Dynamic parameters bound at navigation time
    pub params: HashMap<String, String>,
}

/// Outcome of a navigation attempt
#[derive(Debug, Clone, PartialEq)]
pub enum Navigation {
    /// Guards allowed the navigation as requested
    Done(ResolvedRoute),
    /// A guard redirected; `resolved` is the route for the final target
    Redirected { to: String, resolved: ResolvedRoute },
    /// A guard cancelled the navigation
    Aborted,
}

/// Drives navigation attempts over a route table and guard chain
pub struct Navigator {
    router: Router<Route>,
    guards: GuardChain,
}

impl Navigator {
    /// Build a navigator over a route table, with no guards
    pub fn new(routes: Vec<Route>) -> Result<Self> {
        Self::with_guards(routes, GuardChain::new())
    }

    /// Build a navigator over a route table and guard chain
    ///
    /// Route names must be unique within the table.
    pub fn with_guards(routes: Vec<Route>, guards: GuardChain) -> Result<Self> {
        let mut router = Router::new();
        let mut names = HashSet::new();

        for route in routes {
            if !names.insert(route.name.clone()) {
                return Err(Error::DuplicateRouteName(route.name));
            }
            let pattern = route.path.clone();
            router.insert(&pattern, route)?;
        }

        Ok(Self { router, guards })
    }

    /// Register an additional guard
    pub fn add_guard<G: Guard + 'static>(&mut self, guard: G) {
        self.guards.add(guard);
    }

    /// Resolve a path against the route table, bypassing guards
    pub fn resolve(&self, path: &str) -> Option<ResolvedRoute> {
        self.router.at(path).map(|m| ResolvedRoute {
            route: m.value,
            params: m.params,
        })
    }

    /// Run one navigation attempt from `from` to `to`
    ///
    /// Guards run first. A redirect outcome starts a fresh guard run for
    /// the redirect target with the same `from`, as the host framework
    /// would for a new navigation. A final target matching no route is
    /// [`Error::RouteNotFound`].
    pub fn navigate(&self, to: &str, from: &str) -> Result<Navigation> {
        let mut target = to.to_string();
        let mut hops = 0usize;

        loop {
            match self.guards.run(&target, from) {
                GuardOutcome::Proceed => {
                    let resolved = self
                        .resolve(&target)
                        .ok_or_else(|| Error::RouteNotFound(target.clone()))?;
                    tracing::debug!(path = %target, route = %resolved.route.name, "navigation resolved");
                    return Ok(if hops == 0 {
                        Navigation::Done(resolved)
                    } else {
                        Navigation::Redirected { to: target, resolved }
                    });
                }
                GuardOutcome::Redirect(next) => {
                    hops += 1;
                    if hops > MAX_REDIRECTS {
                        tracing::warn!(path = to, "guard redirect limit exceeded");
                        return Err(Error::RedirectLoop(to.to_string()));
                    }
                    tracing::debug!(from = %target, to = %next, "guard redirected navigation");
                    target = next;
                }
                GuardOutcome::Abort => {
                    tracing::debug!(path = %target, "navigation aborted by guard");
                    return Ok(Navigation::Aborted);
                }
            }
        }
    }
}
