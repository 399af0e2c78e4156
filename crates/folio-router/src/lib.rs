//! folio-router: Radix Trie path router for client-side navigation
//!
//! Single Source of Truth (SSOT) router used by folio-core to resolve
//! navigation targets to route table entries.
//!
//! ## Features
//! - O(k) path lookup via matchit, where k = path length
//! - Static paths: `/register`, `/bookstore`
//! - Parameters: `/book/:id`, `/read/:id`
//! - No HTTP method dimension: navigation targets are paths, nothing else
//!
//! ## Path Syntax
//! - `:name` - Named parameter (captures one segment)
//!
//! ## Priority
//! 1. Exact static match (highest)
//! 2. Parameter match
//!
//! ## Example
//! ```
//! use folio_router::Router;
//!
//! let mut router = Router::new();
//! router.insert("/bookstore", 0).unwrap();
//! router.insert("/book/:id", 1).unwrap();
//!
//! let m = router.at("/book/42").unwrap();
//! assert_eq!(m.value, 1);
//! assert_eq!(m.params.get("id"), Some(&"42".to_string()));
//! ```

use std::collections::HashMap;
use thiserror::Error;

/// Errors raised while building the route table
#[derive(Debug, Error)]
pub enum RouterError {
    /// Pattern is malformed (empty parameter name, stray `{`/`}`)
    #[error("invalid route pattern {pattern}: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// Pattern collides with one already registered
    #[error("conflicting route pattern {pattern}: {reason}")]
    Conflict { pattern: String, reason: String },
}

/// Route match result
#[derive(Debug, Clone, PartialEq)]
pub struct RouteMatch<T> {
    /// The matched route table value
    pub value: T,
    /// Captured path parameters as name -> value
    pub params: HashMap<String, String>,
}

/// Path router
///
/// Patterns are matched using a radix trie for O(k) lookup. Static
/// segments take priority over parameter segments.
pub struct Router<T> {
    inner: matchit::Router<T>,
}

impl<T: Clone> Default for Router<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Router<T> {
    /// Create a new router
    pub fn new() -> Self {
        Self {
            inner: matchit::Router::new(),
        }
    }

    /// Insert a route pattern
    ///
    /// # Arguments
    /// * `pattern` - URL path with optional `:name` parameter segments
    /// * `value` - Route table value returned on match
    ///
    /// # Example
    /// ```
    /// use folio_router::Router;
    ///
    /// let mut router = Router::new();
    /// router.insert("/", 0).unwrap();
    /// router.insert("/read/:id", 1).unwrap();
    /// ```
    pub fn insert(&mut self, pattern: &str, value: T) -> Result<(), RouterError> {
        let normalized = normalize_pattern(pattern)?;
        self.inner
            .insert(normalized, value)
            .map_err(|e| RouterError::Conflict {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            })
    }

    /// Find a matching route
    ///
    /// Trailing slashes are ignored, so `/bookstore/` resolves the same
    /// way as `/bookstore`.
    ///
    /// # Returns
    /// `Some(RouteMatch)` with the stored value and captured params, or
    /// `None` if no pattern matches
    pub fn at(&self, path: &str) -> Option<RouteMatch<T>> {
        let path = trim_trailing_slash(path);
        self.inner.at(path).ok().map(|matched| {
            let params = matched
                .params
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
            RouteMatch {
                value: matched.value.clone(),
                params,
            }
        })
    }
}

/// Convert `:name` segments to matchit's `{name}` syntax
fn normalize_pattern(pattern: &str) -> Result<String, RouterError> {
    if !pattern.starts_with('/') {
        return Err(RouterError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: "pattern must start with '/'".to_string(),
        });
    }

    let mut segments = Vec::new();
    for segment in pattern.split('/') {
        if let Some(name) = segment.strip_prefix(':') {
            if name.is_empty() {
                return Err(RouterError::InvalidPattern {
                    pattern: pattern.to_string(),
                    reason: "parameter segment has no name".to_string(),
                });
            }
            segments.push(format!("{{{name}}}"));
        } else {
            if segment.contains(['{', '}', ':']) {
                return Err(RouterError::InvalidPattern {
                    pattern: pattern.to_string(),
                    reason: format!("unexpected character in segment {segment:?}"),
                });
            }
            segments.push(segment.to_string());
        }
    }

    let normalized = segments.join("/");
    Ok(trim_trailing_slash(&normalized).to_string())
}

fn trim_trailing_slash(path: &str) -> &str {
    if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_routes() {
        let mut router = Router::new();
        router.insert("/", 0).unwrap();
        router.insert("/register", 1).unwrap();
        router.insert("/bookstore", 2).unwrap();

        assert_eq!(router.at("/").unwrap().value, 0);
        assert_eq!(router.at("/register").unwrap().value, 1);
        assert_eq!(router.at("/bookstore").unwrap().value, 2);
        assert!(router.at("/unknown").is_none());
    }

    #[test]
    fn test_param_routes() {
        let mut router = Router::new();
        router.insert("/book/:id", 1).unwrap();
        router.insert("/book/:id/chapter/:chapter_id", 2).unwrap();

        let m = router.at("/book/42").unwrap();
        assert_eq!(m.value, 1);
        assert_eq!(m.params.get("id"), Some(&"42".to_string()));

        let m = router.at("/book/42/chapter/7").unwrap();
        assert_eq!(m.value, 2);
        assert_eq!(m.params.get("id"), Some(&"42".to_string()));
        assert_eq!(m.params.get("chapter_id"), Some(&"7".to_string()));
    }

    #[test]
    fn test_param_does_not_span_segments() {
        let mut router = Router::new();
        router.insert("/book/:id", 1).unwrap();

        assert!(router.at("/book").is_none());
        assert!(router.at("/book/42/extra").is_none());
    }

    #[test]
    fn test_priority_exact_over_param() {
        let mut router = Router::new();
        router.insert("/book/:id", 1).unwrap();
        router.insert("/book/new", 2).unwrap();

        // Exact match should win over parameter
        assert_eq!(router.at("/book/new").unwrap().value, 2);
        assert_eq!(router.at("/book/123").unwrap().value, 1);
    }

    #[test]
    fn test_conflicting_patterns() {
        let mut router = Router::new();
        router.insert("/bookstore", 1).unwrap();

        assert!(matches!(
            router.insert("/bookstore", 2),
            Err(RouterError::Conflict { .. })
        ));
    }

    #[test]
    fn test_invalid_patterns() {
        let mut router: Router<u32> = Router::new();

        assert!(matches!(
            router.insert("book/:id", 1),
            Err(RouterError::InvalidPattern { .. })
        ));
        assert!(matches!(
            router.insert("/book/:", 1),
            Err(RouterError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_root_path() {
        let mut router = Router::new();
        router.insert("/", 0).unwrap();
        router.insert("/bookstore", 1).unwrap();

        assert_eq!(router.at("/").unwrap().value, 0);
        assert_eq!(router.at("/bookstore").unwrap().value, 1);
    }

    #[test]
    fn test_trailing_slash() {
        let mut router = Router::new();
        router.insert("/bookstore", 1).unwrap();

        assert_eq!(router.at("/bookstore").unwrap().value, 1);
        assert_eq!(router.at("/bookstore/").unwrap().value, 1);
    }

    #[test]
    fn test_string_values() {
        let mut router: Router<&str> = Router::new();
        router.insert("/read/:id", "ReadBook").unwrap();

        let m = router.at("/read/7").unwrap();
        assert_eq!(m.value, "ReadBook");
        assert_eq!(m.params.get("id"), Some(&"7".to_string()));
    }
}
