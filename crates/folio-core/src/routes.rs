//! Application route table
//!
//! Five routes, matching the shipped UI: login, register, the bookstore,
//! the book detail page, and the reader.

use crate::error::Result;
use crate::guard::{AuthGuard, GuardChain};
use crate::navigator::Navigator;
use crate::session::SessionReader;

/// Views the application can render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Login,
    Register,
    BookStore,
    BookDetail,
    ReadBook,
}

/// Route table entry
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Path pattern, `:id` binding one dynamic segment
    pub path: String,
    /// Route name, unique within a table
    pub name: String,
    /// View rendered when the route resolves
    pub view: View,
}

impl Route {
    pub fn new(path: impl Into<String>, name: impl Into<String>, view: View) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            view,
        }
    }
}

/// The application route table
pub fn routes() -> Vec<Route> {
    vec![
        Route::new("/", "Login", View::Login),
        Route::new("/register", "Register", View::Register),
        Route::new("/bookstore", "BookStore", View::BookStore),
        Route::new("/book/:id", "BookDetail", View::BookDetail),
        Route::new("/read/:id", "ReadBook", View::ReadBook),
    ]
}

/// Assembled application navigator: the route table plus the auth guard
pub fn app_navigator<S: SessionReader + 'static>(session: S) -> Result<Navigator> {
    let mut guards = GuardChain::new();
    guards.add(AuthGuard::new(session));
    Navigator::with_guards(routes(), guards)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_table_entries() {
        let table = routes();

        assert_eq!(table.len(), 5);
        assert_eq!(table[0], Route::new("/", "Login", View::Login));
        assert_eq!(table[1], Route::new("/register", "Register", View::Register));
        assert_eq!(table[2], Route::new("/bookstore", "BookStore", View::BookStore));
        assert_eq!(table[3], Route::new("/book/:id", "BookDetail", View::BookDetail));
        assert_eq!(table[4], Route::new("/read/:id", "ReadBook", View::ReadBook));
    }

    #[test]
    fn test_route_names_unique() {
        let table = routes();
        let mut names: Vec<&str> = table.iter().map(|r| r.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();

        assert_eq!(names.len(), table.len());
    }
}
