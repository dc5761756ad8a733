//! Interface Segregation: library access split into per-role capabilities.
//!
//! Instead of one wide `LibraryUser` interface that every visitor must
//! implement, each capability gets its own small trait. A role implements
//! exactly the subset it can actually perform:
//!
//! | Role | [`SearchBooks`] | [`ManageCatalog`] | [`BorrowBooks`] |
//! |------|-----------------|-------------------|-----------------|
//! | [`GuestUser`] | yes | | |
//! | [`Librarian`] | yes | yes | |
//! | [`RegisteredUser`] | yes | | yes |
//!
//! No role is forced to carry a method it cannot use, and functions can ask
//! for precisely the capability they need (`fn audit(staff: &impl
//! ManageCatalog)`).

use tracing::info;

/// Searching the catalog. The one capability every visitor shares.
pub trait SearchBooks {
    fn search_books(&self, query: &str);
}

/// Catalog maintenance, restricted to staff.
pub trait ManageCatalog {
    fn add_book(&self, title: &str);
    fn remove_book(&self, title: &str);
    fn generate_reports(&self);
}

/// Lending operations available to registered members.
pub trait BorrowBooks {
    fn borrow_book(&self, title: &str);
    fn return_book(&self, title: &str);
}

/// An anonymous visitor. Can look, nothing more.
pub struct GuestUser;

impl SearchBooks for GuestUser {
    fn search_books(&self, query: &str) {
        info!(%query, "Guest user searching for books");
    }
}

/// Library staff: searches plus full catalog maintenance.
pub struct Librarian;

impl SearchBooks for Librarian {
    fn search_books(&self, query: &str) {
        info!(%query, "Librarian searching for books");
    }
}

impl ManageCatalog for Librarian {
    fn add_book(&self, title: &str) {
        info!(%title, "Adding book to the catalog");
    }

    fn remove_book(&self, title: &str) {
        info!(%title, "Removing book from the catalog");
    }

    fn generate_reports(&self) {
        info!("Generating reports");
    }
}

/// A member with a library card: searches and borrows.
pub struct RegisteredUser;

impl SearchBooks for RegisteredUser {
    fn search_books(&self, query: &str) {
        info!(%query, "Registered user searching for books");
    }
}

impl BorrowBooks for RegisteredUser {
    fn borrow_book(&self, title: &str) {
        info!(%title, "Borrowing book");
    }

    fn return_book(&self, title: &str) {
        info!(%title, "Returning book");
    }
}
