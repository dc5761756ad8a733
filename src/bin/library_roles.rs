//! Interface Segregation walkthrough.
//!
//! Three library roles exercise exactly the capabilities their traits grant
//! them. The guest can only search; the librarian maintains the catalog; the
//! registered user borrows and returns. No role drags along methods it
//! cannot use.

use solid_recipe::catalog::{
    BorrowBooks, GuestUser, Librarian, ManageCatalog, RegisteredUser, SearchBooks,
};
use solid_recipe::lifecycle::setup_tracing;
use tracing::info;

fn main() {
    setup_tracing();

    info!("Starting library roles demo");

    let guest = GuestUser;
    let librarian = Librarian;
    let member = RegisteredUser;

    guest.search_books("Software Engineering 101");

    librarian.search_books("The Hunger Games");
    librarian.add_book("Introduction to HTML");
    librarian.generate_reports();

    member.search_books("The Outsiders");
    member.borrow_book("Algorithms 101");
    member.return_book("Game Theory 101");
}
