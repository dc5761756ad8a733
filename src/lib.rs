#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # SOLID Recipe
//!
//! > **A Recipe for the SOLID principles in idiomatic Rust.**
//!
//! This crate is a collection of small, self-contained demos, one per SOLID
//! principle, plus a fitness tracker that combines all five with
//! Observer-style notification. Each demo ships as its own binary under
//! `src/bin/`; the library modules hold the types and functions, the binaries
//! hold the hard-coded walkthroughs.
//!
//! ## 🗺️ Module Tour
//!
//! | Module | Binary | Principle |
//! |--------|--------|-----------|
//! | [`order`] | `order_pipeline` | **S**ingle Responsibility: pricing, validation, and notification split into collaborators with one reason to change each. |
//! | [`shapes::area`] | `shape_areas` | **O**pen/Closed: new shapes implement [`Shape`](shapes::Shape); consumers of `&dyn Shape` never change. |
//! | [`shapes::scalable`] | `scalable_shapes` | **L**iskov Substitution: every [`ScalableShape`](shapes::ScalableShape) promises independent width and height, and `Circle` deliberately breaks the promise to show why the contract matters. |
//! | [`catalog`] | `library_roles` | **I**nterface Segregation: library access split into per-role capability traits, so no role carries methods it cannot use. |
//! | [`auth`] | `auth_strategies` | **D**ependency Inversion: [`LoginService`](auth::LoginService) depends on the [`Authenticator`](auth::Authenticator) abstraction, never on a concrete strategy. |
//! | [`tracker`] | `fitness_tracker` | All five at once: an [`ActivityMonitor`](tracker::ActivityMonitor) with injected storage and display sinks, notified observer-style. |
//!
//! The demos are independent. [`lifecycle`] is the only shared code: it sets
//! up the `tracing` subscriber every binary uses for console output.
//!
//! ## 🚀 Running the Demos
//!
//! ```bash
//! # Pick any demo binary
//! RUST_LOG=info cargo run --bin fitness_tracker
//! RUST_LOG=info cargo run --bin order_pipeline
//!
//! # Show full payloads
//! RUST_LOG=debug cargo run --bin auth_strategies
//! ```
//!
//! ## 🧪 Testing
//!
//! Closed-form arithmetic and parsing are pinned by `#[cfg(test)]` modules
//! next to the code; whole-demo flows (including notification fan-out against
//! recording test doubles) live in `tests/`.
//!
//! ```bash
//! cargo test
//! ```

pub mod auth;
pub mod catalog;
pub mod lifecycle;
pub mod order;
pub mod shapes;
pub mod tracker;
