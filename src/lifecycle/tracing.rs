//! # Observability & Tracing
//!
//! Every demo binary talks to the console through the `tracing` crate rather
//! than raw prints, so output carries structured fields that can be filtered
//! by level.
//!
//! ## Configuration
//!
//! [`setup_tracing`] installs a compact subscriber that hides the
//! crate/module prefix (`with_target(false)`); the demo names are already in
//! the span names, so the prefix is noise.
//!
//! Log levels come from the `RUST_LOG` environment variable:
//!
//! ```bash
//! # Compact walkthrough output
//! RUST_LOG=info cargo run --bin order_pipeline
//!
//! # Show full payloads recorded at function entry points
//! RUST_LOG=debug cargo run --bin fitness_tracker
//! ```
//!
//! ## What Gets Traced
//!
//! - **Computed results**: areas, order totals
//! - **Side effects**: confirmation emails, inventory refreshes, stored
//!   activities, display notifications
//! - **Failures**: validation and authentication errors with their context

/// Initializes the global tracing subscriber for a demo binary.
///
/// Call this once, first thing in `main`. Panics if a subscriber is already
/// installed, which only happens if a binary calls it twice.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Demo names live in span names already
        .compact()
        .init();
}
