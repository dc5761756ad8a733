//! Shared runtime setup for the demo binaries.
//!
//! The demos are deliberately independent of each other; the only thing they
//! share is how they talk to the console. This module owns that one concern.
//!
//! # Main Components
//!
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod tracing;

pub use tracing::*;
