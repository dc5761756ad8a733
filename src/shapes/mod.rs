//! Geometric shapes behind trait seams, in two layers.
//!
//! [`area`] is the Open/Closed demo: the [`Shape`] trait is the extension
//! point, and code consuming `&dyn Shape` never changes when a new shape
//! arrives.
//!
//! [`scalable`] is the Liskov Substitution demo: [`ScalableShape`] adds
//! width/height setters with a documented contract, and [`area::Circle`]
//! deliberately breaks it by aliasing both setters to its radius. The
//! violation is the demonstration, not a bug to fix.

pub mod area;
pub mod scalable;

pub use area::*;
pub use scalable::*;
