//! Fitness tracker: every principle at once, held together by the Observer
//! pattern.
//!
//! [`ActivityMonitor`] collects activity samples, hands them to an injected
//! [`ActivityStore`], then pushes them to zero or more injected
//! [`ActivityDisplay`] sinks. The monitor never names a concrete store or
//! display, so new sinks are added without touching it, and tests swap in
//! recording doubles through the same constructor.
//!
//! # Module Map
//!
//! - [`model`] - [`User`], [`ActivityKind`], and the [`Activity`] record
//! - [`storage`] - the persistence seam and the default [`DatabaseStore`]
//! - [`display`] - the notification seam and the default [`ConsoleDisplay`]
//! - [`monitor`] - the [`ActivityMonitor`] that wires them together

pub mod display;
pub mod error;
pub mod model;
pub mod monitor;
pub mod storage;

pub use display::*;
pub use error::*;
pub use model::*;
pub use monitor::*;
pub use storage::*;
