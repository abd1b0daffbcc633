//! ephys-timeline: time navigation for multi-panel electrophysiology views.
//!
//! Views under one root share a single immutable `TimeWindowState`. Input is
//! turned into `TimeWindowCommand`s, reduced by the pure `transition`
//! function, and the resulting window is projected to pixels and axis ticks.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod telemetry;

pub use api::{TimeNavigator, TimeNavigatorConfig};
pub use error::{TimelineError, TimelineResult};
