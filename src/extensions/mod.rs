//! Host-facing hooks layered on top of the navigation core.

pub mod observers;

pub use observers::{NavigationEvent, NavigationObserver, diff_events};
