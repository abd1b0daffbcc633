//! Telemetry helpers for applications embedding `ephys-timeline`.
//!
//! Navigation transitions, discarded commands and degenerate geometry are
//! reported through `tracing`. Hosts either call one of the init helpers here
//! or install their own subscriber and filters.
//!
//! Levels used by the crate:
//! - `trace`: per-gesture bookkeeping (drags, wheel accumulation, throttling)
//! - `debug`: applied navigation commands
//! - `warn`: rejected commands, re-initialization conflicts, degenerate transforms

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Initializes a `tracing` subscriber from `RUST_LOG`, falling back to
/// [`DEFAULT_LOG_FILTER`].
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber was already installed by the host.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER));
        return install(filter);
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}

/// Like [`init_default_tracing`] but with an explicit filter directive such
/// as `"ephys_timeline=trace"`, ignoring `RUST_LOG`.
#[must_use]
pub fn init_tracing_with_filter(directives: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        return install(tracing_subscriber::EnvFilter::new(directives));
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = directives;
        false
    }
}

#[cfg(feature = "telemetry")]
fn install(filter: tracing_subscriber::EnvFilter) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .compact()
        .try_init()
        .is_ok()
}
