//! Opt-in log output for hosts that have no `tracing` subscriber of their own.
//!
//! Events emitted by the axis, all under the `chart_time_axis` target:
//! - `warn`: no tick level fits the axis width (once per pass),
//! - `debug`: the level picked by each selection and capped tick enumeration,
//! - `trace`: every per-level label fit check.
//!
//! Hosts with an existing subscriber need none of this; the events flow into
//! whatever filter they installed.

/// Filter used when `RUST_LOG` is unset: axis warnings only.
pub const DEFAULT_FILTER: &str = "chart_time_axis=warn";

/// Installs a compact fmt subscriber filtered by `RUST_LOG`, falling back to
/// [`DEFAULT_FILTER`].
///
/// Returns `false` without the `telemetry` feature or when a global
/// subscriber is already set.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_filter(DEFAULT_FILTER)
}

/// Like [`init_default_tracing`] with a caller-chosen fallback directive,
/// e.g. `"chart_time_axis=trace"` while tuning fonts against a catalog.
///
/// An unparsable fallback installs nothing and returns `false`.
#[must_use]
pub fn init_tracing_with_filter(fallback: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let Some(filter) = env_or_fallback_filter(fallback) else {
            return false;
        };
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .without_time()
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback;
        false
    }
}

#[cfg(feature = "telemetry")]
fn env_or_fallback_filter(fallback: &str) -> Option<tracing_subscriber::EnvFilter> {
    tracing_subscriber::EnvFilter::try_from_default_env()
        .ok()
        .or_else(|| tracing_subscriber::EnvFilter::try_new(fallback).ok())
}
