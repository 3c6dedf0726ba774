//! Telemetry helpers for hosts embedding `multi-axis-rs`.
//!
//! The engine only emits `tracing` events (registrations, auto-range flips,
//! applied envelopes, signal delivery at `trace`). Installing a subscriber is
//! left to the host; `init_default_tracing` covers the common case.

/// Initializes a compact `tracing` subscriber when the `telemetry` feature is enabled.
///
/// The filter comes from `RUST_LOG` and falls back to `info`. Returns `false`
/// when the feature is disabled or a global subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
