//! # Tracing Setup
//!
//! Structured logging for every process built on the runtime. Actors log their
//! lifecycle (`Actor started`, `Created`, `Shutdown`) with an `entity_type`
//! field, so module paths are hidden with `with_target(false)`.
//!
//! ```bash
//! RUST_LOG=info cargo run     # one line per state change
//! RUST_LOG=debug cargo run    # request payloads as well
//! RUST_LOG=order_service=debug,resource_actor=warn cargo run
//! ```

/// Installs the global `fmt` subscriber filtered by `RUST_LOG`.
///
/// Call once at process start. Panics if a global subscriber is already set.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}

/// Installs a subscriber that writes through the test harness capture.
///
/// Safe to call from every test; only the first call takes effect.
pub fn setup_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_test_writer()
        .try_init();
}
