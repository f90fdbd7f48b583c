//! Structured logging via **tracing**.
//!
//! The passes emit debug events for every skipped (unresolvable)
//! reference and an info summary per pass, so a host can audit why a
//! finding did or did not appear. The JSON subscriber keeps stdout clean
//! for tool output.

/// Initializes the global tracing collector (subscriber).
///
/// Call *once* at the beginning of the host's runtime. Configures
/// structured JSON output to stderr.
///
/// # Environment Variables
/// - `RUST_LOG`: Controls log filtering (e.g., `RUST_LOG=straycheck=debug`)
pub fn init_structured_logging() {
    tracing_subscriber::fmt()
        .json()
        .with_ansi(false)
        .with_level(true)
        .with_target(true)
        .with_current_span(true)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
