//! Where absorbed per-mirror failures go.

use super::FetchError;

/// Receives every failed mirror attempt. Failures are routine during fallback,
/// so the reporter only observes them; it cannot stop the walk.
pub trait FailureReporter: Send + Sync {
    fn report(&self, repo: &str, error: &FetchError);
}

/// Logs `Failed to fetch: <error>` at warn level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl FailureReporter for TracingReporter {
    fn report(&self, repo: &str, error: &FetchError) {
        tracing::warn!(repo, "Failed to fetch: {}", error);
    }
}
