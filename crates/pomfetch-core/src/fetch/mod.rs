//! Single-repository fetch.
//!
//! [`try_repo`] issues one GET for `{repo}/{path}` and classifies the outcome.
//! Misses are handed to a [`FailureReporter`] and turned into `None`; they are
//! never surfaced as errors.

mod error;
mod reporter;
mod transport;

pub use error::FetchError;
pub use reporter::{FailureReporter, TracingReporter};
pub use transport::{CurlTransport, Transport};

/// A document fetched from one repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetcherResult {
    /// Full URL that answered 200.
    pub url: String,
    /// Repository base URL the document came from.
    pub repo: String,
    /// Response body, read to completion.
    pub data: Vec<u8>,
}

/// Builds `{repo}/{path}`.
pub fn artifact_url(repo: &str, path: &str) -> String {
    format!("{}/{}", repo, path)
}

/// One attempt against one repository. Reports the failure and returns `None` on a miss.
pub fn try_repo(
    transport: &dyn Transport,
    reporter: &dyn FailureReporter,
    repo: &str,
    path: &str,
) -> Option<FetcherResult> {
    let url = artifact_url(repo, path);
    match transport.get(&url) {
        Ok(data) => Some(FetcherResult {
            url,
            repo: repo.to_string(),
            data,
        }),
        Err(e) => {
            reporter.report(repo, &e);
            None
        }
    }
}
