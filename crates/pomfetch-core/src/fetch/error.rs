//! Error for one GET against one repository.

/// Why a single mirror attempt missed. Always absorbed by the fallback loop.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Curl reported an error (connection refused, DNS, TLS, ...).
    #[error("GET {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: curl::Error,
    },
    /// The server answered with anything other than 200.
    #[error("GET {url} returned HTTP {code}")]
    Http { url: String, code: u32 },
}

impl FetchError {
    /// HTTP status when the server answered; `None` for transport failures.
    pub fn status(&self) -> Option<u32> {
        match self {
            FetchError::Http { code, .. } => Some(*code),
            FetchError::Transport { .. } => None,
        }
    }
}
