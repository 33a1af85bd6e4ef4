//! Blocking HTTP GET used for every mirror attempt.
//!
//! Uses the curl crate (libcurl). One `Easy` handle per request; the body is
//! buffered in memory. No timeouts are set: a hanging mirror holds exactly
//! one pool worker.

use super::FetchError;
use crate::config::PomfetchConfig;

/// One blocking GET. `Ok` only for HTTP 200; any other status is `FetchError::Http`.
pub trait Transport: Send + Sync {
    fn get(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

/// libcurl-backed transport.
#[derive(Debug, Clone)]
pub struct CurlTransport {
    user_agent: Option<String>,
    follow_redirects: bool,
}

impl Default for CurlTransport {
    fn default() -> Self {
        Self {
            user_agent: None,
            follow_redirects: true,
        }
    }
}

impl CurlTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(cfg: &PomfetchConfig) -> Self {
        Self {
            user_agent: cfg.user_agent.clone(),
            follow_redirects: cfg.follow_redirects,
        }
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

impl Transport for CurlTransport {
    fn get(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let curl_err = |source: curl::Error| FetchError::Transport {
            url: url.to_string(),
            source,
        };

        let mut body = Vec::new();
        let mut easy = curl::easy::Easy::new();
        easy.url(url).map_err(curl_err)?;
        easy.get(true).map_err(curl_err)?;
        easy.follow_location(self.follow_redirects).map_err(curl_err)?;
        if self.follow_redirects {
            easy.max_redirections(10).map_err(curl_err)?;
        }
        if let Some(ua) = &self.user_agent {
            easy.useragent(ua).map_err(curl_err)?;
        }

        {
            let mut transfer = easy.transfer();
            transfer
                .write_function(|data| {
                    body.extend_from_slice(data);
                    Ok(data.len())
                })
                .map_err(curl_err)?;
            transfer.perform().map_err(curl_err)?;
        }

        let code = easy.response_code().map_err(curl_err)?;
        if code != 200 {
            return Err(FetchError::Http {
                url: url.to_string(),
                code,
            });
        }
        tracing::debug!("GET {} -> {} bytes", url, body.len());
        Ok(body)
    }
}
