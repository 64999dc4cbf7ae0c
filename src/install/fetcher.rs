//! Remote retrieval of agent documents.

use crate::config::AGENTS_BASE_URL;
use std::time::Duration;
use thiserror::Error;
use ureq::Agent;

/// Why a fetch did not produce a document
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchFailure {
    #[error("HTTP {0}")]
    Status(u16),

    #[error("request timed out")]
    Timeout,

    #[error("network error: {0}")]
    Transport(String),
}

impl From<ureq::Error> for FetchFailure {
    fn from(e: ureq::Error) -> Self {
        match e {
            ureq::Error::StatusCode(code) => FetchFailure::Status(code),
            ureq::Error::Timeout(_) => FetchFailure::Timeout,
            ureq::Error::Io(ref io) if io.kind() == std::io::ErrorKind::TimedOut => {
                FetchFailure::Timeout
            }
            other => FetchFailure::Transport(other.to_string()),
        }
    }
}

/// Source of agent documents. One call, one attempt.
pub trait Fetcher {
    fn fetch(&self, id: &str) -> Result<String, FetchFailure>;
}

impl<F: Fetcher + ?Sized> Fetcher for &F {
    fn fetch(&self, id: &str) -> Result<String, FetchFailure> {
        (**self).fetch(id)
    }
}

/// URL of an agent document under a base location
pub fn agent_url(base: &str, id: &str) -> String {
    format!("{}/agents/{}.md", base.trim_end_matches('/'), id)
}

/// Fetches documents over HTTPS from the fixed agents repository.
pub struct HttpFetcher {
    base_url: String,
    agent: Agent,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Self {
        Self::build(AGENTS_BASE_URL.to_string(), timeout)
    }

    #[cfg(test)]
    fn with_base_url(base_url: &str, timeout: Duration) -> Self {
        Self::build(base_url.to_string(), timeout)
    }

    fn build(base_url: String, timeout: Duration) -> Self {
        let config = Agent::config_builder()
            .timeout_global(Some(timeout))
            .build();

        Self {
            base_url,
            agent: config.into(),
        }
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, id: &str) -> Result<String, FetchFailure> {
        let url = agent_url(&self.base_url, id);
        tracing::debug!(%url, "fetching agent document");

        let mut response = self.agent.get(&url).call()?;

        // Anything but 200 is a failure, even other 2xx codes
        let status = response.status().as_u16();
        if status != 200 {
            return Err(FetchFailure::Status(status));
        }

        let body = response.body_mut().read_to_string()?;
        tracing::debug!(bytes = body.len(), "fetched agent document");
        Ok(body)
    }
}
