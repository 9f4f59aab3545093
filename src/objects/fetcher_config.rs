use super::FetchError;
use std::time::Duration;
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "https://uptodd.com/fetch-all-diets";

#[derive(Debug, Clone, PartialEq)]
pub struct FetcherConfig {
    pub endpoint: String,
    /// Longest wait for the next bit of progress: response headers, then the body.
    pub request_timeout: Duration,
    /// Upper bound for the whole request, waiting for connectivity included.
    pub resource_timeout: Duration,
    pub wait_for_connectivity: bool,
}

impl FetcherConfig {
    pub fn endpoint_url(&self) -> Result<Url, FetchError> {
        Url::parse(&self.endpoint).map_err(|e| FetchError::InvalidUrl(format!("{} ({})", self.endpoint, e)))
    }
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            endpoint: String::from(DEFAULT_ENDPOINT),
            request_timeout: Duration::from_secs(30),
            resource_timeout: Duration::from_secs(300),
            wait_for_connectivity: true,
        }
    }
}
