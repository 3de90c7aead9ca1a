use crate::error::Result;
use std::time::Duration;
use url::Url;

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_OUTPUT_FILE: &str = "portfolio.html";
pub const DEFAULT_VERIFY_USERNAME: &str = "octocat";

/// Settings for the HTTP client talking to the GitHub REST API.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_base_url: Url,
    pub timeout: Duration,
    pub user_agent: String,
}

impl ClientConfig {
    pub fn new(api_base_url: &str, timeout_secs: u64) -> Result<Self> {
        Ok(Self {
            api_base_url: Url::parse(api_base_url)?,
            timeout: Duration::from_secs(timeout_secs),
            ..Default::default()
        })
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: Url::parse(DEFAULT_API_URL).expect("default API URL is valid"),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: format!("GitHub Portfolio/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}
