use crate::config::ClientConfig;
use crate::error::{PortfolioError, Result};
use crate::fetcher::{RepoPageSource, PER_PAGE};
use crate::types::{GitHubRepo, RepoPage};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, ACCEPT, LINK};
use reqwest::{Client, Response, StatusCode};
use tracing::{debug, warn};
use url::Url;

const API_VERSION: &str = "2022-11-28";
const LOW_RATE_LIMIT: u64 = 10;

pub struct GitHubClient {
    client: Client,
    base_url: Url,
}

impl GitHubClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()?;

        Ok(GitHubClient {
            client,
            base_url: config.api_base_url.clone(),
        })
    }

    /// URL of one page of `GET /users/{username}/repos`, sorted by stars.
    pub fn repos_page_url(&self, username: &str, page: u32) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                PortfolioError::ApiError(format!("Base URL cannot take a path: {}", self.base_url))
            })?
            .pop_if_empty()
            .extend(&["users", username, "repos"]);
        url.query_pairs_mut()
            .append_pair("page", &page.to_string())
            .append_pair("per_page", &PER_PAGE.to_string())
            .append_pair("sort", "stars")
            .append_pair("direction", "desc");
        Ok(url)
    }

    async fn make_request(&self, url: Url) -> Result<Response> {
        let response = self
            .client
            .get(url.clone())
            .header(ACCEPT, "application/vnd.github.v3+json")
            .header("X-GitHub-Api-Version", API_VERSION)
            .send()
            .await?;

        let rate_limit_remaining = header_u64(response.headers(), "X-RateLimit-Remaining");

        match response.status() {
            status if status.is_success() => {
                if let Some(remaining) = rate_limit_remaining {
                    if remaining < LOW_RATE_LIMIT {
                        warn!(remaining, "GitHub rate limit is low");
                    }
                }
                Ok(response)
            }
            StatusCode::NOT_FOUND => Err(PortfolioError::NotFound(url.to_string())),
            StatusCode::FORBIDDEN if rate_limit_remaining == Some(0) => {
                let reset = header_u64(response.headers(), "X-RateLimit-Reset").unwrap_or(0);
                Err(PortfolioError::RateLimitExceeded(format!(
                    "API rate limit exceeded. Resets at unix time {}",
                    reset
                )))
            }
            status => {
                let error_text = response.text().await.unwrap_or_default();
                Err(PortfolioError::ApiError(format!(
                    "API request failed with status {}: {}",
                    status, error_text
                )))
            }
        }
    }
}

#[async_trait]
impl RepoPageSource for GitHubClient {
    async fn fetch_page(&self, username: &str, page: u32) -> Result<RepoPage> {
        let url = self.repos_page_url(username, page)?;
        debug!(%url, page, "Requesting repositories page");

        let response = self.make_request(url).await?;
        let has_next = response
            .headers()
            .get(LINK)
            .and_then(|h| h.to_str().ok())
            .map(has_next_link)
            .unwrap_or(false);

        let body = response.text().await?;
        let repos: Vec<GitHubRepo> = serde_json::from_str(&body)?;
        Ok(RepoPage { repos, has_next })
    }
}

fn header_u64(headers: &HeaderMap, name: &str) -> Option<u64> {
    headers
        .get(name)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.trim().parse::<u64>().ok())
}

/// Whether an RFC 8288 `Link` header value carries a `rel="next"` target.
pub fn has_next_link(header: &str) -> bool {
    header.split(',').any(|link| {
        link.split(';').skip(1).any(|param| {
            let Some((key, value)) = param.split_once('=') else {
                return false;
            };
            key.trim().eq_ignore_ascii_case("rel")
                && value
                    .trim()
                    .trim_matches('"')
                    .split_whitespace()
                    .any(|rel| rel.eq_ignore_ascii_case("next"))
        })
    })
}
