#![allow(dead_code)]

pub mod server;

use async_trait::async_trait;
use github_portfolio::error::{PortfolioError, Result};
use github_portfolio::fetcher::RepoPageSource;
use github_portfolio::types::{GitHubRepo, RepoPage};
use std::sync::Mutex;

pub fn repo(name: &str, stars: u64) -> GitHubRepo {
    GitHubRepo {
        name: name.to_string(),
        html_url: format!("https://github.com/octocat/{}", name),
        description: Some(format!("The {} project", name)),
        stargazers_count: stars,
        language: Some("Rust".to_string()),
    }
}

/// Serves canned pages and records which pages were requested.
pub struct StubPageSource {
    pages: Vec<RepoPage>,
    fail_on_page: Option<u32>,
    requested: Mutex<Vec<u32>>,
}

impl StubPageSource {
    pub fn new(pages: Vec<RepoPage>) -> Self {
        Self {
            pages,
            fail_on_page: None,
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_on(mut self, page: u32) -> Self {
        self.fail_on_page = Some(page);
        self
    }

    pub fn requested_pages(&self) -> Vec<u32> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl RepoPageSource for StubPageSource {
    async fn fetch_page(&self, _username: &str, page: u32) -> Result<RepoPage> {
        self.requested.lock().unwrap().push(page);

        if self.fail_on_page == Some(page) {
            return Err(PortfolioError::ApiError(format!(
                "API request failed with status 500 Internal Server Error: page {}",
                page
            )));
        }

        Ok(self
            .pages
            .get(page as usize - 1)
            .cloned()
            .unwrap_or_default())
    }
}
