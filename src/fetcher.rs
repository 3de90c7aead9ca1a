use crate::error::Result;
use crate::types::{GitHubRepo, RepoPage};
use async_trait::async_trait;
use tracing::{debug, info};

/// Largest page size the GitHub API accepts.
pub const PER_PAGE: u32 = 100;

/// Anything that can serve pages of a user's repository listing.
#[async_trait]
pub trait RepoPageSource: Send + Sync {
    async fn fetch_page(&self, username: &str, page: u32) -> Result<RepoPage>;
}

/// Fetch every public repository of `username`, sorted by stars descending.
///
/// Pages are requested one after another starting at 1 until a page comes
/// back empty or carries no `next` link. The first error aborts the whole
/// fetch.
pub async fn fetch_all_repos<S>(source: &S, username: &str) -> Result<Vec<GitHubRepo>>
where
    S: RepoPageSource + ?Sized,
{
    let mut repos = Vec::new();
    let mut page = 1;

    loop {
        let RepoPage { repos: page_repos, has_next } = source.fetch_page(username, page).await?;
        debug!(page, count = page_repos.len(), has_next, "Fetched repositories page");

        if page_repos.is_empty() {
            break;
        }
        repos.extend(page_repos);

        if !has_next {
            break;
        }
        page += 1;
    }

    // Server-side ordering is not trusted across pages
    sort_by_stars(&mut repos);
    info!(username, total = repos.len(), pages = page, "Fetched repositories");
    Ok(repos)
}

/// Stable sort, most starred first.
pub fn sort_by_stars(repos: &mut [GitHubRepo]) {
    repos.sort_by(|a, b| b.stargazers_count.cmp(&a.stargazers_count));
}

pub fn is_sorted_by_stars(star_counts: &[u64]) -> bool {
    star_counts.windows(2).all(|pair| pair[0] >= pair[1])
}
