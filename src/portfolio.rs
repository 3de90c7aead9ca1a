use crate::error::Result;
use crate::fetcher::{fetch_all_repos, RepoPageSource};
use crate::render::render_portfolio;
use std::path::Path;
use tracing::info;

/// Fetch `username`'s repositories, render them and write the page to
/// `output`, replacing any existing file. Returns the number of cards.
pub async fn generate_portfolio<S>(source: &S, username: &str, output: &Path) -> Result<usize>
where
    S: RepoPageSource + ?Sized,
{
    let repos = fetch_all_repos(source, username).await?;
    let html = render_portfolio(username, &repos);

    tokio::fs::write(output, html.as_bytes()).await?;
    info!(path = %output.display(), repos = repos.len(), "Wrote portfolio");

    Ok(repos.len())
}
