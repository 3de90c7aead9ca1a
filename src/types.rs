use serde::{Deserialize, Deserializer, Serialize};

// GitHub API response structures
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitHubRepo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub html_url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub stargazers_count: u64,
    #[serde(default)]
    pub language: Option<String>,
}

impl GitHubRepo {
    /// Description to show on a card, `None` when absent or blank.
    pub fn display_description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }

    pub fn display_language(&self) -> Option<&str> {
        self.language.as_deref().filter(|l| !l.is_empty())
    }
}

fn null_as_zero<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u64>::deserialize(deserializer)?.unwrap_or(0))
}

/// One page of the user repository listing.
#[derive(Debug, Clone, Default)]
pub struct RepoPage {
    pub repos: Vec<GitHubRepo>,
    pub has_next: bool,
}
