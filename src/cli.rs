use crate::config::{
    ClientConfig, DEFAULT_API_URL, DEFAULT_OUTPUT_FILE, DEFAULT_TIMEOUT_SECS,
    DEFAULT_VERIFY_USERNAME,
};
use crate::error::Result;
use clap::{Args, Parser};
use std::path::PathBuf;

/// Options shared by every binary that talks to the GitHub API.
#[derive(Args, Debug, Clone)]
pub struct ClientArgs {
    /// GitHub REST API base URL
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Per-request timeout in seconds
    #[arg(long, env = "GITHUB_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, env = "PORTFOLIO_LOG", default_value = "warn")]
    pub log_level: String,
}

impl ClientArgs {
    pub fn client_config(&self) -> Result<ClientConfig> {
        ClientConfig::new(&self.api_url, self.timeout)
    }
}

#[derive(Parser, Debug)]
#[command(name = "github-portfolio")]
#[command(about = "Generate an HTML portfolio of a GitHub user's public repositories")]
#[command(version)]
pub struct PortfolioCli {
    /// GitHub username
    pub username: String,

    /// File the portfolio is written to
    #[arg(long, short, env = "PORTFOLIO_OUTPUT", default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    #[command(flatten)]
    pub client: ClientArgs,
}

#[derive(Parser, Debug)]
#[command(name = "verify-sorting")]
#[command(about = "Check that a user's repositories come back sorted by stars")]
#[command(version)]
pub struct VerifySortingCli {
    /// GitHub username, defaults to "octocat"
    #[arg(default_value = DEFAULT_VERIFY_USERNAME)]
    pub username: String,

    #[command(flatten)]
    pub client: ClientArgs,
}

#[derive(Parser, Debug)]
#[command(name = "verify-api")]
#[command(about = "Check that a JSON repository listing on stdin carries the required fields")]
#[command(version)]
pub struct VerifyApiCli {
    /// Log filter used when RUST_LOG is not set
    #[arg(long, env = "PORTFOLIO_LOG", default_value = "warn")]
    pub log_level: String,
}

/// Parses arguments, printing usage and exiting with status 1 on misuse.
///
/// clap exits with 2 on usage errors; the tools here report every failure
/// with 1. Help and version output still exit 0.
pub fn parse_or_exit<P: Parser>() -> P {
    match P::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            let code = if e.use_stderr() { 1 } else { 0 };
            std::process::exit(code);
        }
    }
}
