use colored::*;
use github_portfolio::cli::{parse_or_exit, PortfolioCli};
use github_portfolio::error::Result;
use github_portfolio::github::GitHubClient;
use github_portfolio::logging;
use github_portfolio::portfolio::generate_portfolio;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    let cli: PortfolioCli = parse_or_exit();
    logging::init(&cli.client.log_level);

    match run(&cli).await {
        Ok(()) => {
            println!(
                "{}",
                format!("Portfolio generated successfully for {}!", cli.username).green()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &PortfolioCli) -> Result<()> {
    let client = GitHubClient::new(&cli.client.client_config()?)?;
    generate_portfolio(&client, &cli.username, &cli.output).await?;
    Ok(())
}
