use colored::*;
use github_portfolio::cli::{parse_or_exit, VerifySortingCli};
use github_portfolio::error::Result;
use github_portfolio::fetcher::fetch_all_repos;
use github_portfolio::github::GitHubClient;
use github_portfolio::logging;
use github_portfolio::verify::verify_sorting;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();

    let cli: VerifySortingCli = parse_or_exit();
    logging::init(&cli.client.log_level);

    match run(&cli).await {
        Ok(()) => {
            println!(
                "\n{}",
                "Success: Repositories are correctly sorted by stars!".green()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("\n{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &VerifySortingCli) -> Result<()> {
    let client = GitHubClient::new(&cli.client.client_config()?)?;
    let repos = fetch_all_repos(&client, &cli.username).await?;

    let report = verify_sorting(&repos)?;
    report.write_to(&mut std::io::stdout().lock())?;
    report.check()
}
