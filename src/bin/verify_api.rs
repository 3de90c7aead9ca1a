use colored::*;
use github_portfolio::cli::{parse_or_exit, VerifyApiCli};
use github_portfolio::error::{PortfolioError, Result};
use github_portfolio::logging;
use github_portfolio::verify::{parse_listing, verify_fields};
use std::io::Read;
use std::process::ExitCode;
use tracing::debug;

fn main() -> ExitCode {
    dotenv::dotenv().ok();

    let cli: VerifyApiCli = parse_or_exit();
    logging::init(&cli.log_level);

    match run() {
        Ok(()) => {
            println!("\n{}", "Success: All required fields are present!".green());
            ExitCode::SUCCESS
        }
        Err(PortfolioError::JsonError(e)) => {
            debug!(error = %e, "Failed to decode stdin");
            println!("{} Invalid JSON input", "Error:".red().bold());
            ExitCode::FAILURE
        }
        Err(PortfolioError::MissingFields(_)) => {
            println!("\n{} Some required fields are missing!", "Error:".red().bold());
            ExitCode::FAILURE
        }
        Err(e) => {
            println!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let mut input = Vec::new();
    std::io::stdin().read_to_end(&mut input)?;

    let listing = parse_listing(&input)?;
    let report = verify_fields(&listing)?;
    report.write_to(&mut std::io::stdout().lock())?;
    report.check()
}
