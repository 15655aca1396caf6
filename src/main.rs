use clap::Parser;
use colored::*;
use github_repo_search::cli::{Cli, Command};
use github_repo_search::config::SearchConfig;
use github_repo_search::error::{RepoSearchError, Result};
use github_repo_search::github::GitHubClient;
use github_repo_search::models::format_stars;
use github_repo_search::tui;
use std::fs::File;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    let config = cli.search_config()?;

    match cli.command.clone().unwrap_or(Command::Tui) {
        Command::Tui => {
            // The terminal belongs to the UI, so logs go to a file
            let log_file = File::create(cli.log_file())?;
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(Arc::new(log_file))
                .with_ansi(false)
                .init();

            tui::run(config)
                .await
                .map_err(|e| RepoSearchError::ApiError(format!("Terminal session failed: {:#}", e)))?;
        }
        Command::Query { text } => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(std::io::stderr)
                .init();

            run_query(&config, &text).await?;
        }
    }

    Ok(())
}

async fn run_query(config: &SearchConfig, text: &str) -> Result<()> {
    if text.is_empty() {
        println!("{}", "Nothing to search for".dimmed());
        return Ok(());
    }

    let client = GitHubClient::new(config)?;
    let records = client.search_repositories(text).await?;

    if records.is_empty() {
        println!("{}", format!("No repositories match \"{}\"", text).yellow());
        return Ok(());
    }

    println!("{}", format!("Top {} repositories for \"{}\"", records.len(), text).bold().green());
    println!("{}", "=".repeat(50).dimmed());
    for record in &records {
        println!(
            "{}  {}  {}",
            record.name.bold(),
            record.owner.cyan(),
            format!("\u{2605} {}", format_stars(record.stars)).yellow()
        );
    }

    Ok(())
}
