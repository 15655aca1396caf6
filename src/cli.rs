use crate::config::{self, SearchConfig};
use crate::error::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "github-repo-search")]
#[command(about = "Search GitHub repositories as you type and pin the ones you want to keep")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// GitHub API base URL
    #[arg(long, env = "GITHUB_API_URL", default_value = config::API_BASE_URL)]
    pub api_url: String,

    /// Results requested per search
    #[arg(long, env = "SEARCH_PER_PAGE", default_value_t = config::PER_PAGE,
          value_parser = clap::value_parser!(u8).range(1..=100))]
    pub per_page: u8,

    /// Quiet period after the last keystroke before searching, in milliseconds
    #[arg(long, env = "SEARCH_DEBOUNCE_MS", default_value_t = config::DEBOUNCE_MS)]
    pub debounce_ms: u64,

    /// Log file used while the terminal UI is running
    #[arg(long, env = "SEARCH_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Interactive search widget (default)
    Tui,
    /// Run a single search and print the results
    Query {
        /// Search text
        text: String,
    },
}

impl Cli {
    pub fn search_config(&self) -> Result<SearchConfig> {
        SearchConfig::new(&self.api_url, self.per_page, self.debounce_ms)
    }

    pub fn log_file(&self) -> PathBuf {
        self.log_file.clone().unwrap_or_else(config::default_log_file)
    }
}
