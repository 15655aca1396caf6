use crate::error::Result;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

pub const API_BASE_URL: &str = "https://api.github.com";
pub const PER_PAGE: u8 = 5;
pub const DEBOUNCE_MS: u64 = 400;

/// Settings shared by the search controller and the GitHub client
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub api_url: Url,
    pub per_page: u8,
    pub debounce: Duration,
}

impl SearchConfig {
    pub fn new(api_url: &str, per_page: u8, debounce_ms: u64) -> Result<Self> {
        Ok(Self {
            api_url: Url::parse(api_url)?,
            per_page,
            debounce: Duration::from_millis(debounce_ms),
        })
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            api_url: Url::parse(API_BASE_URL).expect("API_BASE_URL is a valid URL"),
            per_page: PER_PAGE,
            debounce: Duration::from_millis(DEBOUNCE_MS),
        }
    }
}

pub fn default_log_file() -> PathBuf {
    std::env::temp_dir().join("github-repo-search.log")
}
