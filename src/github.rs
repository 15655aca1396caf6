use crate::config::SearchConfig;
use crate::error::{RepoSearchError, Result};
use crate::models::RepositoryRecord;
use crate::types::RepoSearchResponse;
use futures::future::BoxFuture;
use reqwest::{Client, Response, StatusCode};
use std::time::Duration;
use tracing::debug;
use url::Url;

const USER_AGENT: &str = "github-repo-search/0.1.0";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Source of repository search results.
///
/// The search controller only depends on this trait, so tests can swap the
/// network for a scripted backend.
pub trait RepositorySearch: Send + Sync {
    fn search<'a>(&'a self, query: &'a str) -> BoxFuture<'a, Result<Vec<RepositoryRecord>>>;
}

pub struct GitHubClient {
    client: Client,
    base_url: Url,
    per_page: u8,
}

impl GitHubClient {
    pub fn new(config: &SearchConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        // Url::join drops the last path segment unless it ends with a slash
        let mut base_url = config.api_url.clone();
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(GitHubClient {
            client,
            base_url,
            per_page: config.per_page,
        })
    }

    /// Builds `{api}/search/repositories?q={query}&per_page={n}`
    pub fn search_url(&self, query: &str) -> Result<Url> {
        let mut url = self.base_url.join("search/repositories")?;
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("per_page", &self.per_page.to_string());
        Ok(url)
    }

    async fn make_request(&self, url: Url) -> Result<Response> {
        let response = self
            .client
            .get(url)
            .header("Accept", "application/vnd.github.v3+json")
            .send()
            .await?;

        let rate_limit_remaining = response
            .headers()
            .get("X-RateLimit-Remaining")
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.parse::<u32>().ok());

        let rate_limit_reset = response
            .headers()
            .get("X-RateLimit-Reset")
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(0);

        match response.status() {
            status if status.is_success() => Ok(response),
            StatusCode::TOO_MANY_REQUESTS => Err(RepoSearchError::RateLimitExceeded(format!(
                "too many requests, reset at unix time {}",
                rate_limit_reset
            ))),
            StatusCode::FORBIDDEN if rate_limit_remaining == Some(0) => {
                Err(RepoSearchError::RateLimitExceeded(format!(
                    "API rate limit exhausted, reset at unix time {}",
                    rate_limit_reset
                )))
            }
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(RepoSearchError::HttpStatus {
                    status: status.as_u16(),
                    body,
                })
            }
        }
    }

    /// Runs one repository search and returns at most `per_page` records
    pub async fn search_repositories(&self, query: &str) -> Result<Vec<RepositoryRecord>> {
        let url = self.search_url(query)?;
        debug!(%url, "Searching repositories");

        let response = self.make_request(url).await?;
        let body = response.text().await?;
        let payload: RepoSearchResponse = serde_json::from_str(&body)?;

        debug!(
            query,
            total_count = payload.total_count,
            returned = payload.items.len(),
            "Repository search completed"
        );

        Ok(payload.items.into_iter().map(RepositoryRecord::from).collect())
    }
}

impl RepositorySearch for GitHubClient {
    fn search<'a>(&'a self, query: &'a str) -> BoxFuture<'a, Result<Vec<RepositoryRecord>>> {
        Box::pin(self.search_repositories(query))
    }
}
