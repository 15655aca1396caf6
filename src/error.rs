use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepoSearchError {
    #[error("GitHub API error: {0}")]
    ApiError(String),

    #[error("Search request failed with status {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Actor error: {0}")]
    ActorError(String),
}

pub type Result<T> = std::result::Result<T, RepoSearchError>;
