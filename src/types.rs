use serde::Deserialize;

// GitHub API response structures
#[derive(Debug, Deserialize)]
pub struct RepoSearchResponse {
    #[serde(default)]
    pub total_count: u64,
    pub items: Vec<GitHubRepo>,
}

#[derive(Debug, Deserialize)]
pub struct GitHubRepo {
    pub name: String,
    pub owner: GitHubOwner,
    pub stargazers_count: u64,
}

#[derive(Debug, Deserialize)]
pub struct GitHubOwner {
    pub login: String,
}
