#![allow(dead_code)]

use axum::{
    extract::{RawQuery, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use futures::future::BoxFuture;
use github_repo_search::actors::{SearchController, SearchControllerArgs, SearchMessage};
use github_repo_search::error::{RepoSearchError, Result};
use github_repo_search::github::RepositorySearch;
use github_repo_search::models::{RepositoryRecord, SearchSnapshot};
use github_repo_search::tui::SharedView;
use parking_lot::Mutex;
use ractor::ActorRef;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

pub const DEBOUNCE: Duration = Duration::from_millis(400);

pub fn sample_records(prefix: &str, count: usize) -> Vec<RepositoryRecord> {
    (0..count)
        .map(|i| RepositoryRecord::new(format!("{}-{}", prefix, i), format!("owner{}", i), 1000 * (i as u64 + 1)))
        .collect()
}

/// What the fake GitHub API answers with
#[derive(Clone)]
pub enum FakeReply {
    Items(serde_json::Value),
    Status(u16, String),
    RateLimited,
    Raw(String),
}

#[derive(Clone)]
struct FakeState {
    reply: FakeReply,
    queries: Arc<Mutex<Vec<String>>>,
}

/// In-process stand-in for `api.github.com`
pub struct FakeGitHub {
    pub base_url: String,
    pub queries: Arc<Mutex<Vec<String>>>,
}

impl FakeGitHub {
    pub async fn start(reply: FakeReply) -> anyhow::Result<Self> {
        let queries = Arc::new(Mutex::new(Vec::new()));
        let state = FakeState {
            reply,
            queries: queries.clone(),
        };

        let app = Router::new()
            .route("/search/repositories", get(search_handler))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                eprintln!("Fake GitHub server stopped: {}", e);
            }
        });

        Ok(Self {
            base_url: format!("http://{}", addr),
            queries,
        })
    }

    pub fn received(&self) -> Vec<String> {
        self.queries.lock().clone()
    }
}

async fn search_handler(State(state): State<FakeState>, RawQuery(query): RawQuery) -> Response {
    state.queries.lock().push(query.unwrap_or_default());

    match state.reply {
        FakeReply::Items(body) => (StatusCode::OK, Json(body)).into_response(),
        FakeReply::Status(code, body) => {
            let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, body).into_response()
        }
        FakeReply::RateLimited => (
            StatusCode::FORBIDDEN,
            [("X-RateLimit-Remaining", "0"), ("X-RateLimit-Reset", "1700000000")],
            "API rate limit exceeded",
        )
            .into_response(),
        FakeReply::Raw(body) => (StatusCode::OK, [("content-type", "application/json")], body).into_response(),
    }
}

pub fn items_json(records: &[RepositoryRecord]) -> serde_json::Value {
    let items: Vec<serde_json::Value> = records
        .iter()
        .map(|r| {
            serde_json::json!({
                "name": r.name,
                "full_name": format!("{}/{}", r.owner, r.name),
                "owner": { "login": r.owner, "id": 1 },
                "stargazers_count": r.stars,
                "html_url": format!("https://github.com/{}/{}", r.owner, r.name),
            })
        })
        .collect();

    serde_json::json!({
        "total_count": records.len(),
        "incomplete_results": false,
        "items": items,
    })
}

/// Scripted reply for a single query
#[derive(Clone)]
pub enum Scripted {
    Items(Vec<RepositoryRecord>),
    Delayed(Duration, Vec<RepositoryRecord>),
    Fail(u16),
}

/// Backend that answers from a table and records every query it sees
#[derive(Clone, Default)]
pub struct ScriptedSearch {
    replies: Arc<Mutex<HashMap<String, Scripted>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl ScriptedSearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, query: &str, reply: Scripted) -> Self {
        self.replies.lock().insert(query.to_string(), reply);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }
}

impl RepositorySearch for ScriptedSearch {
    fn search<'a>(&'a self, query: &'a str) -> BoxFuture<'a, Result<Vec<RepositoryRecord>>> {
        self.calls.lock().push(query.to_string());
        let reply = self
            .replies
            .lock()
            .get(query)
            .cloned()
            .unwrap_or(Scripted::Items(Vec::new()));

        Box::pin(async move {
            match reply {
                Scripted::Items(records) => Ok(records),
                Scripted::Delayed(delay, records) => {
                    tokio::time::sleep(delay).await;
                    Ok(records)
                }
                Scripted::Fail(status) => Err(RepoSearchError::HttpStatus {
                    status,
                    body: "scripted failure".to_string(),
                }),
            }
        })
    }
}

pub async fn spawn_controller(backend: ScriptedSearch) -> (ActorRef<SearchMessage>, SharedView) {
    let view = SharedView::new();
    let controller = SearchController::spawn_with(SearchControllerArgs {
        presenter: Box::new(view.clone()),
        backend: Arc::new(backend),
        debounce: DEBOUNCE,
    })
    .await
    .expect("Failed to spawn search controller");

    (controller, view)
}

pub async fn snapshot(controller: &ActorRef<SearchMessage>) -> SearchSnapshot {
    SearchController::snapshot(controller)
        .await
        .expect("Failed to query search controller")
}

/// Sends a message and lets the controller work through it
pub async fn send(controller: &ActorRef<SearchMessage>, message: SearchMessage) {
    controller.send_message(message).expect("Failed to send message");
    tokio::time::sleep(Duration::from_millis(1)).await;
}
