//! Terminal front end for the search widget.
//!
//! The terminal plays the part of the page: [`view::SharedView`] is the
//! presenter the controller writes to, and [`app::App`] turns key and mouse
//! events into controller messages.

pub mod app;
pub mod ui;
pub mod view;

use crate::actors::{SearchController, SearchControllerArgs};
use crate::config::SearchConfig;
use crate::github::GitHubClient;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use std::io::stdout;
use std::sync::Arc;
use tracing::info;

pub use app::App;
pub use view::{SharedView, ViewState};

pub async fn run(config: SearchConfig) -> anyhow::Result<()> {
    let view = SharedView::new();
    let client = GitHubClient::new(&config)?;

    let controller = SearchController::spawn_with(SearchControllerArgs {
        presenter: Box::new(view.clone()),
        backend: Arc::new(client),
        debounce: config.debounce,
    })
    .await?;

    let mut terminal = ratatui::init();
    execute!(stdout(), EnableMouseCapture)?;

    let mut app = App::new(view, controller.clone());
    let result = app.run(&mut terminal).await;

    execute!(stdout(), DisableMouseCapture)?;
    ratatui::restore();

    controller.stop(None);
    info!("Terminal session ended");
    result
}
