//! Debounced GitHub repository search with a pinnable result list.
//!
//! Typing into the search input schedules a single request once the input has
//! been quiet for the debounce interval. Results show up in a dropdown; picking
//! one copies it into the pinned list.
//!
//! - [`session`] - the search state machine (results, dropdown visibility, pins)
//! - [`actors`] - ractor actor that owns the debounce timer and dispatches requests
//! - [`github`] - GitHub search API client and the [`github::RepositorySearch`] seam
//! - [`presenter`] - output interface the controller drives
//! - [`tui`] - terminal presenter and event loop

pub mod actors;
pub mod cli;
pub mod config;
pub mod error;
pub mod github;
pub mod models;
pub mod presenter;
pub mod session;
pub mod tui;
pub mod types;

pub use error::{RepoSearchError, Result};
pub use models::{DropdownVisibility, PinId, PinnedEntry, RepositoryRecord, SearchSnapshot};
