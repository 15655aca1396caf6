use crate::error::Result;
use crate::models::{DropdownVisibility, PinId, PinnedList, RepositoryRecord, SearchSnapshot};
use crate::presenter::Presenter;
use tracing::{debug, info, warn};

/// A search that should be sent to the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub seq: u64,
    pub query: String,
}

/// State machine behind the search widget.
///
/// Holds the current input, the dropdown rows and the pinned list, and pushes
/// every change to the [`Presenter`]. Timing (debounce) and I/O live in the
/// controller actor; this type only decides what each event means.
pub struct SearchSession {
    presenter: Box<dyn Presenter>,
    input: String,
    results: Vec<RepositoryRecord>,
    dropdown: DropdownVisibility,
    pinned: PinnedList,
    last_dispatched: u64,
}

impl SearchSession {
    pub fn new(presenter: Box<dyn Presenter>) -> Self {
        Self {
            presenter,
            input: String::new(),
            results: Vec::new(),
            dropdown: DropdownVisibility::Hidden,
            pinned: PinnedList::new(),
            last_dispatched: 0,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn results(&self) -> &[RepositoryRecord] {
        &self.results
    }

    pub fn dropdown(&self) -> DropdownVisibility {
        self.dropdown
    }

    pub fn pinned(&self) -> &PinnedList {
        &self.pinned
    }

    pub fn last_dispatched(&self) -> u64 {
        self.last_dispatched
    }

    pub fn on_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Called when the debounce window closes.
    ///
    /// An empty input clears and hides the dropdown without a request. Either
    /// way the sequence number moves forward, so whatever is still in flight
    /// becomes stale.
    pub fn fire(&mut self) -> Option<SearchRequest> {
        self.last_dispatched += 1;

        if self.input.is_empty() {
            debug!("Input empty, clearing results");
            self.clear_results();
            self.set_dropdown(DropdownVisibility::Hidden);
            return None;
        }

        Some(SearchRequest {
            seq: self.last_dispatched,
            query: self.input.clone(),
        })
    }

    /// Applies a backend result. Returns `false` when the result was stale
    /// and dropped.
    pub fn on_search_completed(&mut self, seq: u64, outcome: Result<Vec<RepositoryRecord>>) -> bool {
        if seq != self.last_dispatched {
            debug!(seq, latest = self.last_dispatched, "Discarding stale search response");
            return false;
        }

        self.clear_results();

        match outcome {
            Ok(records) if !records.is_empty() => {
                for (index, record) in records.iter().enumerate() {
                    self.presenter.render_result(index, record);
                }
                self.results = records;
                self.set_dropdown(DropdownVisibility::Visible);
            }
            Ok(_) => {
                debug!(seq, "Search returned no repositories");
                self.set_dropdown(DropdownVisibility::Hidden);
            }
            Err(e) => {
                warn!(seq, error = %e, "Repository search failed");
                self.set_dropdown(DropdownVisibility::Hidden);
            }
        }

        true
    }

    pub fn on_input_focused(&mut self) {
        if !self.results.is_empty() {
            self.set_dropdown(DropdownVisibility::Visible);
        }
    }

    pub fn on_outside_click(&mut self) {
        self.set_dropdown(DropdownVisibility::Hidden);
    }

    pub fn on_escape(&mut self) {
        self.set_dropdown(DropdownVisibility::Hidden);
    }

    /// Pins the dropdown row at `index`. Out of range rows are ignored.
    pub fn select_row(&mut self, index: usize) -> Option<PinId> {
        let record = self.results.get(index)?.clone();

        let entry = self.pinned.push(record);
        self.presenter.append_pinned(entry);
        let id = entry.id;
        info!(%id, name = %entry.record.name, owner = %entry.record.owner, "Pinned repository");

        // a response still in flight must not reopen the dropdown
        self.last_dispatched += 1;
        self.clear_results();
        self.set_dropdown(DropdownVisibility::Hidden);
        self.input.clear();
        self.presenter.clear_input();

        Some(id)
    }

    pub fn remove_pinned(&mut self, id: PinId) -> bool {
        match self.pinned.remove(id) {
            Some(entry) => {
                self.presenter.remove_pinned(id);
                info!(%id, name = %entry.record.name, "Removed pinned repository");
                true
            }
            None => {
                debug!(%id, "No pinned entry to remove");
                false
            }
        }
    }

    pub fn snapshot(&self) -> SearchSnapshot {
        SearchSnapshot {
            input: self.input.clone(),
            results: self.results.clone(),
            dropdown: self.dropdown,
            pinned: self.pinned.as_slice().to_vec(),
            last_dispatched: self.last_dispatched,
        }
    }

    fn clear_results(&mut self) {
        self.results.clear();
        self.presenter.clear_results();
    }

    fn set_dropdown(&mut self, visibility: DropdownVisibility) {
        if self.dropdown != visibility {
            debug!(from = ?self.dropdown, to = ?visibility, "Dropdown visibility changed");
            self.dropdown = visibility;
            self.presenter.set_dropdown(visibility);
        }
    }
}
