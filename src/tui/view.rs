use crate::models::{DropdownVisibility, PinId, PinnedEntry, RepositoryRecord};
use crate::presenter::Presenter;
use parking_lot::{Mutex, MutexGuard};
use std::sync::Arc;

/// Everything the terminal needs to draw the widget
#[derive(Debug, Default, Clone)]
pub struct ViewState {
    pub input: String,
    pub results: Vec<RepositoryRecord>,
    pub dropdown_visible: bool,
    pub pinned: Vec<PinnedEntry>,
}

/// View state shared between the controller (writer) and the render loop.
///
/// The controller writes through the [`Presenter`] impl; the event loop edits
/// `input` directly as keys arrive and reads the rest when drawing.
#[derive(Debug, Default, Clone)]
pub struct SharedView(Arc<Mutex<ViewState>>);

impl SharedView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lock(&self) -> MutexGuard<'_, ViewState> {
        self.0.lock()
    }

    pub fn snapshot(&self) -> ViewState {
        self.0.lock().clone()
    }
}

impl Presenter for SharedView {
    fn clear_results(&mut self) {
        self.lock().results.clear();
    }

    fn render_result(&mut self, index: usize, record: &RepositoryRecord) {
        let mut view = self.lock();
        if index < view.results.len() {
            view.results[index] = record.clone();
        } else {
            view.results.push(record.clone());
        }
    }

    fn set_dropdown(&mut self, visibility: DropdownVisibility) {
        self.lock().dropdown_visible = visibility.is_visible();
    }

    fn append_pinned(&mut self, entry: &PinnedEntry) {
        self.lock().pinned.push(entry.clone());
    }

    fn remove_pinned(&mut self, id: PinId) {
        self.lock().pinned.retain(|entry| entry.id != id);
    }

    fn clear_input(&mut self) {
        self.lock().input.clear();
    }
}
