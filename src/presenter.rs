use crate::models::{DropdownVisibility, PinId, PinnedEntry, RepositoryRecord};

/// Output side of the search widget.
///
/// The controller calls these in response to its own state transitions and
/// never reads anything back, so an implementation only has to mirror what it
/// is told.
pub trait Presenter: Send + Sync {
    fn clear_results(&mut self);

    fn render_result(&mut self, index: usize, record: &RepositoryRecord);

    fn set_dropdown(&mut self, visibility: DropdownVisibility);

    fn append_pinned(&mut self, entry: &PinnedEntry);

    fn remove_pinned(&mut self, id: PinId);

    fn clear_input(&mut self);
}
