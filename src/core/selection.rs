use super::render_state::RenderState;
use super::types::{ChatThread, IndexPath};

/// Row selection for keyboard navigation over a [`RenderState`].
///
/// The selection remembers the thread rather than its position, so a
/// republished snapshot with reordered rows keeps the same conversation
/// selected. Stepping past either end of a list leaves the selection as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatListSelection {
    selected: Option<ChatThread>,
}

impl ChatListSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn anchored_at(thread: ChatThread) -> Self {
        Self {
            selected: Some(thread),
        }
    }

    pub fn selected(&self) -> Option<&ChatThread> {
        self.selected.as_ref()
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_ref().map(|t| t.unique_id.as_str())
    }

    /// Current position in `state`, if the selected thread is still listed.
    pub fn position(&self, state: &RenderState) -> Option<IndexPath> {
        state.index_path_for_unique_id(self.selected_id()?)
    }

    pub fn select_next(&mut self, state: &RenderState) -> Option<IndexPath> {
        let path = state.index_path_after(self.selected.as_ref())?;
        self.select_at(state, path)
    }

    pub fn select_prev(&mut self, state: &RenderState) -> Option<IndexPath> {
        let path = state.index_path_before(self.selected.as_ref())?;
        self.select_at(state, path)
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    fn select_at(&mut self, state: &RenderState, path: IndexPath) -> Option<IndexPath> {
        let thread = state.thread_at(path)?;
        tracing::debug!("Selected {} at {}", thread.unique_id, path);
        self.selected = Some(thread.clone());
        Some(path)
    }
}
