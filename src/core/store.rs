use std::sync::Arc;

use arc_swap::ArcSwap;

use super::render_state::RenderState;
use super::types::{ChatThread, ViewInfo};

/// Holds the currently published [`RenderState`].
///
/// Readers take an `Arc` with [`RenderStateStore::load`] and keep a consistent
/// snapshot for as long as they hold it; publishing swaps the pointer and
/// never touches an instance a reader can see.
pub struct RenderStateStore {
    current: ArcSwap<RenderState>,
}

impl RenderStateStore {
    pub fn new() -> Self {
        Self {
            current: ArcSwap::from_pointee(RenderState::empty()),
        }
    }

    pub fn load(&self) -> Arc<RenderState> {
        self.current.load_full()
    }

    pub fn publish(&self, state: RenderState) -> Arc<RenderState> {
        tracing::debug!(
            "Publishing render state: {} sections, {} visible threads",
            state.section_count(),
            state.visible_thread_count()
        );
        let state = Arc::new(state);
        self.current.store(Arc::clone(&state));
        state
    }

    /// Builds a fresh snapshot from upstream data and publishes it.
    pub fn rebuild(
        &self,
        view_info: ViewInfo,
        pinned_threads: Vec<ChatThread>,
        unpinned_threads: Vec<ChatThread>,
    ) -> Arc<RenderState> {
        self.publish(RenderState::new(view_info, pinned_threads, unpinned_threads))
    }
}

impl Default for RenderStateStore {
    fn default() -> Self {
        Self::new()
    }
}
