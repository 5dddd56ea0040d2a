//! Immutable chat-list snapshot and its section/index-path projection.
//!
//! A [`RenderState`] is built once from view info and the two thread
//! orderings, and is never mutated afterwards. Any change upstream produces a
//! new instance, see [`crate::core::RenderStateStore`].
//!
//! Lookups never panic. Out-of-range sections or rows resolve to `None`, the
//! same as a normal not-found.

use super::types::{ChatThread, IndexPath, Section, SectionRows, SectionType, ViewInfo};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderState {
    view_info: ViewInfo,
    pinned_threads: Vec<ChatThread>,
    unpinned_threads: Vec<ChatThread>,
    sections: Vec<Section>,
}

impl RenderState {
    /// Thread-id uniqueness is the caller's contract and is not checked here.
    pub fn new(
        view_info: ViewInfo,
        pinned_threads: Vec<ChatThread>,
        unpinned_threads: Vec<ChatThread>,
    ) -> Self {
        let sections = derive_sections(&view_info);
        Self {
            view_info,
            pinned_threads,
            unpinned_threads,
            sections,
        }
    }

    /// Placeholder used before the first load.
    pub fn empty() -> Self {
        Self::new(ViewInfo::empty(), Vec::new(), Vec::new())
    }

    pub fn view_info(&self) -> &ViewInfo {
        &self.view_info
    }

    pub fn pinned_threads(&self) -> &[ChatThread] {
        &self.pinned_threads
    }

    pub fn unpinned_threads(&self) -> &[ChatThread] {
        &self.unpinned_threads
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn archive_count(&self) -> usize {
        self.view_info.archive_count
    }

    pub fn inbox_count(&self) -> usize {
        self.view_info.inbox_count
    }

    pub fn visible_thread_count(&self) -> usize {
        self.pinned_threads.len() + self.unpinned_threads.len()
    }

    pub fn has_archived_threads_row(&self) -> bool {
        self.view_info.has_archived_threads_row
    }

    pub fn has_visible_reminders(&self) -> bool {
        self.view_info.has_visible_reminders
    }

    pub fn has_pinned_and_unpinned_threads(&self) -> bool {
        !self.pinned_threads.is_empty() && !self.unpinned_threads.is_empty()
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Rows a table should lay out for `section`. Reminders and the archive
    /// button render a single static control each, so they count one row
    /// even though [`Self::thread_at`] returns `None` for it.
    pub fn row_count(&self, section: usize) -> Option<usize> {
        let section = self.sections.get(section)?;
        match section.rows {
            SectionRows::NoRows => Some(1),
            rows => Some(self.rows(rows).len()),
        }
    }

    pub fn section_index(&self, kind: SectionType) -> Option<usize> {
        self.sections.iter().position(|s| s.kind == kind)
    }

    pub fn thread_at(&self, path: IndexPath) -> Option<&ChatThread> {
        let section = self.sections.get(path.section)?;
        self.rows(section.rows).get(path.row)
    }

    /// Pinned threads are searched first, so pinned wins if an id were ever
    /// present in both lists.
    pub fn index_path_for_unique_id(&self, unique_id: &str) -> Option<IndexPath> {
        if let Some(row) = position_of(&self.pinned_threads, unique_id) {
            let section = self.section_index(SectionType::Pinned)?;
            return Some(IndexPath::new(section, row));
        }
        if let Some(row) = position_of(&self.unpinned_threads, unique_id) {
            let section = self.section_index(SectionType::Unpinned)?;
            return Some(IndexPath::new(section, row));
        }
        None
    }

    /// Next row after `thread` within its own list, without crossing into the
    /// other list. Anything not found in the pinned list (including `None`)
    /// is resolved against the unpinned list; an unknown thread falls back to
    /// that list's first row.
    pub fn index_path_after(&self, thread: Option<&ChatThread>) -> Option<IndexPath> {
        let (section, threads) = self.active_list(thread)?;
        let Some(thread) = thread else {
            return Some(IndexPath::new(section, 0));
        };
        match position_of(threads, &thread.unique_id) {
            Some(row) if row + 1 < threads.len() => Some(IndexPath::new(section, row + 1)),
            Some(_) => None,
            None => Some(IndexPath::new(section, 0)),
        }
    }

    /// Mirror of [`Self::index_path_after`]; falls back to the last row.
    pub fn index_path_before(&self, thread: Option<&ChatThread>) -> Option<IndexPath> {
        let (section, threads) = self.active_list(thread)?;
        let last = threads.len() - 1;
        let Some(thread) = thread else {
            return Some(IndexPath::new(section, last));
        };
        match position_of(threads, &thread.unique_id) {
            Some(0) => None,
            Some(row) => Some(IndexPath::new(section, row - 1)),
            None => Some(IndexPath::new(section, last)),
        }
    }

    /// Section index and backing list used for relative navigation. `None`
    /// when that list is empty.
    fn active_list(&self, thread: Option<&ChatThread>) -> Option<(usize, &[ChatThread])> {
        let is_pinned = thread
            .map(|t| position_of(&self.pinned_threads, &t.unique_id).is_some())
            .unwrap_or(false);
        let (kind, threads) = if is_pinned {
            (SectionType::Pinned, self.pinned_threads.as_slice())
        } else {
            (SectionType::Unpinned, self.unpinned_threads.as_slice())
        };
        if threads.is_empty() {
            return None;
        }
        Some((self.section_index(kind)?, threads))
    }

    fn rows(&self, rows: SectionRows) -> &[ChatThread] {
        match rows {
            SectionRows::NoRows => &[],
            SectionRows::Pinned => &self.pinned_threads,
            SectionRows::Unpinned => &self.unpinned_threads,
        }
    }
}

impl Default for RenderState {
    fn default() -> Self {
        Self::empty()
    }
}

fn derive_sections(view_info: &ViewInfo) -> Vec<Section> {
    let mut sections = Vec::with_capacity(4);
    if view_info.has_visible_reminders {
        sections.push(Section::new(SectionType::Reminders, SectionRows::NoRows));
    }
    if view_info.has_archived_threads_row {
        sections.push(Section::new(SectionType::ArchiveButton, SectionRows::NoRows));
    }
    sections.push(Section::new(SectionType::Pinned, SectionRows::Pinned));
    sections.push(Section::new(SectionType::Unpinned, SectionRows::Unpinned));
    sections
}

fn position_of(threads: &[ChatThread], unique_id: &str) -> Option<usize> {
    threads.iter().position(|t| t.unique_id == unique_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn threads(ids: &[&str]) -> Vec<ChatThread> {
        ids.iter().map(|id| ChatThread::new(*id)).collect()
    }

    fn flags(reminders: bool, archive: bool) -> ViewInfo {
        ViewInfo {
            archive_count: 7,
            inbox_count: 42,
            has_archived_threads_row: archive,
            has_visible_reminders: reminders,
        }
    }

    fn sample() -> RenderState {
        RenderState::new(
            flags(false, false),
            threads(&["a", "b"]),
            threads(&["c", "d", "e"]),
        )
    }

    fn kinds(state: &RenderState) -> Vec<SectionType> {
        state.sections().iter().map(|s| s.kind).collect()
    }

    #[test]
    fn no_banners_yields_pinned_then_unpinned() {
        let state = sample();
        assert_eq!(kinds(&state), vec![SectionType::Pinned, SectionType::Unpinned]);
    }

    #[test]
    fn all_banners_yield_four_sections_in_order() {
        let state = RenderState::new(flags(true, true), Vec::new(), Vec::new());
        assert_eq!(
            kinds(&state),
            vec![
                SectionType::Reminders,
                SectionType::ArchiveButton,
                SectionType::Pinned,
                SectionType::Unpinned,
            ]
        );
        assert_eq!(state.sections()[0].rows, SectionRows::NoRows);
        assert_eq!(state.sections()[1].rows, SectionRows::NoRows);
    }

    #[test]
    fn archive_row_without_reminders() {
        let state = RenderState::new(flags(false, true), Vec::new(), Vec::new());
        assert_eq!(
            kinds(&state),
            vec![SectionType::ArchiveButton, SectionType::Pinned, SectionType::Unpinned]
        );
        assert_eq!(state.section_index(SectionType::Reminders), None);
        assert_eq!(state.section_index(SectionType::ArchiveButton), Some(0));
    }

    #[test]
    fn empty_state_has_two_empty_sections() {
        let state = RenderState::empty();
        assert_eq!(state.section_count(), 2);
        assert_eq!(state.visible_thread_count(), 0);
        assert_eq!(state.row_count(0), Some(0));
        assert_eq!(state.row_count(1), Some(0));
        assert_eq!(state.index_path_after(None), None);
        assert_eq!(state.index_path_before(None), None);
        assert_eq!(state, RenderState::default());
    }

    #[test]
    fn derived_properties() {
        let state = sample();
        assert_eq!(state.archive_count(), 7);
        assert_eq!(state.inbox_count(), 42);
        assert_eq!(state.visible_thread_count(), 5);
        assert!(state.has_pinned_and_unpinned_threads());
        assert!(!state.has_archived_threads_row());
        assert!(!state.has_visible_reminders());

        let only_unpinned = RenderState::new(ViewInfo::empty(), Vec::new(), threads(&["x"]));
        assert!(!only_unpinned.has_pinned_and_unpinned_threads());
    }

    #[test]
    fn thread_at_resolves_backing_lists() {
        let state = sample();
        assert_eq!(state.section_index(SectionType::Pinned), Some(0));
        assert_eq!(state.section_index(SectionType::Unpinned), Some(1));
        assert_eq!(state.thread_at(IndexPath::new(0, 1)).map(|t| t.unique_id.as_str()), Some("b"));
        assert_eq!(state.thread_at(IndexPath::new(1, 2)).map(|t| t.unique_id.as_str()), Some("e"));
    }

    #[test]
    fn thread_at_out_of_range_is_none() {
        let state = sample();
        assert_eq!(state.thread_at(IndexPath::new(0, 2)), None);
        assert_eq!(state.thread_at(IndexPath::new(5, 0)), None);
        assert_eq!(state.row_count(2), None);
    }

    #[test]
    fn static_sections_have_no_threads_but_one_row() {
        let state = RenderState::new(flags(true, true), threads(&["a"]), threads(&["c"]));
        assert_eq!(state.thread_at(IndexPath::new(0, 0)), None);
        assert_eq!(state.thread_at(IndexPath::new(1, 0)), None);
        assert_eq!(state.row_count(0), Some(1));
        assert_eq!(state.row_count(1), Some(1));
        assert_eq!(state.thread_at(IndexPath::new(2, 0)).map(|t| t.unique_id.as_str()), Some("a"));
    }

    #[test]
    fn counted_rows_of_static_sections_have_no_thread() {
        let state = RenderState::new(flags(true, true), Vec::new(), Vec::new());
        for section in 0..state.section_count() {
            let rows = state.row_count(section).unwrap();
            let resolved = (0..rows)
                .filter(|row| state.thread_at(IndexPath::new(section, *row)).is_some())
                .count();
            assert_eq!(resolved, 0);
        }
        assert_eq!(state.row_count(0), Some(1));
        assert_eq!(state.row_count(1), Some(1));
        assert_eq!(state.thread_at(IndexPath::new(usize::MAX, usize::MAX)), None);
    }

    #[test]
    fn index_path_for_unique_id() {
        let state = sample();
        assert_eq!(state.index_path_for_unique_id("b"), Some(IndexPath::new(0, 1)));
        assert_eq!(state.index_path_for_unique_id("d"), Some(IndexPath::new(1, 1)));
        assert_eq!(state.index_path_for_unique_id("missing"), None);
    }

    #[test]
    fn pinned_wins_when_id_is_in_both_lists() {
        let state = RenderState::new(ViewInfo::empty(), threads(&["x"]), threads(&["y", "x"]));
        assert_eq!(state.index_path_for_unique_id("x"), Some(IndexPath::new(0, 0)));
    }

    #[test]
    fn index_paths_shift_with_banner_sections() {
        let state = RenderState::new(flags(true, true), threads(&["a", "b"]), threads(&["c"]));
        assert_eq!(state.index_path_for_unique_id("b"), Some(IndexPath::new(2, 1)));
        assert_eq!(state.index_path_for_unique_id("c"), Some(IndexPath::new(3, 0)));
        assert_eq!(state.index_path_after(None), Some(IndexPath::new(3, 0)));
    }

    #[test]
    fn after_stays_within_pinned_list() {
        let state = sample();
        let a = ChatThread::new("a");
        let b = ChatThread::new("b");
        assert_eq!(state.index_path_after(Some(&a)), Some(IndexPath::new(0, 1)));
        assert_eq!(state.index_path_after(Some(&b)), None);
    }

    #[test]
    fn after_none_starts_at_first_unpinned() {
        let state = sample();
        assert_eq!(state.index_path_after(None), Some(IndexPath::new(1, 0)));
    }

    #[test]
    fn after_walks_unpinned_without_wrapping() {
        let state = sample();
        let c = ChatThread::new("c");
        let e = ChatThread::new("e");
        assert_eq!(state.index_path_after(Some(&c)), Some(IndexPath::new(1, 1)));
        assert_eq!(state.index_path_after(Some(&e)), None);
    }

    #[test]
    fn after_unknown_thread_falls_back_to_first_unpinned() {
        let state = sample();
        let stranger = ChatThread::new("x");
        assert_eq!(state.index_path_after(Some(&stranger)), Some(IndexPath::new(1, 0)));
    }

    #[test]
    fn after_with_empty_unpinned_list_is_none() {
        let state = RenderState::new(ViewInfo::empty(), threads(&["a"]), Vec::new());
        assert_eq!(state.index_path_after(None), None);
        assert_eq!(state.index_path_after(Some(&ChatThread::new("x"))), None);
        // pinned list is still used for a pinned anchor
        assert_eq!(state.index_path_before(Some(&ChatThread::new("a"))), None);
        assert_eq!(state.index_path_after(Some(&ChatThread::new("a"))), None);
    }

    #[test]
    fn before_mirrors_after() {
        let state = sample();
        let b = ChatThread::new("b");
        let c = ChatThread::new("c");
        let e = ChatThread::new("e");
        assert_eq!(state.index_path_before(Some(&b)), Some(IndexPath::new(0, 0)));
        assert_eq!(state.index_path_before(Some(&c)), None);
        assert_eq!(state.index_path_before(Some(&e)), Some(IndexPath::new(1, 1)));
        assert_eq!(state.index_path_before(None), Some(IndexPath::new(1, 2)));
        assert_eq!(
            state.index_path_before(Some(&ChatThread::new("x"))),
            Some(IndexPath::new(1, 2))
        );
    }

    #[test]
    fn identical_inputs_build_identical_states() {
        let first = sample();
        let second = sample();
        assert_eq!(first.sections(), second.sections());
        assert_eq!(first, second);
        let b = ChatThread::new("b");
        assert_eq!(first.index_path_after(Some(&b)), second.index_path_after(Some(&b)));
        assert_eq!(first.index_path_before(None), second.index_path_before(None));
    }
}
