use std::fmt;
use std::sync::Arc;

use clap::Subcommand;
use serde::Serialize;

use chatlist_state::{
    ChatListSelection, ChatListSnapshot, ChatThread, IndexPath, RenderState, RenderStateStore,
    SectionType,
};

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List sections with their row counts
    Sections,
    /// Show the thread at a position
    Thread { section: usize, row: usize },
    /// Find the position of a thread by id
    Locate { unique_id: String },
    /// Move to the row after a thread (or the first row)
    Next {
        #[arg(long)]
        after: Option<String>,
    },
    /// Move to the row before a thread (or the last row)
    Prev {
        #[arg(long)]
        before: Option<String>,
    },
    /// Print counts and banner flags
    Summary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionLine {
    pub index: usize,
    pub kind: SectionType,
    pub rows: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThreadLine {
    pub position: IndexPath,
    pub thread: ChatThread,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub archive_count: usize,
    pub inbox_count: usize,
    pub visible_thread_count: usize,
    pub has_archived_threads_row: bool,
    pub has_visible_reminders: bool,
    pub has_pinned_and_unpinned_threads: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Output {
    Sections(Vec<SectionLine>),
    Thread(Option<ThreadLine>),
    Position(Option<IndexPath>),
    Summary(Summary),
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Sections(lines) => {
                for line in lines {
                    writeln!(f, "{}\t{}\t{}", line.index, line.kind, line.rows)?;
                }
                Ok(())
            }
            Output::Thread(Some(line)) => {
                write!(
                    f,
                    "{}\t{}\t{}",
                    line.position,
                    line.thread.unique_id,
                    line.thread.display_name()
                )?;
                if line.thread.unread_count > 0 {
                    write!(f, " ({})", line.thread.unread_count)?;
                }
                writeln!(f)
            }
            Output::Position(Some(path)) => writeln!(f, "{path}"),
            Output::Thread(None) | Output::Position(None) => writeln!(f, "none"),
            Output::Summary(s) => {
                writeln!(f, "archive_count\t{}", s.archive_count)?;
                writeln!(f, "inbox_count\t{}", s.inbox_count)?;
                writeln!(f, "visible_thread_count\t{}", s.visible_thread_count)?;
                writeln!(f, "has_archived_threads_row\t{}", s.has_archived_threads_row)?;
                writeln!(f, "has_visible_reminders\t{}", s.has_visible_reminders)?;
                writeln!(
                    f,
                    "has_pinned_and_unpinned_threads\t{}",
                    s.has_pinned_and_unpinned_threads
                )
            }
        }
    }
}

pub struct App {
    store: RenderStateStore,
}

impl App {
    pub fn new() -> Self {
        Self {
            store: RenderStateStore::new(),
        }
    }

    pub fn load_snapshot(&self, snapshot: ChatListSnapshot) -> chatlist_state::Result<()> {
        self.store.publish(snapshot.into_render_state()?);
        Ok(())
    }

    pub fn execute(&self, command: &Command) -> Output {
        let state = self.store.load();
        tracing::debug!("Executing {:?}", command);
        match command {
            Command::Sections => Output::Sections(
                (0..state.section_count())
                    .filter_map(|index| {
                        Some(SectionLine {
                            index,
                            kind: state.sections().get(index)?.kind,
                            rows: state.row_count(index)?,
                        })
                    })
                    .collect(),
            ),
            Command::Thread { section, row } => {
                Output::Thread(thread_line(&state, IndexPath::new(*section, *row)))
            }
            Command::Locate { unique_id } => {
                Output::Position(state.index_path_for_unique_id(unique_id))
            }
            Command::Next { after } => {
                let mut selection = anchored(&state, after.as_deref());
                let moved = selection.select_next(&state);
                Output::Thread(moved.and_then(|path| thread_line(&state, path)))
            }
            Command::Prev { before } => {
                let mut selection = anchored(&state, before.as_deref());
                let moved = selection.select_prev(&state);
                Output::Thread(moved.and_then(|path| thread_line(&state, path)))
            }
            Command::Summary => Output::Summary(Summary {
                archive_count: state.archive_count(),
                inbox_count: state.inbox_count(),
                visible_thread_count: state.visible_thread_count(),
                has_archived_threads_row: state.has_archived_threads_row(),
                has_visible_reminders: state.has_visible_reminders(),
                has_pinned_and_unpinned_threads: state.has_pinned_and_unpinned_threads(),
            }),
        }
    }
}

/// An id the snapshot doesn't know is kept as a foreign thread so navigation
/// takes its fallback path.
fn anchored(state: &Arc<RenderState>, unique_id: Option<&str>) -> ChatListSelection {
    let Some(unique_id) = unique_id else {
        return ChatListSelection::new();
    };
    let thread = state
        .index_path_for_unique_id(unique_id)
        .and_then(|path| state.thread_at(path))
        .cloned()
        .unwrap_or_else(|| ChatThread::new(unique_id));
    ChatListSelection::anchored_at(thread)
}

fn thread_line(state: &RenderState, path: IndexPath) -> Option<ThreadLine> {
    Some(ThreadLine {
        position: path,
        thread: state.thread_at(path)?.clone(),
    })
}
