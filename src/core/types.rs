use serde::{Deserialize, Serialize};
use std::fmt;

/// Summary counts and banner flags computed outside the chat list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewInfo {
    #[serde(default)]
    pub archive_count: usize,
    #[serde(default)]
    pub inbox_count: usize,
    #[serde(default)]
    pub has_archived_threads_row: bool,
    #[serde(default)]
    pub has_visible_reminders: bool,
}

impl ViewInfo {
    pub fn empty() -> Self {
        Self::default()
    }
}

/// A conversation row. Only `unique_id` drives layout and lookups; the rest is
/// carried for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatThread {
    pub unique_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub last_message: Option<String>,
    #[serde(default)]
    pub unread_count: u32,
}

impl ChatThread {
    pub fn new(unique_id: impl Into<String>) -> Self {
        Self {
            unique_id: unique_id.into(),
            name: String::new(),
            last_message: None,
            unread_count: 0,
        }
    }

    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.unique_id
        } else {
            &self.name
        }
    }
}

/// Section kinds, declared in the order they appear in the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionType {
    Reminders,
    ArchiveButton,
    Pinned,
    Unpinned,
}

impl fmt::Display for SectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectionType::Reminders => write!(f, "reminders"),
            SectionType::ArchiveButton => write!(f, "archive_button"),
            SectionType::Pinned => write!(f, "pinned"),
            SectionType::Unpinned => write!(f, "unpinned"),
        }
    }
}

/// Which thread list, if any, backs a section's rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionRows {
    NoRows,
    Pinned,
    Unpinned,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub kind: SectionType,
    pub rows: SectionRows,
}

impl Section {
    pub fn new(kind: SectionType, rows: SectionRows) -> Self {
        Self { kind, rows }
    }
}

/// Two-level (section, row) position in the rendered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndexPath {
    pub section: usize,
    pub row: usize,
}

impl IndexPath {
    pub fn new(section: usize, row: usize) -> Self {
        Self { section, row }
    }
}

impl fmt::Display for IndexPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.section, self.row)
    }
}
