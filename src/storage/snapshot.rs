use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::types::{ChatThread, ViewInfo};
use crate::core::{Error, RenderState, Result};

/// Materialized chat-list inputs as handed over by the thread store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatListSnapshot {
    #[serde(default)]
    pub view_info: ViewInfo,
    #[serde(default)]
    pub pinned: Vec<ChatThread>,
    #[serde(default)]
    pub unpinned: Vec<ChatThread>,
}

impl ChatListSnapshot {
    /// Reads a `.toml` or `.json` snapshot, chosen by file extension.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let snapshot = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml_str(&content)?,
            Some("json") => Self::from_json_str(&content)?,
            other => {
                return Err(Error::UnsupportedFormat(
                    other.unwrap_or("<none>").to_string(),
                ));
            }
        };
        tracing::info!(
            "Loaded snapshot from {}: {} pinned, {} unpinned",
            path.display(),
            snapshot.pinned.len(),
            snapshot.unpinned.len()
        );
        Ok(snapshot)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Checks the id uniqueness contract that [`RenderState`] relies on.
    pub fn validate(&self) -> Result<()> {
        let pinned = unique_ids(&self.pinned, "pinned")?;
        let unpinned = unique_ids(&self.unpinned, "unpinned")?;
        if let Some(id) = pinned.intersection(&unpinned).next() {
            return Err(Error::ThreadInBothLists(id.to_string()));
        }
        Ok(())
    }

    pub fn into_render_state(self) -> Result<RenderState> {
        if let Err(e) = self.validate() {
            tracing::warn!("Rejected chat list snapshot: {}", e);
            return Err(e);
        }
        Ok(RenderState::new(self.view_info, self.pinned, self.unpinned))
    }
}

fn unique_ids<'a>(threads: &'a [ChatThread], list: &'static str) -> Result<HashSet<&'a str>> {
    let mut seen = HashSet::with_capacity(threads.len());
    for thread in threads {
        if !seen.insert(thread.unique_id.as_str()) {
            return Err(Error::DuplicateThread {
                unique_id: thread.unique_id.clone(),
                list,
            });
        }
    }
    Ok(seen)
}
