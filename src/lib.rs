//! Sectioned chat-list snapshot with index-path lookups.
//!
//! [`core::RenderState`] turns view info plus pinned/unpinned thread lists into
//! a fixed section layout and answers the row queries a list UI needs.

pub mod config;
pub mod core;
pub mod storage;

pub use crate::core::{
    ChatListSelection, ChatThread, Error, IndexPath, RenderState, RenderStateStore, Result,
    Section, SectionRows, SectionType, ViewInfo,
};
pub use crate::storage::ChatListSnapshot;
