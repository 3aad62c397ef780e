//! Chat archive repository trait.
//!
//! Defines the interface for persisting the durable slice of the
//! conversation store.

use super::history::ChatHistoryItem;
use crate::error::Result;
use crate::model::AiModel;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// The durable slice of the conversation store.
///
/// Only the chat history and the selected model survive a process restart;
/// the active conversation and the loading flag always reset to defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatArchive {
    /// Archived (or live-mirrored) conversation snapshots, newest first.
    pub history: Vec<ChatHistoryItem>,
    /// The model selected for answer generation.
    pub selected_model: AiModel,
}

/// An abstract repository for the chat archive namespace.
///
/// Decouples the conversation store from the storage mechanism (TOML files,
/// a database, a remote API). The store loads once on init and saves on every
/// change to the durable slice.
#[async_trait]
pub trait ChatArchiveRepository: Send + Sync {
    /// Loads the archive.
    ///
    /// Returns `Ok(None)` when nothing has been persisted yet.
    async fn load(&self) -> Result<Option<ChatArchive>>;

    /// Saves the archive, replacing any previous contents.
    async fn save(&self, archive: &ChatArchive) -> Result<()>;
}
