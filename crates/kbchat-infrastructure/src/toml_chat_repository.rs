//! TOML-backed chat archive repository.

use crate::dto::chat::ChatArchiveDocV1;
use crate::paths::StoragePaths;
use crate::storage::{AtomicTomlError, AtomicTomlFile};
use async_trait::async_trait;
use kbchat_core::chat::{ChatArchive, ChatArchiveRepository};
use kbchat_core::error::{KbChatError, Result};

/// Stores the chat archive in `chat.toml` under the storage root.
pub struct TomlChatArchiveRepository {
    file: AtomicTomlFile<ChatArchiveDocV1>,
}

impl TomlChatArchiveRepository {
    pub fn new(paths: &StoragePaths) -> Self {
        Self {
            file: AtomicTomlFile::new(paths.chat_file()),
        }
    }
}

fn storage_error(e: AtomicTomlError) -> KbChatError {
    match e {
        AtomicTomlError::Io(io) => KbChatError::Io {
            message: io.to_string(),
        },
        AtomicTomlError::Parse(e) => KbChatError::Serialization {
            format: "TOML".to_string(),
            message: e.to_string(),
        },
        AtomicTomlError::Serialize(e) => KbChatError::Serialization {
            format: "TOML".to_string(),
            message: e.to_string(),
        },
        AtomicTomlError::Lock(message) => KbChatError::Storage(message),
    }
}

#[async_trait]
impl ChatArchiveRepository for TomlChatArchiveRepository {
    async fn load(&self) -> Result<Option<ChatArchive>> {
        match self.file.load().map_err(storage_error)? {
            Some(doc) => {
                let archive = doc.into_domain()?;
                tracing::debug!(
                    conversations = archive.history.len(),
                    "loaded chat archive"
                );
                Ok(Some(archive))
            }
            None => Ok(None),
        }
    }

    async fn save(&self, archive: &ChatArchive) -> Result<()> {
        let doc = ChatArchiveDocV1::from_domain(archive);
        self.file.save(&doc).map_err(storage_error)
    }
}
