//! Path management for KBChat storage files.
//!
//! All durable namespaces live under one per-user configuration directory.
//! Tests (and embedders that manage their own layout) can override the root.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/kbchat/        # Config directory
//! ├── chat.toml            # Chat archive: history + selected model
//! └── theme.toml           # Theme preference
//! ```

use kbchat_core::error::{KbChatError, Result};
use std::path::PathBuf;

/// Resolves the locations of the KBChat storage files.
#[derive(Debug, Clone)]
pub struct StoragePaths {
    root: PathBuf,
}

impl StoragePaths {
    /// Paths rooted at `root_override`, or at the platform config directory
    /// (`<config>/kbchat/`) when `None`.
    pub fn new(root_override: Option<PathBuf>) -> Result<Self> {
        let root = match root_override {
            Some(root) => root,
            None => dirs::config_dir()
                .ok_or_else(|| {
                    KbChatError::Config("cannot determine platform config directory".to_string())
                })?
                .join("kbchat"),
        };
        Ok(Self { root })
    }

    /// The storage root directory.
    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    /// The chat archive namespace (history + selected model).
    pub fn chat_file(&self) -> PathBuf {
        self.root.join("chat.toml")
    }

    /// The theme preference namespace.
    pub fn theme_file(&self) -> PathBuf {
        self.root.join("theme.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_root_is_used_verbatim() {
        let paths = StoragePaths::new(Some(PathBuf::from("/tmp/kbchat-test"))).unwrap();
        assert_eq!(paths.chat_file(), PathBuf::from("/tmp/kbchat-test/chat.toml"));
        assert_eq!(paths.theme_file(), PathBuf::from("/tmp/kbchat-test/theme.toml"));
    }
}
