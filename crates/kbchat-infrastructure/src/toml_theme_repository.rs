//! TOML-backed theme preference repository.

use crate::dto::theme::ThemeDocV1;
use crate::paths::StoragePaths;
use crate::storage::AtomicTomlFile;
use async_trait::async_trait;
use kbchat_core::error::{KbChatError, Result};
use kbchat_core::theme::{Theme, ThemeRepository};

/// Stores the theme preference in `theme.toml` under the storage root.
pub struct TomlThemeRepository {
    file: AtomicTomlFile<ThemeDocV1>,
}

impl TomlThemeRepository {
    pub fn new(paths: &StoragePaths) -> Self {
        Self {
            file: AtomicTomlFile::new(paths.theme_file()),
        }
    }
}

#[async_trait]
impl ThemeRepository for TomlThemeRepository {
    async fn load(&self) -> Result<Option<Theme>> {
        let doc = self
            .file
            .load()
            .map_err(|e| KbChatError::Storage(e.to_string()))?;
        doc.map(ThemeDocV1::into_domain).transpose()
    }

    async fn save(&self, theme: Theme) -> Result<()> {
        self.file
            .save(&ThemeDocV1::from_domain(theme))
            .map_err(|e| KbChatError::Storage(e.to_string()))
    }
}
