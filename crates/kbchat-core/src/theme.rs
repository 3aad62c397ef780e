//! Theme preference state.
//!
//! The theme is a pure state value. Applying it to a rendering surface is a
//! presentation concern: the stores in `kbchat-application` only emit the new
//! value, and an effect routine owned by the presentation layer applies it.

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Visual theme preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The opposite theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// An abstract repository for the theme-preference namespace.
#[async_trait]
pub trait ThemeRepository: Send + Sync {
    /// Loads the stored preference, `Ok(None)` when nothing was persisted yet.
    async fn load(&self) -> Result<Option<Theme>>;

    /// Saves the preference.
    async fn save(&self, theme: Theme) -> Result<()>;
}
