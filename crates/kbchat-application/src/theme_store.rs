//! Theme preference container.
//!
//! Holds the theme as a pure state value and persists it on change. The
//! store never touches a rendering surface: mutations return the new value,
//! and an effect routine owned by the presentation layer applies it to
//! whatever surface exists.

use kbchat_core::error::Result;
use kbchat_core::theme::{Theme, ThemeRepository};
use std::sync::Arc;
use tokio::sync::RwLock;

/// State container for the visual theme preference.
pub struct ThemeStore {
    state: RwLock<Theme>,
    repository: Arc<dyn ThemeRepository>,
}

impl ThemeStore {
    /// Creates the store, restoring the persisted preference (light when
    /// nothing was persisted yet).
    pub async fn new(repository: Arc<dyn ThemeRepository>) -> Result<Self> {
        let theme = repository.load().await?.unwrap_or_default();
        Ok(Self {
            state: RwLock::new(theme),
            repository,
        })
    }

    /// The current theme.
    pub async fn theme(&self) -> Theme {
        *self.state.read().await
    }

    /// Switches to the opposite theme and returns the new value for the
    /// presentation layer to apply.
    pub async fn toggle_theme(&self) -> Theme {
        let mut state = self.state.write().await;
        let next = state.toggled();
        *state = next;
        drop(state);

        self.persist(next).await;
        next
    }

    /// Sets the theme and returns it.
    pub async fn set_theme(&self, theme: Theme) -> Theme {
        *self.state.write().await = theme;
        self.persist(theme).await;
        theme
    }

    async fn persist(&self, theme: Theme) {
        if let Err(e) = self.repository.save(theme).await {
            tracing::warn!(error = %e, "failed to persist theme preference");
        }
    }
}
