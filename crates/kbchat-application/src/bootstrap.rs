//! Composition root.
//!
//! Wires the TOML repositories, the state containers and the stub answer
//! provider into a ready-to-embed application object. A UI layer holds one
//! [`ChatApp`] and talks to the stores and the use case through it; nothing
//! else reaches for global state.

use crate::chat_usecase::ChatUseCase;
use crate::conversation_store::ConversationStore;
use crate::session_store::SessionStore;
use crate::theme_store::ThemeStore;
use anyhow::{Context, Result};
use kbchat_core::answer::AnswerProvider;
use kbchat_infrastructure::{StoragePaths, TomlChatArchiveRepository, TomlThemeRepository};
use kbchat_interaction::KeywordAnswerProvider;
use std::path::PathBuf;
use std::sync::Arc;

/// The assembled application: stores plus orchestration.
pub struct ChatApp {
    pub conversation: Arc<ConversationStore>,
    pub session: Arc<SessionStore>,
    pub theme: Arc<ThemeStore>,
    pub chat: ChatUseCase,
}

impl ChatApp {
    /// Assembles the application with TOML persistence and the built-in
    /// keyword answer provider.
    ///
    /// `storage_root` overrides the platform config directory; pass `None`
    /// outside of tests.
    pub async fn init(storage_root: Option<PathBuf>) -> Result<Self> {
        let provider = Arc::new(KeywordAnswerProvider::new());
        Self::init_with_provider(storage_root, provider).await
    }

    /// Assembles the application around a custom answer provider, e.g. a
    /// real retrieval backend.
    pub async fn init_with_provider(
        storage_root: Option<PathBuf>,
        provider: Arc<dyn AnswerProvider>,
    ) -> Result<Self> {
        let paths = StoragePaths::new(storage_root).context("failed to resolve storage paths")?;
        tracing::info!(root = %paths.root().display(), "initializing chat application");

        let chat_repository = Arc::new(TomlChatArchiveRepository::new(&paths));
        let theme_repository = Arc::new(TomlThemeRepository::new(&paths));

        let conversation = Arc::new(
            ConversationStore::new(chat_repository)
                .await
                .context("failed to load chat archive")?,
        );
        let session = Arc::new(SessionStore::new());
        let theme = Arc::new(
            ThemeStore::new(theme_repository)
                .await
                .context("failed to load theme preference")?,
        );

        let chat = ChatUseCase::new(conversation.clone(), session.clone(), provider);

        Ok(Self {
            conversation,
            session,
            theme,
            chat,
        })
    }
}
