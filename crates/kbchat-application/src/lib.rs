//! KBChat state containers and orchestration.
//!
//! The stores here are the only writers of their state: the conversation
//! store owns the active conversation and the chat history, the session
//! store owns authentication, the theme store owns the theme preference.
//! `ChatUseCase` wires user input through the answer provider and the
//! access-control filter, and `ChatApp` is the composition root that
//! assembles everything with TOML persistence.

pub mod bootstrap;
pub mod chat_usecase;
pub mod conversation_store;
pub mod session_store;
pub mod theme_store;

pub use bootstrap::ChatApp;
pub use chat_usecase::{ChatUseCase, FALLBACK_ANSWER, Submission};
pub use conversation_store::ConversationStore;
pub use session_store::{AuthError, SessionStore};
pub use theme_store::ThemeStore;
