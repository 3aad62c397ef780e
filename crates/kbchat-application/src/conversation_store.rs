//! Conversation state container.
//!
//! Sole source of truth for the active conversation, the chat history, the
//! loading flag and the selected model. Mutation happens only through the
//! methods here; persistence of the durable slice (history + selected model)
//! goes through an injected repository, loaded once on init and saved on
//! every change.

use kbchat_core::chat::{
    ChatArchive, ChatArchiveRepository, ChatHistoryItem, Message, MessageDraft, MessageUpdate,
    render_transcript,
};
use kbchat_core::error::Result;
use kbchat_core::model::AiModel;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

/// Mutable conversation state guarded by the store's lock.
#[derive(Debug, Default)]
struct ChatState {
    current_chat_id: Option<String>,
    messages: Vec<Message>,
    history: Vec<ChatHistoryItem>,
    selected_model: AiModel,
}

impl ChatState {
    /// Upserts the active conversation's snapshot into history: replace in
    /// place when an item with this id exists (preserving its position),
    /// otherwise prepend. Call only with `current_chat_id` set.
    fn upsert_history(&mut self, chat_id: &str) {
        let snapshot = ChatHistoryItem::snapshot(chat_id, &self.messages);
        match self.history.iter().position(|item| item.id == chat_id) {
            Some(index) => self.history[index] = snapshot,
            None => self.history.insert(0, snapshot),
        }
    }

    fn archive(&self) -> ChatArchive {
        ChatArchive {
            history: self.history.clone(),
            selected_model: self.selected_model,
        }
    }
}

/// State container for the active conversation and the chat history.
///
/// Thread safety: the message list and history are guarded by one `RwLock`,
/// so an append's read-modify-write of both cannot interleave with a
/// concurrent `create_new_chat` or `delete_chat`. The loading flag is an
/// independent atomic so it can be toggled without touching the lock.
pub struct ConversationStore {
    state: RwLock<ChatState>,
    is_loading: AtomicBool,
    repository: Arc<dyn ChatArchiveRepository>,
}

impl ConversationStore {
    /// Creates the store, restoring the persisted history and selected model.
    ///
    /// The active conversation and the loading flag always start at their
    /// defaults; only the durable slice is restored.
    pub async fn new(repository: Arc<dyn ChatArchiveRepository>) -> Result<Self> {
        let mut state = ChatState::default();
        if let Some(archive) = repository.load().await? {
            state.history = archive.history;
            state.selected_model = archive.selected_model;
        }

        Ok(Self {
            state: RwLock::new(state),
            is_loading: AtomicBool::new(false),
            repository,
        })
    }

    /// Appends a message to the active conversation.
    ///
    /// Assigns a fresh id and the current timestamp. When a conversation id
    /// is set, the matching history item is refreshed with the full updated
    /// snapshot; in scratch state (no id) the history is left alone and the
    /// message will never be archived. Never fails: a persistence error is
    /// logged and swallowed, the in-memory state is already updated.
    pub async fn add_message(&self, draft: MessageDraft) {
        let mut state = self.state.write().await;
        state.messages.push(Message::from_draft(draft));

        if let Some(chat_id) = state.current_chat_id.clone() {
            state.upsert_history(&chat_id);
            self.persist(&state).await;
        }
    }

    /// Merges `update` into the message with the given id.
    ///
    /// Silent no-op when the id is unknown. Feedback is write-once (enforced
    /// by [`Message::apply`]). The matching history snapshot's message list
    /// is refreshed so captured feedback survives a restart; its title,
    /// preview and timestamp are not recomputed.
    pub async fn update_message(&self, id: &str, update: MessageUpdate) {
        let mut state = self.state.write().await;
        let Some(position) = state.messages.iter().position(|m| m.id == id) else {
            return;
        };
        state.messages[position].apply(update);

        if let Some(chat_id) = state.current_chat_id.clone() {
            let messages = state.messages.clone();
            if let Some(index) = state.history.iter().position(|item| item.id == chat_id) {
                state.history[index].messages = messages;
                self.persist(&state).await;
            }
        }
    }

    /// Empties the active conversation and resets its id.
    ///
    /// History is not touched: the conversation's last saved snapshot, if
    /// any, stays archived.
    pub async fn clear_current_chat(&self) {
        let mut state = self.state.write().await;
        state.messages.clear();
        state.current_chat_id = None;
    }

    /// Archives the active conversation (when non-empty and identified) and
    /// starts a fresh one with a new id.
    pub async fn create_new_chat(&self) {
        let mut state = self.state.write().await;

        if !state.messages.is_empty() {
            if let Some(chat_id) = state.current_chat_id.clone() {
                state.upsert_history(&chat_id);
                self.persist(&state).await;
            }
        }

        state.current_chat_id = Some(uuid::Uuid::new_v4().to_string());
        state.messages.clear();
    }

    /// Makes an archived conversation the active one.
    ///
    /// Copies the stored snapshot into the active view. Silent no-op when
    /// the id is unknown.
    pub async fn load_chat(&self, chat_id: &str) {
        let mut state = self.state.write().await;
        let Some(item) = state.history.iter().find(|item| item.id == chat_id) else {
            return;
        };
        let messages = item.messages.clone();
        state.current_chat_id = Some(chat_id.to_string());
        state.messages = messages;
    }

    /// Removes a conversation from history.
    ///
    /// The active view is untouched even when `chat_id` is the active
    /// conversation's id.
    pub async fn delete_chat(&self, chat_id: &str) {
        let mut state = self.state.write().await;
        let before = state.history.len();
        state.history.retain(|item| item.id != chat_id);
        if state.history.len() != before {
            self.persist(&state).await;
        }
    }

    /// Sets the loading flag. Not persisted.
    pub fn set_loading(&self, loading: bool) {
        self.is_loading.store(loading, Ordering::SeqCst);
    }

    /// Whether a request is currently in flight.
    pub fn is_loading(&self) -> bool {
        self.is_loading.load(Ordering::SeqCst)
    }

    /// Selects the model used for answer generation. Persisted.
    pub async fn set_selected_model(&self, model: AiModel) {
        let mut state = self.state.write().await;
        state.selected_model = model;
        self.persist(&state).await;
    }

    /// Renders the active conversation as a plain-text transcript.
    pub async fn export_chat_to_txt(&self) -> String {
        let state = self.state.read().await;
        render_transcript(&state.messages)
    }

    /// Snapshot of the active message list.
    pub async fn messages(&self) -> Vec<Message> {
        self.state.read().await.messages.clone()
    }

    /// Snapshot of the chat history, newest first.
    pub async fn history(&self) -> Vec<ChatHistoryItem> {
        self.state.read().await.history.clone()
    }

    /// The active conversation id, `None` in scratch state.
    pub async fn current_chat_id(&self) -> Option<String> {
        self.state.read().await.current_chat_id.clone()
    }

    /// The currently selected model.
    pub async fn selected_model(&self) -> AiModel {
        self.state.read().await.selected_model
    }

    /// Saves the durable slice, logging instead of failing: conversation
    /// mutations must not error out of a persistence hiccup.
    async fn persist(&self, state: &ChatState) {
        if let Err(e) = self.repository.save(&state.archive()).await {
            tracing::warn!(error = %e, "failed to persist chat archive");
        }
    }
}

#[cfg(test)]
#[path = "conversation_store_test.rs"]
mod tests;
