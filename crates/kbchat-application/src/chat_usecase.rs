//! Query submission orchestration.
//!
//! Wires user input through the conversation store, the answer provider and
//! the access-control filter. Each submission runs the state machine
//! Idle → Pending → {Settled, Failed}; only one request is in flight at a
//! time, gated cooperatively by the conversation store's loading flag.

use crate::conversation_store::ConversationStore;
use crate::session_store::SessionStore;
use kbchat_core::acl::filter_sources;
use kbchat_core::answer::AnswerProvider;
use kbchat_core::chat::{Feedback, MessageDraft, MessageUpdate};
use std::sync::Arc;

/// Fallback bot reply substituted when answer generation fails.
pub const FALLBACK_ANSWER: &str =
    "Извините, произошла ошибка при обработке вашего запроса. Попробуйте ещё раз.";

/// Terminal state of one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// The provider answered; a bot message with the answer was appended.
    Settled,
    /// The provider failed; the fallback bot message was appended.
    Failed,
    /// Empty or whitespace-only input; nothing happened.
    Ignored,
    /// A request was already in flight; nothing happened.
    Rejected,
}

/// Clears the loading flag when dropped, so no exit path of a submission
/// can leave the conversation stuck in a loading state.
struct LoadingGuard<'a> {
    conversation: &'a ConversationStore,
}

impl<'a> LoadingGuard<'a> {
    fn engage(conversation: &'a ConversationStore) -> Self {
        conversation.set_loading(true);
        Self { conversation }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.conversation.set_loading(false);
    }
}

/// Orchestrates query submission and feedback capture.
pub struct ChatUseCase {
    conversation: Arc<ConversationStore>,
    session: Arc<SessionStore>,
    provider: Arc<dyn AnswerProvider>,
}

impl ChatUseCase {
    pub fn new(
        conversation: Arc<ConversationStore>,
        session: Arc<SessionStore>,
        provider: Arc<dyn AnswerProvider>,
    ) -> Self {
        Self {
            conversation,
            session,
            provider,
        }
    }

    /// Submits a user query.
    ///
    /// Appends the user message, asks the provider for an answer with the
    /// selected model, filters the cited sources by the session role and
    /// appends the bot message. A provider failure is converted into the
    /// fixed fallback bot message; it never propagates to the caller and it
    /// never leaves the loading flag set.
    pub async fn submit(&self, input: &str) -> Submission {
        let query = input.trim();
        if query.is_empty() {
            return Submission::Ignored;
        }

        if self.conversation.is_loading() {
            tracing::debug!("submission rejected, request already in flight");
            return Submission::Rejected;
        }

        self.conversation
            .add_message(MessageDraft::user(query))
            .await;

        let _loading = LoadingGuard::engage(&self.conversation);
        let model = self.conversation.selected_model().await;

        match self.provider.generate_answer(query, model).await {
            Ok(answer) => {
                let role = self.session.role().await;
                let visible_sources = filter_sources(answer.sources, role);
                self.conversation
                    .add_message(MessageDraft::answer(
                        answer.content,
                        answer.confidence,
                        visible_sources,
                        answer.follow_up_questions,
                    ))
                    .await;
                Submission::Settled
            }
            Err(e) => {
                tracing::error!(error = %e, "answer generation failed");
                self.conversation
                    .add_message(MessageDraft::bot(FALLBACK_ANSWER))
                    .await;
                Submission::Failed
            }
        }
    }

    /// Records a helpfulness vote on a message.
    ///
    /// Forwards to the conversation store; the store's write-once rule makes
    /// repeated votes on the same message keep the first value.
    pub async fn leave_feedback(
        &self,
        message_id: &str,
        feedback: Feedback,
        comment: Option<String>,
    ) {
        self.conversation
            .update_message(message_id, MessageUpdate::feedback(feedback, comment))
            .await;
    }
}

#[cfg(test)]
#[path = "chat_usecase_test.rs"]
mod tests;
