//! Conversation message types.
//!
//! This module contains types for representing messages in a conversation,
//! including roles, feedback votes and the draft/update shapes used by the
//! conversation store.

use super::source::Source;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Represents the author of a message in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    /// Message from the authenticated user.
    User,
    /// Message from the answer provider.
    Bot,
}

/// A helpfulness vote left by the user on a bot message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feedback {
    Helpful,
    Unhelpful,
}

/// A single message in the active conversation or an archived snapshot.
///
/// Messages are created exactly once by the conversation store, which assigns
/// the id and timestamp. `feedback` and `comment` are captured later through
/// [`MessageUpdate`]; a message is never deleted individually, only as part of
/// clearing or discarding a whole conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Unique message identifier (UUID v4).
    pub id: String,
    /// The author of the message.
    pub role: MessageRole,
    /// The message text.
    pub content: String,
    /// Timestamp when the message was created.
    pub timestamp: DateTime<Utc>,
    /// Provider confidence in `[0, 1]`, bot messages only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
    /// Cited sources, already filtered for the viewer's role.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<Source>>,
    /// Helpfulness vote. Write-once: enforced by the conversation store.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<Feedback>,
    /// Free-form comment attached to the feedback vote.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Suggested follow-up questions, bot messages only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_up_questions: Option<Vec<String>>,
}

impl Message {
    /// Materializes a draft into a stored message with a fresh id and the
    /// current timestamp.
    pub fn from_draft(draft: MessageDraft) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role: draft.role,
            content: draft.content,
            timestamp: Utc::now(),
            confidence: draft.confidence,
            sources: draft.sources,
            feedback: None,
            comment: None,
            follow_up_questions: draft.follow_up_questions,
        }
    }

    /// Merges an update into this message.
    ///
    /// `feedback` is write-once: once a vote is recorded, a later update
    /// carrying a vote (same or different) leaves the stored value unchanged
    /// while the remaining fields still merge.
    pub fn apply(&mut self, update: MessageUpdate) {
        if let Some(content) = update.content {
            self.content = content;
        }
        if self.feedback.is_none() {
            if let Some(feedback) = update.feedback {
                self.feedback = Some(feedback);
            }
        }
        if let Some(comment) = update.comment {
            self.comment = Some(comment);
        }
    }
}

/// The caller-supplied part of a new message.
///
/// The conversation store owns id and timestamp assignment, so callers only
/// describe role and payload.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageDraft {
    pub role: MessageRole,
    pub content: String,
    pub confidence: Option<f32>,
    pub sources: Option<Vec<Source>>,
    pub follow_up_questions: Option<Vec<String>>,
}

impl MessageDraft {
    /// A plain user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
            confidence: None,
            sources: None,
            follow_up_questions: None,
        }
    }

    /// A plain bot message without provider metadata, e.g. the fallback
    /// message substituted on generation failure.
    pub fn bot(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Bot,
            content: content.into(),
            confidence: None,
            sources: None,
            follow_up_questions: None,
        }
    }

    /// A bot message carrying a generated answer.
    pub fn answer(
        content: impl Into<String>,
        confidence: f32,
        sources: Vec<Source>,
        follow_up_questions: Vec<String>,
    ) -> Self {
        Self {
            role: MessageRole::Bot,
            content: content.into(),
            confidence: Some(confidence),
            sources: Some(sources),
            follow_up_questions: Some(follow_up_questions),
        }
    }
}

/// Fields that may be merged into an existing message.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageUpdate {
    pub content: Option<String>,
    pub feedback: Option<Feedback>,
    pub comment: Option<String>,
}

impl MessageUpdate {
    /// An update capturing a feedback vote with an optional comment.
    pub fn feedback(feedback: Feedback, comment: Option<String>) -> Self {
        Self {
            content: None,
            feedback: Some(feedback),
            comment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_draft_assigns_unique_ids() {
        let a = Message::from_draft(MessageDraft::user("первый"));
        let b = Message::from_draft(MessageDraft::user("второй"));
        assert_ne!(a.id, b.id);
        assert_eq!(a.role, MessageRole::User);
        assert!(a.feedback.is_none());
    }

    #[test]
    fn apply_merges_comment_and_content() {
        let mut msg = Message::from_draft(MessageDraft::bot("ответ"));
        msg.apply(MessageUpdate {
            content: Some("исправленный ответ".to_string()),
            feedback: None,
            comment: Some("спасибо".to_string()),
        });
        assert_eq!(msg.content, "исправленный ответ");
        assert_eq!(msg.comment.as_deref(), Some("спасибо"));
    }

    #[test]
    fn feedback_is_write_once() {
        let mut msg = Message::from_draft(MessageDraft::bot("ответ"));
        msg.apply(MessageUpdate::feedback(Feedback::Helpful, None));
        assert_eq!(msg.feedback, Some(Feedback::Helpful));

        // A second vote must not overwrite the first one.
        msg.apply(MessageUpdate::feedback(
            Feedback::Unhelpful,
            Some("передумал".to_string()),
        ));
        assert_eq!(msg.feedback, Some(Feedback::Helpful));
        // Sibling fields of the ignored vote still merge.
        assert_eq!(msg.comment.as_deref(), Some("передумал"));
    }
}
