//! Archived conversation snapshots.

use super::message::Message;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default title for a conversation whose first message is absent or empty.
pub const DEFAULT_CHAT_TITLE: &str = "Новый чат";

/// Maximum number of characters of the first message kept in a title.
const TITLE_MAX_CHARS: usize = 50;

/// Maximum number of characters of the newest message kept in `last_message`.
const LAST_MESSAGE_MAX_CHARS: usize = 100;

/// A snapshot of one conversation in the chat history.
///
/// One item exists per conversation that has ever received a message while
/// active; the conversation store refreshes it on every append, so it mirrors
/// the live conversation until archived. Removed only by explicit deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatHistoryItem {
    /// The conversation's id.
    pub id: String,
    /// Derived from the first message, see [`derive_title`].
    pub title: String,
    /// Derived from the newest message, see [`derive_last_message`].
    pub last_message: String,
    /// Timestamp of the latest refresh.
    pub timestamp: DateTime<Utc>,
    /// Full ordered snapshot of the conversation.
    pub messages: Vec<Message>,
}

impl ChatHistoryItem {
    /// Builds a snapshot of the given conversation.
    pub fn snapshot(id: impl Into<String>, messages: &[Message]) -> Self {
        Self {
            id: id.into(),
            title: derive_title(messages),
            last_message: derive_last_message(messages),
            timestamp: Utc::now(),
            messages: messages.to_vec(),
        }
    }
}

/// Derives a history title: the first message's content cut to 50 characters
/// with an ellipsis marker, or [`DEFAULT_CHAT_TITLE`] when the conversation
/// has no first message or it is empty.
pub fn derive_title(messages: &[Message]) -> String {
    match messages.first() {
        Some(first) if !first.content.is_empty() => {
            format!("{}...", truncate_chars(&first.content, TITLE_MAX_CHARS))
        }
        _ => DEFAULT_CHAT_TITLE.to_string(),
    }
}

/// Derives the `last_message` preview: the newest message's content cut to
/// 100 characters, with an ellipsis marker only when it was actually cut.
pub fn derive_last_message(messages: &[Message]) -> String {
    match messages.last() {
        Some(last) => {
            let cut = truncate_chars(&last.content, LAST_MESSAGE_MAX_CHARS);
            if cut.len() < last.content.len() {
                format!("{cut}...")
            } else {
                cut.to_string()
            }
        }
        None => String::new(),
    }
}

/// Cuts a string to at most `max` characters. Counts characters, not bytes:
/// knowledge-base content is Cyrillic-heavy, and a byte cut would panic on a
/// UTF-8 boundary.
fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
