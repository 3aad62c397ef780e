//! Chat archive DTOs, schema version 1.0.0.
//!
//! On-disk shapes are kept separate from the domain models so the storage
//! schema can evolve independently. Timestamps are stored as RFC 3339
//! strings at second precision. A future schema version gets its own DTO set
//! plus a migration into the current one; the loader then tries versions
//! newest first.

use chrono::{DateTime, SecondsFormat, Utc};
use kbchat_core::chat::{
    ChatArchive, ChatHistoryItem, Feedback, Message, MessageRole, Source, AccessLevel,
};
use kbchat_core::error::{KbChatError, Result};
use kbchat_core::model::AiModel;
use serde::{Deserialize, Serialize};

/// Current chat archive schema version.
pub const CHAT_SCHEMA_VERSION: &str = "1.0.0";

/// Root document of the chat archive namespace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatArchiveDocV1 {
    pub schema_version: String,
    pub selected_model: AiModel,
    #[serde(default)]
    pub history: Vec<ChatHistoryItemV1>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatHistoryItemV1 {
    pub id: String,
    pub title: String,
    pub last_message: String,
    /// RFC 3339, second precision.
    pub timestamp: String,
    #[serde(default)]
    pub messages: Vec<MessageV1>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageV1 {
    pub id: String,
    pub role: MessageRole,
    pub content: String,
    /// RFC 3339, second precision.
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<Feedback>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_up_questions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<SourceV1>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceV1 {
    pub title: String,
    pub url: String,
    pub excerpt: String,
    pub access_level: AccessLevel,
}

fn encode_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn decode_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| KbChatError::Serialization {
            format: "RFC 3339".to_string(),
            message: format!("invalid timestamp '{raw}': {e}"),
        })
}

impl ChatArchiveDocV1 {
    /// Builds the on-disk document from the domain archive.
    pub fn from_domain(archive: &ChatArchive) -> Self {
        Self {
            schema_version: CHAT_SCHEMA_VERSION.to_string(),
            selected_model: archive.selected_model,
            history: archive.history.iter().map(ChatHistoryItemV1::from_domain).collect(),
        }
    }

    /// Converts the document back into the domain archive.
    ///
    /// Fails when the schema version is unsupported or a timestamp does not
    /// parse.
    pub fn into_domain(self) -> Result<ChatArchive> {
        if self.schema_version != CHAT_SCHEMA_VERSION {
            return Err(KbChatError::Storage(format!(
                "unsupported chat archive schema version '{}'",
                self.schema_version
            )));
        }

        let history = self
            .history
            .into_iter()
            .map(ChatHistoryItemV1::into_domain)
            .collect::<Result<Vec<_>>>()?;

        Ok(ChatArchive {
            history,
            selected_model: self.selected_model,
        })
    }
}

impl ChatHistoryItemV1 {
    fn from_domain(item: &ChatHistoryItem) -> Self {
        Self {
            id: item.id.clone(),
            title: item.title.clone(),
            last_message: item.last_message.clone(),
            timestamp: encode_timestamp(item.timestamp),
            messages: item.messages.iter().map(MessageV1::from_domain).collect(),
        }
    }

    fn into_domain(self) -> Result<ChatHistoryItem> {
        Ok(ChatHistoryItem {
            id: self.id,
            title: self.title,
            last_message: self.last_message,
            timestamp: decode_timestamp(&self.timestamp)?,
            messages: self
                .messages
                .into_iter()
                .map(MessageV1::into_domain)
                .collect::<Result<Vec<_>>>()?,
        })
    }
}

impl MessageV1 {
    fn from_domain(msg: &Message) -> Self {
        Self {
            id: msg.id.clone(),
            role: msg.role,
            content: msg.content.clone(),
            timestamp: encode_timestamp(msg.timestamp),
            confidence: msg.confidence,
            feedback: msg.feedback,
            comment: msg.comment.clone(),
            follow_up_questions: msg.follow_up_questions.clone(),
            sources: msg
                .sources
                .as_ref()
                .map(|sources| sources.iter().map(SourceV1::from_domain).collect()),
        }
    }

    fn into_domain(self) -> Result<Message> {
        Ok(Message {
            id: self.id,
            role: self.role,
            content: self.content,
            timestamp: decode_timestamp(&self.timestamp)?,
            confidence: self.confidence,
            sources: self
                .sources
                .map(|sources| sources.into_iter().map(SourceV1::into_domain).collect()),
            feedback: self.feedback,
            comment: self.comment,
            follow_up_questions: self.follow_up_questions,
        })
    }
}

impl SourceV1 {
    fn from_domain(source: &Source) -> Self {
        Self {
            title: source.title.clone(),
            url: source.url.clone(),
            excerpt: source.excerpt.clone(),
            access_level: source.access_level,
        }
    }

    fn into_domain(self) -> Source {
        Source {
            title: self.title,
            url: self.url,
            excerpt: self.excerpt,
            access_level: self.access_level,
        }
    }
}
