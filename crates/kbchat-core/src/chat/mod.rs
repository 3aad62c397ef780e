//! Chat domain module.
//!
//! Contains the conversation domain models, history snapshot derivations,
//! the archive repository interface and the transcript export.
//!
//! # Module Structure
//!
//! - `message`: message types (`Message`, `MessageDraft`, `MessageUpdate`)
//! - `source`: cited source types (`Source`, `AccessLevel`)
//! - `history`: archived snapshots (`ChatHistoryItem`) and derivations
//! - `repository`: persistence interface for the durable slice
//! - `transcript`: plain-text export rendering

mod history;
mod message;
mod repository;
mod source;
mod transcript;

pub use history::{ChatHistoryItem, DEFAULT_CHAT_TITLE, derive_last_message, derive_title};
pub use message::{Feedback, Message, MessageDraft, MessageRole, MessageUpdate};
pub use repository::{ChatArchive, ChatArchiveRepository};
pub use source::{AccessLevel, Source, dedup_sources_by_url};
pub use transcript::{export_file_name, render_transcript};
