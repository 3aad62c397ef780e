//! Versioned on-disk DTOs.
//!
//! Each durable namespace is a TOML document carrying a `schema_version`
//! field. Loaders convert the document into domain types and reject versions
//! they do not understand.

pub mod chat;
pub mod theme;

pub use chat::{CHAT_SCHEMA_VERSION, ChatArchiveDocV1};
pub use theme::{THEME_SCHEMA_VERSION, ThemeDocV1};
