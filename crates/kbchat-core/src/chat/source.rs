//! Cited source types.

use serde::{Deserialize, Serialize};

/// Visibility tag on a cited source, gating visibility by role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessLevel {
    /// Visible to every authenticated user.
    Public,
    /// Visible to admins only.
    Restricted,
}

/// A knowledge-base document cited by a bot answer.
///
/// Immutable value object owned by the message that carries it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    /// Document title.
    pub title: String,
    /// Link into the knowledge base.
    pub url: String,
    /// Short excerpt locating the answer inside the document.
    pub excerpt: String,
    /// Visibility tag.
    pub access_level: AccessLevel,
}

/// De-duplicates sources by `url` for aggregated display, keeping the first
/// occurrence of each url and the relative order of survivors.
pub fn dedup_sources_by_url(sources: &[Source]) -> Vec<Source> {
    let mut seen = std::collections::HashSet::new();
    sources
        .iter()
        .filter(|s| seen.insert(s.url.clone()))
        .cloned()
        .collect()
}
