//! Access-control filtering of cited sources.

use crate::chat::{AccessLevel, Source};
use crate::user::UserRole;

/// Returns the subset of `sources` visible to the given role.
///
/// Admins see the input unchanged; everyone else sees only public sources,
/// relative order preserved. Total function, no failure modes.
pub fn filter_sources(sources: Vec<Source>, role: UserRole) -> Vec<Source> {
    if role == UserRole::Admin {
        return sources;
    }

    sources
        .into_iter()
        .filter(|source| source.access_level == AccessLevel::Public)
        .collect()
}

/// True iff a source with the given access level is visible to the role.
pub fn has_access(access_level: AccessLevel, role: UserRole) -> bool {
    if access_level == AccessLevel::Public {
        return true;
    }

    role == UserRole::Admin
}
