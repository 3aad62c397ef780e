//! User roles and role derivation.

use serde::{Deserialize, Serialize};

/// Authorization role of the authenticated user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Regular user, sees public sources only.
    #[default]
    User,
    /// Administrator, sees every source.
    Admin,
}

/// Derives the role assigned at login time.
///
/// Mock rule for the placeholder auth flow: admin iff the username contains
/// the substring "admin", case-insensitive. A real backend would replace this
/// with a verified credential.
pub fn role_for_username(username: &str) -> UserRole {
    if username.to_lowercase().contains("admin") {
        UserRole::Admin
    } else {
        UserRole::User
    }
}
