//! Session state container.
//!
//! Owns the authentication flag, the username and the derived role. The
//! login flow is a placeholder: it simulates backend latency and accepts any
//! non-empty credentials, deriving the role from the username. Session state
//! is deliberately not persisted; every process start requires a fresh
//! login.

use kbchat_core::user::{UserRole, role_for_username};
use std::time::Duration;
use thiserror::Error;
use tokio::sync::RwLock;

/// Simulated backend latency used by [`SessionStore::new`].
const DEFAULT_LOGIN_LATENCY: Duration = Duration::from_millis(500);

/// Login failure modes.
///
/// The mock only ever produces `InvalidCredentials` for empty input; a real
/// backend implementation reports rejected credentials through the same
/// variant without changing the call signature.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,
}

#[derive(Debug, Clone, Default)]
struct SessionState {
    is_authenticated: bool,
    username: String,
    role: UserRole,
}

/// State container for the authenticated session.
pub struct SessionStore {
    state: RwLock<SessionState>,
    login_latency: Duration,
}

impl SessionStore {
    /// Store with the default simulated login latency.
    pub fn new() -> Self {
        Self::with_login_latency(DEFAULT_LOGIN_LATENCY)
    }

    /// Store with a custom simulated login latency. Tests pass
    /// `Duration::ZERO`.
    pub fn with_login_latency(login_latency: Duration) -> Self {
        Self {
            state: RwLock::new(SessionState::default()),
            login_latency,
        }
    }

    /// Authenticates the user.
    ///
    /// Empty or whitespace-only credentials are rejected; anything else
    /// succeeds after the simulated latency. The role is derived from the
    /// username: admin iff it contains "admin", case-insensitive.
    pub async fn login(&self, username: &str, password: &str) -> Result<(), AuthError> {
        if username.trim().is_empty() || password.trim().is_empty() {
            return Err(AuthError::InvalidCredentials);
        }

        tokio::time::sleep(self.login_latency).await;

        let role = role_for_username(username);
        let mut state = self.state.write().await;
        *state = SessionState {
            is_authenticated: true,
            username: username.to_string(),
            role,
        };
        tracing::info!(username, ?role, "user logged in");
        Ok(())
    }

    /// Ends the session, resetting all fields to their defaults.
    ///
    /// Completes immediately: no latency, no side effects beyond state.
    pub async fn logout(&self) {
        let mut state = self.state.write().await;
        *state = SessionState::default();
    }

    pub async fn is_authenticated(&self) -> bool {
        self.state.read().await.is_authenticated
    }

    pub async fn username(&self) -> String {
        self.state.read().await.username.clone()
    }

    pub async fn role(&self) -> UserRole {
        self.state.read().await.role
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
