//! Session context for authenticated calls.
//!
//! The token and signed-in user live in one value that is passed by
//! reference to whatever needs them. Nothing is stored globally.

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::types::UserId;

/// The signed-in user as returned by the login endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// User ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
}

#[derive(Debug, Clone)]
struct ActiveSession {
    token: String,
    user: SessionUser,
}

/// Authentication state tied to a login/logout lifecycle.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    active: Option<ActiveSession>,
}

impl SessionContext {
    /// Creates a signed-out session.
    #[must_use]
    pub const fn new() -> Self {
        Self { active: None }
    }

    /// Starts a session, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Unauthorized` if the token is blank.
    pub fn login(&mut self, token: impl Into<String>, user: SessionUser) -> AppResult<()> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(AppError::Unauthorized("empty session token".to_string()));
        }
        self.active = Some(ActiveSession { token, user });
        Ok(())
    }

    /// Ends the session. Signing out twice is harmless.
    pub fn logout(&mut self) {
        self.active = None;
    }

    /// Returns true while a user is signed in.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.active.is_some()
    }

    /// Bearer token of the active session.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.active.as_ref().map(|s| s.token.as_str())
    }

    /// The signed-in user.
    #[must_use]
    pub fn user(&self) -> Option<&SessionUser> {
        self.active.as_ref().map(|s| &s.user)
    }

    /// Returns the token or fails with `Unauthorized`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Unauthorized` when signed out.
    pub fn require_token(&self) -> AppResult<&str> {
        self.token()
            .ok_or_else(|| AppError::Unauthorized("not signed in".to_string()))
    }
}
