use common::user::UserProfile;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Failed to access session file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed session file: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Auth state for one user of the backend: the bearer token and the profile
/// returned at login, plus an optional explicit acting-user override.
///
/// Persistence is explicit: nothing is written unless `save` is called.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Session {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<UserProfile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id_override: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a session from disk. A missing file is an empty session; a file
    /// that exists but does not parse is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SessionError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SessionError> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn set_auth(&mut self, token: String, user: UserProfile) {
        self.token = Some(token);
        self.user = Some(user);
    }

    /// Drop the auth state. The acting-user override survives, the same way
    /// an explicitly chosen user id outlives a login.
    pub fn clear(&mut self) {
        self.token = None;
        self.user = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    /// Resolve the acting user id: an explicit override wins, then the stored
    /// profile's id, then the subject claim of the auth token.
    pub fn user_id(&self) -> Option<String> {
        if let Some(id) = &self.user_id_override {
            if !id.is_empty() {
                return Some(id.clone());
            }
        }
        if let Some(user) = &self.user {
            if !user.id.is_empty() {
                return Some(user.id.clone());
            }
        }
        self.token.as_deref().and_then(crate::jwt::subject)
    }

    pub fn wallet_address(&self) -> Option<&str> {
        self.user.as_ref().and_then(|u| u.wallet_address.as_deref())
    }
}
