//! Authenticated session.

use std::fmt;

/// The result of a successful authentication.
///
/// Carries the credential for later requests together with the user details
/// shown in the report.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    token: String,
    username: String,
    level: u32,
}

impl Session {
    /// Create a session for an already-verified credential.
    pub fn new(token: impl Into<String>, username: impl Into<String>, level: u32) -> Self {
        Self {
            token: token.into(),
            username: username.into(),
            level,
        }
    }

    /// The user's display name.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The user's current level.
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Value for the `Authorization` header.
    pub(crate) fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &"[REDACTED]")
            .field("username", &self.username)
            .field("level", &self.level)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_header_format() {
        let session = Session::new("my-token", "koichi", 3);
        assert_eq!(session.bearer(), "Bearer my-token");
    }

    #[test]
    fn debug_masks_token() {
        let session = Session::new("super-secret", "koichi", 3);
        let debug = format!("{session:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("koichi"));
    }
}
