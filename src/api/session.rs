//! Explicit session state for the backend's bearer-token auth.
//!
//! The token lives in a `Session` object injected into the client rather
//! than in any global store. A 401 from any protected endpoint transitions
//! the session to `Expired` and purges the token; there is no retry.

use std::sync::RwLock;

/// Lifecycle of the credentials held by a [`Session`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    /// No token has ever been stored (anonymous client, or after logout).
    #[default]
    Absent,
    /// A bearer token is held and presumed valid.
    Valid(String),
    /// The backend rejected the token; re-authentication is required.
    Expired,
}

/// Shared, thread-safe session handle.
///
/// Cheap to share behind the client; every protected request reads the
/// current token through it and the HTTP layer expires it on 401.
///
/// # Examples
///
/// ```
/// use aeris::{Session, SessionState};
///
/// let session = Session::anonymous();
/// assert_eq!(session.state(), SessionState::Absent);
///
/// session.store_token("abc123");
/// assert!(session.is_valid());
///
/// session.expire();
/// assert_eq!(session.state(), SessionState::Expired);
/// assert_eq!(session.token(), None);
/// ```
#[derive(Debug, Default)]
pub struct Session {
    state: RwLock<SessionState>,
}

impl Session {
    /// A session with no credentials.
    pub fn anonymous() -> Self {
        Session::default()
    }

    /// A session seeded with an existing bearer token.
    pub fn with_token(token: impl Into<String>) -> Self {
        Session {
            state: RwLock::new(SessionState::Valid(token.into())),
        }
    }

    /// The current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state.read().expect("session lock poisoned").clone()
    }

    /// The held token, if the session is valid.
    pub fn token(&self) -> Option<String> {
        match &*self.state.read().expect("session lock poisoned") {
            SessionState::Valid(token) => Some(token.clone()),
            SessionState::Absent | SessionState::Expired => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(
            &*self.state.read().expect("session lock poisoned"),
            SessionState::Valid(_)
        )
    }

    /// Stores a fresh token (after login), making the session valid.
    pub fn store_token(&self, token: impl Into<String>) {
        *self.state.write().expect("session lock poisoned") = SessionState::Valid(token.into());
    }

    /// Marks the session expired and purges the token (401 transition).
    pub fn expire(&self) {
        *self.state.write().expect("session lock poisoned") = SessionState::Expired;
    }

    /// Drops the credentials entirely (logout).
    pub fn clear(&self) {
        *self.state.write().expect("session lock poisoned") = SessionState::Absent;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifecycle_transitions() {
        let session = Session::anonymous();
        assert_eq!(session.state(), SessionState::Absent);
        assert_eq!(session.token(), None);

        session.store_token("tok");
        assert_eq!(session.state(), SessionState::Valid("tok".into()));
        assert_eq!(session.token(), Some("tok".into()));

        session.expire();
        assert_eq!(session.state(), SessionState::Expired);
        assert_eq!(session.token(), None);

        // Logging in again from an expired session works.
        session.store_token("tok2");
        assert!(session.is_valid());

        session.clear();
        assert_eq!(session.state(), SessionState::Absent);
    }
}
