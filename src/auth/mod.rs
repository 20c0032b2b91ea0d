use std::sync::Arc;

use arc_swap::ArcSwap;
use flume::Sender;
use tracing::{info, warn};

use crate::event::events::Event;
use crate::http::ApiClient;
use crate::http::models::User;

const KEYRING_SERVICE: &str = "mellow";
const KEYRING_USER: &str = "api-token";

/// Snapshot of the authentication state. `loading` is true only while the
/// initial session resolution is in flight.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthSession {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthSession {
    pub fn resolving() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }

    pub fn signed_out() -> Self {
        Self {
            user: None,
            loading: false,
        }
    }

    pub fn signed_in(user: User) -> Self {
        Self {
            user: Some(user),
            loading: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Single writer of the session snapshot. Everything else reads through
/// [`AuthService::session`] and treats the result as immutable.
pub struct AuthService {
    session: ArcSwap<AuthSession>,
}

impl AuthService {
    pub fn new() -> Self {
        Self {
            session: ArcSwap::from_pointee(AuthSession::resolving()),
        }
    }

    pub fn session(&self) -> Arc<AuthSession> {
        self.session.load_full()
    }

    pub fn set(&self, session: AuthSession) {
        self.session.store(Arc::new(session));
    }

    pub fn sign_out(&self, api: &ApiClient) {
        api.set_token(None);
        self.set(AuthSession::signed_out());
        clear_stored_token();
    }
}

impl Default for AuthService {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolves the session once at startup: token from the environment wins,
/// then the keyring. No token or a rejected token resolves to signed-out,
/// never to an error.
pub async fn resolve_session(
    service: Arc<AuthService>,
    api: Arc<ApiClient>,
    token: Option<String>,
    tx: Sender<Event>,
) {
    let Some(token) = token.or_else(stored_token) else {
        service.set(AuthSession::signed_out());
        let _ = tx.send(Event::SessionResolved(None));
        return;
    };

    api.set_token(Some(token));
    match api.fetch_me().await {
        Ok(user) => {
            info!(user = %user.username, "session resolved");
            service.set(AuthSession::signed_in(user.clone()));
            let _ = tx.send(Event::SessionResolved(Some(user)));
        }
        Err(e) => {
            warn!("session resolution failed: {e}");
            api.set_token(None);
            service.set(AuthSession::signed_out());
            let _ = tx.send(Event::SessionResolved(None));
        }
    }
}

fn stored_token() -> Option<String> {
    let entry = keyring::Entry::new(KEYRING_SERVICE, KEYRING_USER).ok()?;
    entry.get_password().ok()
}

fn clear_stored_token() {
    if let Ok(entry) = keyring::Entry::new(KEYRING_SERVICE, KEYRING_USER) {
        let _ = entry.delete_credential();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_starts_resolving() {
        let service = AuthService::new();
        let session = service.session();
        assert!(session.loading);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_signed_in_snapshot_is_visible_to_readers() {
        let service = AuthService::new();
        service.set(AuthSession::signed_in(User {
            id: "u1".to_string(),
            username: "ada".to_string(),
            email: None,
        }));

        let session = service.session();
        assert!(!session.loading);
        assert!(session.is_authenticated());
    }
}
