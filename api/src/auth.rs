//! Sign-in against the backend's auth endpoints and local session
//! persistence.
//!
//! No auth protocol lives here: the backend issues and validates tokens;
//! this module only exchanges credentials for a session and keeps that
//! session available to the repositories and the credential store.

use std::sync::{Arc, RwLock};

use jiff::{Span, Timestamp};
use payloads::DoulaId;
use reqwest::Method;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::credential::{
    CREDENTIAL_SERVICE, CredentialError, CredentialStore, SESSION_ACCOUNT,
};
use crate::http::HttpClient;
use crate::store::StoreError;
use crate::time::TimeSource;

/// An authenticated session with the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    pub user_id: DoulaId,
    pub expires_at: Timestamp,
}

impl Session {
    pub fn is_expired(&self, now: Timestamp) -> bool {
        now >= self.expires_at
    }
}

/// Shared read access to the current session. Repositories hold a clone
/// and fail with [`StoreError::AuthRequired`] while it is empty.
#[derive(Clone, Default)]
pub struct SessionHandle(Arc<RwLock<Option<Session>>>);

impl SessionHandle {
    pub fn current(&self) -> Option<Session> {
        self.0.read().unwrap().clone()
    }

    pub fn require(&self) -> Result<Session, StoreError> {
        self.current().ok_or(StoreError::AuthRequired)
    }

    fn replace(&self, session: Option<Session>) {
        *self.0.write().unwrap() = session;
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Credentials(#[from] CredentialError),
    #[error("session payload: {0}")]
    Codec(#[source] serde_json::Error),
}

pub struct AuthService {
    http: HttpClient,
    credentials: Arc<dyn CredentialStore>,
    time_source: TimeSource,
    session: SessionHandle,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    refresh_token: String,
    expires_in: i64,
    user: TokenUser,
}

#[derive(Deserialize)]
struct TokenUser {
    id: DoulaId,
}

impl AuthService {
    /// Build the service and restore any persisted session. A corrupt
    /// persisted blob is discarded, not an error.
    pub fn new(
        http: HttpClient,
        credentials: Arc<dyn CredentialStore>,
        time_source: TimeSource,
    ) -> Self {
        let service = Self {
            http,
            credentials,
            time_source,
            session: SessionHandle::default(),
        };
        if let Ok(Some(restored)) = service.load_session() {
            service.session.replace(Some(restored));
        }
        service
    }

    pub fn session(&self) -> SessionHandle {
        self.session.clone()
    }

    #[tracing::instrument(skip(self, password))]
    pub async fn sign_in(
        &self,
        email: &str,
        password: &SecretString,
    ) -> Result<(), AuthError> {
        let body = serde_json::json!({
            "email": email,
            "password": password.expose_secret(),
        });
        let text = self
            .http
            .request(
                Method::POST,
                "auth/v1/token",
                &[("grant_type", "password".to_string())],
                None,
                None,
                Some(&body),
            )
            .await?;
        let token: TokenResponse =
            serde_json::from_str(&text).map_err(StoreError::Decode)?;

        let now = self.time_source.now();
        let expires_at = now
            .checked_add(Span::new().seconds(token.expires_in))
            .unwrap_or(now);
        let session = Session {
            access_token: token.access_token,
            refresh_token: token.refresh_token,
            user_id: token.user.id,
            expires_at,
        };
        self.save_session(&session)?;
        self.session.replace(Some(session));
        Ok(())
    }

    /// Best-effort remote sign-out; the local session is cleared even when
    /// the network call fails.
    #[tracing::instrument(skip(self))]
    pub async fn sign_out(&self) -> Result<(), AuthError> {
        let remote = match self.session.current() {
            Some(session) => self
                .http
                .request(
                    Method::POST,
                    "auth/v1/logout",
                    &[],
                    Some(&session.access_token),
                    None,
                    Some(&serde_json::json!({})),
                )
                .await
                .map(|_| ()),
            None => Ok(()),
        };

        if let Err(err) =
            self.credentials.delete(CREDENTIAL_SERVICE, SESSION_ACCOUNT)
        {
            tracing::warn!("failed to clear persisted session: {err}");
        }
        self.session.replace(None);
        remote.map_err(AuthError::from)
    }

    fn save_session(&self, session: &Session) -> Result<(), AuthError> {
        let blob = serde_json::to_vec(session).map_err(AuthError::Codec)?;
        self.credentials
            .set(CREDENTIAL_SERVICE, SESSION_ACCOUNT, &blob)?;
        Ok(())
    }

    fn load_session(&self) -> Result<Option<Session>, AuthError> {
        let Some(blob) =
            self.credentials.get(CREDENTIAL_SERVICE, SESSION_ACCOUNT)?
        else {
            return Ok(None);
        };
        Ok(serde_json::from_slice(&blob).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_handle_requires_auth() {
        let handle = SessionHandle::default();
        assert!(handle.current().is_none());
        assert!(matches!(handle.require(), Err(StoreError::AuthRequired)));
    }

    #[test]
    fn session_expiry_is_inclusive() {
        let expires_at: Timestamp = "2026-08-05T10:00:00Z".parse().unwrap();
        let session = Session {
            access_token: "access".to_string(),
            refresh_token: "refresh".to_string(),
            user_id: DoulaId::new(),
            expires_at,
        };
        assert!(!session.is_expired("2026-08-05T09:59:59Z".parse().unwrap()));
        assert!(session.is_expired(expires_at));
    }

    #[test]
    fn session_blob_round_trips() {
        let session = Session {
            access_token: "access".to_string(),
            refresh_token: "refresh".to_string(),
            user_id: DoulaId::new(),
            expires_at: "2026-08-05T10:00:00Z".parse().unwrap(),
        };
        let blob = serde_json::to_vec(&session).unwrap();
        let restored: Session = serde_json::from_slice(&blob).unwrap();
        assert_eq!(restored, session);
    }
}
