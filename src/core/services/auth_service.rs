use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::adapters::http::api_client::{ApiClient, Auth};
use crate::core::errors::{MonitorError, Result};
use crate::core::models::session::{
    Credential, Durability, Identity, LoginRequest, LoginResult, TokenResponse,
};
use crate::core::services::session_storage::{SessionStorage, USER_KEY};
use crate::core::traits::navigator::{Navigator, Route};

/// Role that unlocks the admin views.
pub const ADMIN_ROLE: &str = "admin";

/// Session/auth manager: login, logout and the view gates.
pub struct AuthService {
    client: Arc<ApiClient>,
    storage: Arc<SessionStorage>,
    navigator: Arc<dyn Navigator>,
}

impl AuthService {
    pub fn new(
        client: Arc<ApiClient>,
        storage: Arc<SessionStorage>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            client,
            storage,
            navigator,
        }
    }

    /// Exchange credentials for a token, then fetch the full identity.
    ///
    /// The token is always stored durably; `remember` only decides where the
    /// identity is cached.
    pub async fn login(&self, username: &str, password: &str, remember: bool) -> Result<LoginResult> {
        let token: TokenResponse = self
            .client
            .post_json("/auth/login", &LoginRequest { username, password }, Auth::None)
            .await
            .map_err(login_failed)?;

        let credential = Credential::new(token.access_token);
        if credential.is_empty() {
            return Err(MonitorError::LoginFailed {
                reason: "the server returned an empty token".into(),
            });
        }
        debug!(token_type = %token.token_type, "token received");
        self.client.set_token(&credential)?;

        let identity: Identity = match self.client.get_json("/users/me").await {
            Ok(identity) => identity,
            Err(e) => {
                // A token without an identity is not a usable session.
                if let Err(clear) = self.client.clear_token() {
                    warn!(error = %clear, "could not discard token after failed identity lookup");
                }
                return Err(e);
            }
        };

        self.store_identity(&identity, Durability::from_remember(remember))?;
        info!(user = %identity.username, role = %identity.role, remember, "logged in");

        Ok(LoginResult {
            credential,
            identity,
        })
    }

    fn store_identity(&self, identity: &Identity, durability: Durability) -> Result<()> {
        let json = serde_json::to_string(identity).map_err(|e| MonitorError::ParseError {
            detail: format!("identity cannot be serialized: {e}"),
        })?;
        // Only one cached identity may exist.
        self.storage.remove_everywhere(USER_KEY)?;
        self.storage.set(USER_KEY, &json, durability)
    }

    /// Best-effort remote logout, then wipe local state and go to login.
    ///
    /// Local state is cleared even when the notification fails.
    pub async fn logout(&self) -> Result<()> {
        // A 401 here has already expired the session and sent the user to login.
        let already_expired = match self.client.post("/auth/logout", None).await {
            Ok(_) => false,
            Err(e) => {
                debug!(error = %e.summary(), "logout notification failed, clearing locally anyway");
                matches!(e, MonitorError::Unauthorized)
            }
        };

        let token = self.client.clear_token();
        let user = self.storage.remove_everywhere(USER_KEY);
        if !already_expired {
            self.navigator.navigate(Route::Login);
        }
        info!("logged out");

        token.and(user)
    }

    /// True iff a non-empty credential is stored.
    pub fn is_authenticated(&self) -> bool {
        self.client.token().is_some()
    }

    /// Gate for protected views: navigate to login and halt when signed out.
    pub fn require_auth(&self) -> Result<()> {
        if self.is_authenticated() {
            Ok(())
        } else {
            self.navigator.navigate(Route::Login);
            Err(MonitorError::NotAuthenticated)
        }
    }

    /// UI gate only; the backend enforces the real authorization.
    pub fn is_admin(identity: Option<&Identity>) -> bool {
        identity.is_some_and(|i| i.role == ADMIN_ROLE)
    }

    /// Gate for the admin views. Non-admins are sent back to the dashboard.
    pub fn require_admin(&self) -> Result<Identity> {
        self.require_auth()?;
        match self.current_user() {
            Some(identity) if Self::is_admin(Some(&identity)) => Ok(identity),
            _ => {
                self.navigator.navigate(Route::Dashboard);
                Err(MonitorError::Forbidden {
                    view: "the admin panel".into(),
                })
            }
        }
    }

    /// Cached identity, durable slot first.
    pub fn load_identity(&self) -> Result<Option<Identity>> {
        let Some(json) = self.storage.get(USER_KEY)? else {
            return Ok(None);
        };
        serde_json::from_str(&json)
            .map(Some)
            .map_err(|e| MonitorError::ParseError {
                detail: format!("stored identity is malformed: {e}"),
            })
    }

    /// Like `load_identity`, but unreadable identities count as absent.
    pub fn current_user(&self) -> Option<Identity> {
        match self.load_identity() {
            Ok(identity) => identity,
            Err(e) => {
                warn!(error = %e, "ignoring cached identity");
                None
            }
        }
    }
}

/// Surface the server's reason for a failed login call.
fn login_failed(err: MonitorError) -> MonitorError {
    let reason = match err {
        MonitorError::RequestFailed { message } => message,
        MonitorError::NetworkError { reason } => format!("backend unreachable ({reason})"),
        MonitorError::ParseError { detail } => format!("unexpected login response ({detail})"),
        other => other.summary(),
    };
    MonitorError::LoginFailed { reason }
}
