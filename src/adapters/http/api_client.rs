use std::sync::{Arc, Mutex};
use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error};

use crate::core::errors::{MonitorError, Result};
use crate::core::models::session::{Credential, Durability};
use crate::core::services::session_storage::{SessionStorage, TOKEN_KEY};
use crate::core::traits::navigator::{Navigator, Route};

/// Message used when a failed response carries no usable text.
const GENERIC_FAILURE: &str = "API request failed";

/// Whether a request carries the stored credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Auth {
    Required,
    None,
}

/// Thin JSON client for the monitor backend.
///
/// Owns the bearer credential: it is read from the durable session slot
/// for every authenticated request and wiped when the backend answers 401.
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
    storage: Arc<SessionStorage>,
    navigator: Arc<dyn Navigator>,
    /// Bumped on every credential change; a 401 only expires the
    /// generation it was sent with.
    generation: Mutex<u64>,
}

impl ApiClient {
    pub fn new(
        base_url: &str,
        timeout: Duration,
        storage: Arc<SessionStorage>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(format!("ethics-monitor/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| MonitorError::InvalidConfig {
                detail: format!("Failed to create HTTP client: {e}"),
            })?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
            storage,
            navigator,
            generation: Mutex::new(0),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn lock_generation(&self) -> std::sync::MutexGuard<'_, u64> {
        self.generation
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn read_token(&self) -> Option<Credential> {
        match self.storage.get_from(TOKEN_KEY, Durability::Durable) {
            Ok(token) => token.map(Credential::new).filter(|c| !c.is_empty()),
            Err(e) => {
                error!(error = %e, "could not read stored credential");
                None
            }
        }
    }

    /// The stored credential, if any.
    pub fn token(&self) -> Option<Credential> {
        let _generation = self.lock_generation();
        self.read_token()
    }

    /// Store a new credential. Credentials are always durable.
    pub fn set_token(&self, credential: &Credential) -> Result<()> {
        let mut generation = self.lock_generation();
        self.storage
            .set(TOKEN_KEY, credential.as_str(), Durability::Durable)?;
        *generation += 1;
        Ok(())
    }

    /// Forget the credential. Requests built after this returns carry no token.
    pub fn clear_token(&self) -> Result<()> {
        let mut generation = self.lock_generation();
        *generation += 1;
        self.storage.remove_everywhere(TOKEN_KEY)
    }

    /// Credential and generation read together, so a concurrent clear
    /// cannot slip between them.
    fn snapshot(&self, auth: Auth) -> (Option<Credential>, u64) {
        let generation = self.lock_generation();
        let credential = match auth {
            Auth::Required => self.read_token(),
            Auth::None => None,
        };
        (credential, *generation)
    }

    /// Wipe the credential and go to login, once per credential generation.
    fn expire_session(&self, sent_generation: u64) {
        {
            let mut generation = self.lock_generation();
            if *generation != sent_generation {
                debug!("session already expired by a concurrent request");
                return;
            }
            *generation += 1;
            if let Err(e) = self.storage.remove_everywhere(TOKEN_KEY) {
                error!(error = %e, "failed to clear credential after 401");
            }
        }
        self.navigator.navigate(Route::Login);
    }

    fn fail(&self, method: &Method, endpoint: &str, err: MonitorError) -> MonitorError {
        error!(%method, endpoint, error = %err.summary(), "API request error");
        err
    }

    /// Send a request and return the successful response. `query` pairs are
    /// percent-encoded onto the URL.
    async fn send(
        &self,
        endpoint: &str,
        method: Method,
        query: &[(&str, String)],
        body: Option<&Value>,
        auth: Auth,
    ) -> Result<reqwest::Response> {
        let url = format!("{}{}", self.base_url, endpoint);
        let (credential, generation) = self.snapshot(auth);

        let mut req = self
            .http
            .request(method.clone(), &url)
            .header(ACCEPT, "application/json");
        if !query.is_empty() {
            req = req.query(query);
        }
        if let Some(credential) = &credential {
            req = req.header(AUTHORIZATION, credential.bearer());
        }
        if let Some(body) = body {
            req = req.json(body);
        }

        debug!(%method, endpoint, authenticated = credential.is_some(), "sending request");
        let resp = req.send().await.map_err(|e| {
            self.fail(
                &method,
                endpoint,
                MonitorError::NetworkError {
                    reason: e.to_string(),
                },
            )
        })?;

        let status = resp.status();
        if status == StatusCode::UNAUTHORIZED && auth == Auth::Required {
            self.expire_session(generation);
            return Err(self.fail(&method, endpoint, MonitorError::Unauthorized));
        }

        if !status.is_success() {
            let bytes = resp.bytes().await.unwrap_or_default();
            let message = server_message(&bytes).unwrap_or_else(|| GENERIC_FAILURE.to_string());
            return Err(self.fail(&method, endpoint, MonitorError::RequestFailed { message }));
        }

        Ok(resp)
    }

    /// Generic request returning the decoded JSON body (`null` when empty).
    pub async fn request(
        &self,
        endpoint: &str,
        method: Method,
        query: &[(&str, String)],
        body: Option<&Value>,
        auth: Auth,
    ) -> Result<Value> {
        let resp = self
            .send(endpoint, method.clone(), query, body, auth)
            .await?;
        let bytes = resp.bytes().await.map_err(|e| {
            self.fail(
                &method,
                endpoint,
                MonitorError::NetworkError {
                    reason: format!("failed to read response body: {e}"),
                },
            )
        })?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        serde_json::from_slice(&bytes).map_err(|e| {
            self.fail(
                &method,
                endpoint,
                MonitorError::ParseError {
                    detail: format!("response is not valid JSON: {e}"),
                },
            )
        })
    }

    pub async fn get(&self, endpoint: &str) -> Result<Value> {
        self.get_query(endpoint, &[]).await
    }

    /// Authenticated GET with query parameters.
    pub async fn get_query(&self, endpoint: &str, query: &[(&str, String)]) -> Result<Value> {
        self.request(endpoint, Method::GET, query, None, Auth::Required)
            .await
    }

    pub async fn post(&self, endpoint: &str, body: Option<&Value>) -> Result<Value> {
        self.request(endpoint, Method::POST, &[], body, Auth::Required)
            .await
    }

    #[allow(dead_code)]
    pub async fn put(&self, endpoint: &str, body: Option<&Value>) -> Result<Value> {
        self.request(endpoint, Method::PUT, &[], body, Auth::Required).await
    }

    #[allow(dead_code)]
    pub async fn delete(&self, endpoint: &str) -> Result<Value> {
        self.request(endpoint, Method::DELETE, &[], None, Auth::Required)
            .await
    }

    /// Authenticated GET decoded into `T`.
    pub async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let value = self.get(endpoint).await?;
        decode(endpoint, value)
    }

    /// POST decoded into `T`.
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
        auth: Auth,
    ) -> Result<T> {
        let body = serde_json::to_value(body).map_err(|e| MonitorError::InvalidInput {
            detail: format!("request body cannot be encoded: {e}"),
        })?;
        let value = self
            .request(endpoint, Method::POST, &[], Some(&body), auth)
            .await?;
        decode(endpoint, value)
    }

    /// Authenticated GET returning the raw body (report downloads).
    pub async fn get_bytes(&self, endpoint: &str) -> Result<Vec<u8>> {
        let resp = self
            .send(endpoint, Method::GET, &[], None, Auth::Required)
            .await?;
        resp.bytes().await.map(|b| b.to_vec()).map_err(|e| {
            self.fail(
                &Method::GET,
                endpoint,
                MonitorError::NetworkError {
                    reason: format!("download interrupted: {e}"),
                },
            )
        })
    }
}

fn decode<T: DeserializeOwned>(endpoint: &str, value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|e| {
        let err = MonitorError::ParseError {
            detail: format!("unexpected response from {endpoint}: {e}"),
        };
        error!(endpoint, error = %err, "API response error");
        err
    })
}

/// Pull the server's explanation out of an error body: `message`, then a
/// string `detail`.
fn server_message(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    ["message", "detail"].iter().find_map(|key| {
        value
            .get(*key)
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
            .map(str::to_string)
    })
}
