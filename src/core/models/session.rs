use serde::{Deserialize, Serialize};

/// Opaque bearer token proving an authenticated session.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Value for the `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

// Tokens never end up in logs.
impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Where a session value is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Durability {
    /// Survives restarts ("remember me").
    Durable,
    /// Dropped when the temp dir is cleaned; the terminal analogue of a tab.
    Volatile,
}

impl Durability {
    pub fn from_remember(remember: bool) -> Self {
        if remember {
            Durability::Durable
        } else {
            Durability::Volatile
        }
    }
}

/// Cached copy of the authenticated principal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub id: i64,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default = "default_role")]
    pub role: String,
}

fn default_role() -> String {
    "analyst".to_string()
}

impl Identity {
    /// Name shown in headers: full name, then username, then email.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ if !self.username.is_empty() => &self.username,
            _ => &self.email,
        }
    }

    /// Up to two uppercase initials from the name, or the first letter of the email.
    pub fn initials(&self) -> String {
        match self.name.as_deref().filter(|n| !n.trim().is_empty()) {
            Some(name) => name
                .split_whitespace()
                .filter_map(|part| part.chars().next())
                .flat_map(char::to_uppercase)
                .take(2)
                .collect(),
            None => self
                .email
                .chars()
                .chain(self.username.chars())
                .next()
                .map(|c| c.to_uppercase().collect())
                .unwrap_or_default(),
        }
    }
}

/// Body of `POST /auth/login`.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Response of `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

/// Outcome of a successful login.
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub credential: Credential,
    pub identity: Identity,
}
