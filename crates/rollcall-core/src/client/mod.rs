//! Portal API client.
//!
//! The portal is an external collaborator: one authenticated GET per
//! payload, no retry, no rate limiting. Requests are blocking and happen
//! outside the render loop (at startup and after login), so the engine only
//! ever sees a complete, already-deserialized payload.

use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use crate::models::{Lead, LeadsPayload, Vote, VotesPayload};
use crate::store::Session;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client and transport errors.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("portal returned {status}: {message}")]
    Http { status: u16, message: String },
    #[error("session is missing or expired")]
    Unauthorized,
    #[error("malformed portal response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Supplies the payloads the UI renders. Implemented by the live portal
/// client and by the bundled sample source used in demo mode.
pub trait VoteSource {
    /// Exchanges credentials for a session.
    fn login(&mut self, email: &str, password: &str) -> Result<Session, ClientError>;

    /// Installs a previously stored session token.
    fn set_token(&mut self, token: &str);

    fn fetch_votes(&self) -> Result<Vec<Vote>, ClientError>;

    fn fetch_leads(&self) -> Result<Vec<Lead>, ClientError>;
}

/// Blocking HTTP client for the portal API.
pub struct PortalClient {
    base_url: String,
    token: Option<String>,
    http: reqwest::blocking::Client,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    token: String,
    #[serde(default)]
    name: Option<String>,
}

impl PortalClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            base_url: base_url.into(),
            token: None,
            http,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    fn get_authed<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let token = self.token.as_deref().ok_or(ClientError::Unauthorized)?;
        let url = self.url(path);
        debug!(%url, "portal GET");

        let response = self.http.get(&url).bearer_auth(token).send()?;
        let status = response.status();
        if status.as_u16() == 401 {
            return Err(ClientError::Unauthorized);
        }
        if !status.is_success() {
            let message = response.text().unwrap_or_default();
            return Err(ClientError::Http {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response.json()?)
    }
}

impl VoteSource for PortalClient {
    fn login(&mut self, email: &str, password: &str) -> Result<Session, ClientError> {
        let url = self.url("/portal/login");
        debug!(%url, "portal login");

        let response = self
            .http
            .post(&url)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()?;
        let status = response.status();
        if status.as_u16() == 401 {
            return Err(ClientError::Unauthorized);
        }
        if !status.is_success() {
            let message = response.text().unwrap_or_default();
            return Err(ClientError::Http {
                status: status.as_u16(),
                message,
            });
        }

        let login: LoginResponse = response.json()?;
        self.token = Some(login.token.clone());
        Ok(Session {
            token: login.token,
            user_name: login.name,
        })
    }

    fn set_token(&mut self, token: &str) {
        self.token = Some(token.to_string());
    }

    fn fetch_votes(&self) -> Result<Vec<Vote>, ClientError> {
        let payload: VotesPayload = self.get_authed("/portal/votes")?;
        Ok(payload.results)
    }

    fn fetch_leads(&self) -> Result<Vec<Lead>, ClientError> {
        let payload: LeadsPayload = self.get_authed("/portal/leads/most_recent")?;
        Ok(payload.results)
    }
}

/// Bundled payloads for running without a portal (`--demo`). Accepts any
/// credentials, so the auth-gated flow stays exercisable offline.
pub struct SampleSource;

impl VoteSource for SampleSource {
    fn login(&mut self, _email: &str, _password: &str) -> Result<Session, ClientError> {
        Ok(Session {
            token: "demo".to_string(),
            user_name: Some("Demo".to_string()),
        })
    }

    fn set_token(&mut self, _token: &str) {}

    fn fetch_votes(&self) -> Result<Vec<Vote>, ClientError> {
        let payload: VotesPayload = serde_json::from_str(include_str!("sample_votes.json"))?;
        Ok(payload.results)
    }

    fn fetch_leads(&self) -> Result<Vec<Lead>, ClientError> {
        let payload: LeadsPayload = serde_json::from_str(include_str!("sample_leads.json"))?;
        Ok(payload.results)
    }
}
