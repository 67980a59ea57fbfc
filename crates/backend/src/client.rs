use crate::error::BackendError;
use common::consts::DEFAULT_BACKEND_BASE;
use common::transfer::ApiMessage;
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use session::Session;
use std::sync::Mutex;
use std::time::Duration;

/// HTTP client for the backend API. Owns the session: the bearer token is
/// injected on every request while one is held, and a 401 answer clears it.
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    session: Mutex<Session>,
}

impl Client {
    pub fn new(base_url: impl Into<String>, session: Session) -> Result<Self, BackendError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()?;

        let base_url: String = base_url.into();
        Ok(Client {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            session: Mutex::new(session),
        })
    }

    /// Build a client against `BACKEND_BASE`, falling back to the local
    /// development origin.
    pub fn from_env(session: Session) -> Result<Self, BackendError> {
        let base_url = std::env::var("BACKEND_BASE")
            .unwrap_or_else(|_| DEFAULT_BACKEND_BASE.to_string());
        Self::new(base_url, session)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Snapshot of the current session state.
    pub fn session(&self) -> Session {
        self.with_session(|s| s.clone())
    }

    pub fn user_id(&self) -> Option<String> {
        self.with_session(|s| s.user_id())
    }

    pub fn save_session(
        &self,
        path: impl AsRef<std::path::Path>,
    ) -> Result<(), session::SessionError> {
        self.with_session(|s| s.clone()).save(path)
    }

    pub(crate) fn with_session<T>(&self, f: impl FnOnce(&mut Session) -> T) -> T {
        let mut session = self.session.lock().unwrap();
        f(&mut session)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) fn get(&self, path: &str) -> RequestBuilder {
        self.request(Method::GET, path)
    }

    pub(crate) fn post(&self, path: &str) -> RequestBuilder {
        self.request(Method::POST, path)
    }

    pub(crate) fn delete(&self, path: &str) -> RequestBuilder {
        self.request(Method::DELETE, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut builder = self.http.request(method, self.url(path));
        if let Some(token) = self.with_session(|s| s.token.clone()) {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    /// Send a request; a 401 answer clears the session's auth state before
    /// failing.
    pub(crate) async fn execute(
        &self,
        builder: RequestBuilder,
    ) -> Result<reqwest::Response, BackendError> {
        let response = builder.send().await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            self.with_session(|s| s.clear());
            return Err(BackendError::AuthExpired);
        }

        Ok(response)
    }

    /// Send a request and decode a 2xx JSON body; non-2xx becomes an `Api`
    /// error carrying the backend's `error`/`message` field when present.
    pub(crate) async fn expect_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T, BackendError> {
        let response = self.execute(builder).await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message: ApiMessage = serde_json::from_str(&body).unwrap_or_default();
            return Err(BackendError::Api {
                status: status.as_u16(),
                message: message
                    .message()
                    .unwrap_or_else(|| "API request failed".to_string()),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }

    /// `GET /api/test` - reachability probe, returns whatever the backend
    /// reports about itself.
    pub async fn test_connection(&self) -> Result<serde_json::Value, BackendError> {
        self.expect_json(self.get("/api/test")).await
    }
}
