//! HTTP adapter for the external authentication service.
//!
//! Issues `GET {base_url}/api/auth/status` with the caller's session token
//! forwarded as a cookie and maps the answer onto `AuthStatus`. A single attempt
//! is made per call; the client-wide timeout bounds how long it may take.
//! Redirects are not followed, so a bounce to a login page surfaces as its
//! 3xx status.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::COOKIE;
use reqwest::redirect::Policy;
use reqwest::{Client, StatusCode};

use crate::errors::AdapterError;
use crate::models::{AuthStatus, AuthStatusResponse};
use crate::AuthService;

const STATUS_PATH: &str = "/api/auth/status";

#[derive(Clone)]
pub struct HttpAuthService {
    client: Client,
    status_url: String,
    cookie_name: String,
}

impl HttpAuthService {
    pub fn new(
        base_url: &str,
        cookie_name: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, AdapterError> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(Policy::none())
            .build()
            .map_err(|err| AdapterError::ClientSetup(err.to_string()))?;

        Ok(Self {
            client,
            status_url: format!("{}{}", base_url.trim_end_matches('/'), STATUS_PATH),
            cookie_name: cookie_name.into(),
        })
    }

    pub fn status_url(&self) -> &str {
        &self.status_url
    }
}

#[async_trait]
impl AuthService for HttpAuthService {
    async fn session_status(&self, token: &str) -> Result<AuthStatus, AdapterError> {
        let response = self
            .client
            .get(&self.status_url)
            .header(COOKIE, format!("{}={}", self.cookie_name, token))
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            log::debug!("auth service answered {} for session lookup", status);
            return Err(AdapterError::Status(status.as_u16()));
        }

        let body: AuthStatusResponse = response.json().await?;
        AuthStatus::try_from(body)
    }
}
