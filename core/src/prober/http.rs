//! HTTP login transport.

use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use provr_common::error::TransportError;

/// Identifying header sent with every request the toolkit issues.
pub const USER_AGENT: &str = "Toolkit/1.0";

/// Status line and body of a login attempt, taken after redirects have
/// been followed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginResponse {
    pub status: u16,
    pub body: String,
}

/// Transport seam for the credential prober.
#[async_trait]
pub trait LoginTransport: Send + Sync {
    /// Submits one form-encoded login attempt.
    ///
    /// Transport-level failures (refusal, timeout, DNS, TLS) surface as
    /// [`TransportError`], never as a panic or hard failure.
    async fn submit(
        &self,
        url: &str,
        username: &str,
        password: &str,
    ) -> Result<LoginResponse, TransportError>;
}

/// Form-POST login client backed by reqwest.
///
/// Sends `username` and `password` as form fields and follows redirects,
/// so a 3xx only survives to the classifier when the redirect chain
/// cannot be completed.
pub struct HttpLoginClient {
    client: reqwest::Client,
}

impl HttpLoginClient {
    pub fn new(timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .context("failed to build HTTP login client")?;

        Ok(Self { client })
    }
}

#[async_trait]
impl LoginTransport for HttpLoginClient {
    async fn submit(
        &self,
        url: &str,
        username: &str,
        password: &str,
    ) -> Result<LoginResponse, TransportError> {
        let form: [(&str, &str); 2] = [("username", username), ("password", password)];

        let response = self
            .client
            .post(url)
            .form(&form)
            .send()
            .await
            .map_err(|e| TransportError::new(e.to_string()))?;

        let status: u16 = response.status().as_u16();
        let body: String = response
            .text()
            .await
            .map_err(|e| TransportError::new(e.to_string()))?;

        Ok(LoginResponse { status, body })
    }
}
