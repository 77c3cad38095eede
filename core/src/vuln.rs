//! Payload-based injection checks (SQL injection, reflected XSS).
//!
//! Collaborators of the CLI with a fixed contract: probe one URL
//! parameter, answer with a boolean. Errors bubble up so the caller can
//! report them inline and treat the check as "not vulnerable"; a failed
//! check never aborts the remaining ones.

use std::time::Duration;

use anyhow::Context;

use crate::prober::http::USER_AGENT;

const SQLI_PAYLOAD: &str = "'";
const XSS_PAYLOAD: &str = "<script>alert('provr')</script>";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Error fragments commonly leaked by backends that interpolate raw
/// input into SQL statements.
const SQL_ERROR_TOKENS: [&str; 5] = [
    "you have an error in your sql syntax",
    "unclosed quotation mark",
    "sqlite error",
    "syntax error at or near",
    "ora-00933",
];

/// Sends a single-quote payload and sniffs the body for database error
/// leakage.
pub async fn test_sql_injection(url: &str, param: &str) -> anyhow::Result<bool> {
    let body: String = probe(url, param, SQLI_PAYLOAD).await?;
    let body = body.to_lowercase();
    Ok(SQL_ERROR_TOKENS.iter().any(|token| body.contains(token)))
}

/// Sends a script payload and checks whether it is reflected verbatim.
pub async fn test_xss(url: &str, param: &str) -> anyhow::Result<bool> {
    let body: String = probe(url, param, XSS_PAYLOAD).await?;
    Ok(body.contains(XSS_PAYLOAD))
}

/// Issues one GET with the payload in the given query parameter and
/// returns the response body.
async fn probe(url: &str, param: &str, payload: &str) -> anyhow::Result<String> {
    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .build()
        .context("failed to build HTTP client")?;

    let response = client
        .get(url)
        .query(&[(param, payload)])
        .send()
        .await
        .with_context(|| format!("request to {url} failed"))?;

    response
        .text()
        .await
        .context("failed to read response body")
}
