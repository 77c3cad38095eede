//! Heuristic login-response classification.

use crate::prober::http::LoginResponse;

/// Body substrings that indicate a rejected login, matched
/// case-insensitively.
const FAILURE_TOKENS: [&str; 6] = [
    "invalid",
    "incorrect",
    "login failed",
    "authentication failed",
    "username or password",
    "invalid credentials",
];

/// Verdict of the heuristic classifier. Not a ground-truth
/// authentication check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Success,
    Failure,
}

/// Classifies a login response.
///
/// A redirect status wins outright: sites commonly bounce to a dashboard
/// after a successful login, so any status in [300, 400) is Success
/// regardless of the body. Otherwise the body is searched for known
/// failure tokens. A response carrying no recognized token is assumed to
/// be a Success, which skews the heuristic toward false positives on
/// sites that fail silently or with custom error text.
pub fn classify(response: &LoginResponse) -> Verdict {
    if (300..400).contains(&response.status) {
        return Verdict::Success;
    }

    let body: String = response.body.to_lowercase();
    if FAILURE_TOKENS.iter().any(|token| body.contains(token)) {
        return Verdict::Failure;
    }

    Verdict::Success
}
