use thiserror::Error;

/// Validation failures on user-supplied input. Fatal to the invoking
/// command; the probing engine itself never produces these.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("invalid IP address: {0}")]
    InvalidAddress(String),
    #[error("invalid port range: {start}-{end} (start must not exceed end)")]
    InvalidPortRange { start: u16, end: u16 },
}

/// Failures while loading a password wordlist.
#[derive(Debug, Error)]
pub enum WordlistError {
    #[error("password file not found: {0}")]
    NotFound(String),
    #[error("could not read password file: {0}")]
    Unreadable(#[from] std::io::Error),
    #[error("password file is empty")]
    Empty,
}

/// A transport-level failure during a single credential attempt.
///
/// These are absorbed by the prober loop (the attempt is skipped), never
/// propagated as hard errors.
#[derive(Debug, Clone, Error)]
#[error("transport error: {message}")]
pub struct TransportError {
    pub message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
