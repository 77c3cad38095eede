#![cfg(test)]
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use provr_common::error::TransportError;
use provr_core::cancel::CancelToken;
use provr_core::prober::http::{LoginResponse, LoginTransport};
use provr_core::prober::{self, AttemptEvent, AttemptObserver, Credentials};

/// Scripted login endpoint: listed passwords answer with a 302 redirect,
/// listed failing passwords die at the transport layer, everything else
/// gets a 200 with a failure-token body. Records every submitted
/// password in order.
struct ScriptedLogin {
    accepted: Vec<String>,
    failing: Vec<String>,
    submitted: Mutex<Vec<String>>,
}

impl ScriptedLogin {
    fn new(accepted: &[&str]) -> Self {
        Self {
            accepted: accepted.iter().map(|s| s.to_string()).collect(),
            failing: Vec::new(),
            submitted: Mutex::new(Vec::new()),
        }
    }

    fn with_transport_failures(mut self, failing: &[&str]) -> Self {
        self.failing = failing.iter().map(|s| s.to_string()).collect();
        self
    }

    fn submitted(&self) -> Vec<String> {
        self.submitted.lock().unwrap().clone()
    }
}

#[async_trait]
impl LoginTransport for ScriptedLogin {
    async fn submit(
        &self,
        _url: &str,
        _username: &str,
        password: &str,
    ) -> Result<LoginResponse, TransportError> {
        self.submitted.lock().unwrap().push(password.to_string());

        if self.failing.iter().any(|p| p == password) {
            return Err(TransportError::new("connection reset by peer"));
        }
        if self.accepted.iter().any(|p| p == password) {
            return Ok(LoginResponse {
                status: 302,
                body: String::new(),
            });
        }
        Ok(LoginResponse {
            status: 200,
            body: "Invalid credentials".to_string(),
        })
    }
}

fn passwords(entries: &[&str]) -> Vec<String> {
    entries.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn first_matching_password_wins() {
    // Both "b" and "c" would match; list order decides.
    let transport = ScriptedLogin::new(&["b", "c"]);

    let result = prober::brute_force(
        &transport,
        "http://192.0.2.9/login",
        "user",
        &passwords(&["a", "b", "c"]),
        None,
        CancelToken::new(),
    )
    .await;

    assert_eq!(
        result,
        Some(Credentials {
            username: "user".to_string(),
            password: "b".to_string(),
        })
    );
    assert_eq!(transport.submitted(), vec!["a", "b"]);
}

#[tokio::test]
async fn transport_error_does_not_stop_the_sequence() {
    let transport = ScriptedLogin::new(&["secret"]).with_transport_failures(&["wrong1"]);

    let result = prober::brute_force(
        &transport,
        "http://192.0.2.9/login",
        "user",
        &passwords(&["wrong1", "wrong2", "secret"]),
        None,
        CancelToken::new(),
    )
    .await;

    assert_eq!(result.map(|c| c.password), Some("secret".to_string()));
    assert_eq!(transport.submitted(), vec!["wrong1", "wrong2", "secret"]);
}

#[tokio::test]
async fn exhausted_list_returns_none() {
    let transport = ScriptedLogin::new(&[]);

    let result = prober::brute_force(
        &transport,
        "http://192.0.2.9/login",
        "user",
        &passwords(&["wrong1", "wrong2"]),
        None,
        CancelToken::new(),
    )
    .await;

    assert_eq!(result, None);
    assert_eq!(transport.submitted().len(), 2);
}

#[tokio::test]
async fn blank_entries_never_reach_the_network() {
    let transport = ScriptedLogin::new(&["anything"]);

    let result = prober::brute_force(
        &transport,
        "http://192.0.2.9/login",
        "user",
        &passwords(&["", "   ", "\t"]),
        None,
        CancelToken::new(),
    )
    .await;

    assert_eq!(result, None);
    assert!(transport.submitted().is_empty());
}

#[tokio::test]
async fn redirect_on_last_password_yields_the_pair() {
    let transport = ScriptedLogin::new(&["secret"]);

    let result = prober::brute_force(
        &transport,
        "http://192.0.2.9/login",
        "user",
        &passwords(&["wrong1", "wrong2", "secret"]),
        None,
        CancelToken::new(),
    )
    .await;

    assert_eq!(
        result,
        Some(Credentials {
            username: "user".to_string(),
            password: "secret".to_string(),
        })
    );
}

#[tokio::test]
async fn observer_sees_attempts_in_list_order() {
    let transport = ScriptedLogin::new(&[]).with_transport_failures(&["flaky"]);

    let events = Arc::new(Mutex::new(Vec::new()));
    let observer: AttemptObserver = {
        let events = events.clone();
        Box::new(move |event| {
            let entry = match event {
                AttemptEvent::Trying { index, password } => format!("try {index} {password}"),
                AttemptEvent::TransportFailed { index } => format!("err {index}"),
            };
            events.lock().unwrap().push(entry);
        })
    };

    let result = prober::brute_force(
        &transport,
        "http://192.0.2.9/login",
        "user",
        &passwords(&["alpha", "", "flaky", "omega"]),
        Some(observer),
        CancelToken::new(),
    )
    .await;

    assert_eq!(result, None);
    // The blank entry at index 1 is skipped without an event.
    assert_eq!(
        *events.lock().unwrap(),
        vec!["try 0 alpha", "try 2 flaky", "err 2", "try 3 omega"]
    );
}

#[tokio::test]
async fn cancelled_run_reports_nothing_found() {
    let transport = ScriptedLogin::new(&["secret"]);

    let cancel = CancelToken::new();
    cancel.cancel();

    let result = prober::brute_force(
        &transport,
        "http://192.0.2.9/login",
        "user",
        &passwords(&["secret"]),
        None,
        cancel,
    )
    .await;

    assert_eq!(result, None);
    assert!(transport.submitted().is_empty());
}
