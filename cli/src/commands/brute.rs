use std::process;

use colored::*;
use provr_common::config::BruteConfig;
use provr_common::wordlist;
use provr_core::cancel::CancelToken;
use provr_core::prober::http::HttpLoginClient;
use provr_core::prober::{self, AttemptEvent, Credentials};
use tracing::{error, info};

use crate::commands::cancel_on_interrupt;
use crate::terminal::progress;

pub async fn brute(url: String, username: String, password_file: String) -> anyhow::Result<()> {
    let passwords: Vec<String> = match wordlist::load_passwords(&password_file) {
        Ok(passwords) => passwords,
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    };
    info!("Loaded {} candidate passwords", passwords.len());

    let cfg = BruteConfig::default();
    let transport = HttpLoginClient::new(cfg.timeout)?;

    let cancel = CancelToken::new();
    cancel_on_interrupt(cancel.clone());

    let spinner = progress::attempt_spinner();
    let observer: prober::AttemptObserver = {
        let spinner = spinner.clone();
        Box::new(move |event| match event {
            AttemptEvent::Trying { index, password } => {
                spinner.set_message(format!("Trying password {}: {password}", index + 1));
            }
            AttemptEvent::TransportFailed { index } => {
                spinner.println(format!(
                    "{} attempt {} failed at the transport layer",
                    "[-]".red().bold(),
                    index + 1
                ));
            }
        })
    };

    let result: Option<Credentials> =
        prober::brute_force(&transport, &url, &username, &passwords, Some(observer), cancel).await;
    spinner.finish_and_clear();

    match result {
        Some(Credentials { username, password }) => {
            println!(
                "{}",
                format!("Login successful: ({username:?}, {password:?})").green()
            );
            Ok(())
        }
        None => {
            println!("Login failed");
            process::exit(2);
        }
    }
}
