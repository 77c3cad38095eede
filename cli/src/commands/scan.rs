use std::process;
use std::time::Duration;

use colored::*;
use provr_common::config::ScanConfig;
use provr_common::error::InputError;
use provr_common::network::range::PortRange;
use provr_common::network::target::is_valid_ip;
use provr_core::cancel::CancelToken;
use provr_core::scanner;
use tracing::{error, info, warn};

use crate::commands::cancel_on_interrupt;
use crate::terminal::progress;

pub async fn scan(
    target: String,
    start: u16,
    end: u16,
    timeout: u64,
    workers: usize,
    no_progress: bool,
) -> anyhow::Result<()> {
    if !is_valid_ip(&target) {
        error!("{}", InputError::InvalidAddress(target));
        process::exit(1);
    }

    let range: PortRange = match PortRange::new(start, end) {
        Ok(range) => range,
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    };

    let cfg = ScanConfig {
        timeout: Duration::from_millis(timeout),
        workers,
    };

    let cancel = CancelToken::new();
    cancel_on_interrupt(cancel.clone());

    info!("Scanning {target} ports {start}-{end} with {workers} workers");

    let bar = (!no_progress).then(|| progress::scan_bar(range.len()));
    let reporter = bar.clone().map(|bar| -> scanner::ProgressFn {
        Box::new(move |completed, _total| bar.set_position(completed as u64))
    });

    let open_ports: Vec<u16> = scanner::scan(&target, range, &cfg, reporter, cancel).await;

    if let Some(bar) = bar {
        bar.finish_and_clear();
    }

    if open_ports.is_empty() {
        warn!("No open ports found (an unreachable target looks identical)");
    }
    println!("Open ports: {}", format!("{open_ports:?}").green());

    Ok(())
}
