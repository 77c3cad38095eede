//! # Concurrent Port Scanner
//!
//! Fans a connectivity probe out over a port range with a bounded worker
//! pool and aggregates the open ports into a sorted result.
//!
//! Every probe is independent: no port's failure affects any other port,
//! and the scan as a whole cannot fail. An unreachable target simply
//! reads as every port closed.

use std::sync::Arc;

use provr_common::config::ScanConfig;
use provr_common::network::range::PortRange;
use tokio::sync::{Semaphore, mpsc};
use tracing::{debug, warn};

use crate::cancel::CancelToken;
use crate::network::tcp::{Connector, PortState, TcpConnector};

/// Callback receiving `(completed, total)` after every finished probe.
///
/// Completion order is arbitrary; only the final result is sorted.
pub type ProgressFn = Box<dyn Fn(usize, usize) + Send + Sync>;

/// Scans `[range.start, range.end]` on `host` over real TCP.
pub async fn scan(
    host: &str,
    range: PortRange,
    cfg: &ScanConfig,
    progress: Option<ProgressFn>,
    cancel: CancelToken,
) -> Vec<u16> {
    scan_ports(Arc::new(TcpConnector), host, range, cfg, progress, cancel).await
}

/// Scans through an injected [`Connector`].
///
/// A semaphore permit is taken before each probe task is spawned, so at
/// most `cfg.workers` connections are in flight at once regardless of
/// range size. Results flow over a channel to a single aggregator task;
/// the probe workers never touch shared state directly.
///
/// Returns a strictly ascending, duplicate-free subset of the range.
/// Cancellation stops dispatching new probes and returns whatever the
/// in-flight probes still deliver.
pub async fn scan_ports(
    connector: Arc<dyn Connector>,
    host: &str,
    range: PortRange,
    cfg: &ScanConfig,
    progress: Option<ProgressFn>,
    cancel: CancelToken,
) -> Vec<u16> {
    let total: usize = range.len();
    // A zero-sized pool would never dispatch anything.
    let pool = Arc::new(Semaphore::new(cfg.workers.max(1)));
    let (tx, rx) = mpsc::unbounded_channel::<(u16, PortState)>();

    let aggregator = tokio::spawn(aggregate(rx, total, progress));

    for port in range.to_iter() {
        if cancel.is_cancelled() {
            warn!("scan cancelled, letting in-flight probes finish");
            break;
        }

        let permit = match pool.clone().acquire_owned().await {
            Ok(permit) => permit,
            Err(_closed) => break,
        };

        let connector = connector.clone();
        let results = tx.clone();
        let target = host.to_string();
        let timeout = cfg.timeout;

        tokio::spawn(async move {
            let state: PortState = connector.connect(&target, port, timeout).await;
            drop(permit);
            // The aggregator only hangs up when the whole scan is dropped.
            let _ = results.send((port, state));
        });
    }

    drop(tx);

    match aggregator.await {
        Ok(mut open) => {
            open.sort_unstable();
            open.dedup();
            debug!("scan of {host} finished, {} ports open", open.len());
            open
        }
        Err(_join) => Vec::new(),
    }
}

/// Single-writer accumulator: collects open ports and reports each
/// completion to the optional observer.
async fn aggregate(
    mut rx: mpsc::UnboundedReceiver<(u16, PortState)>,
    total: usize,
    progress: Option<ProgressFn>,
) -> Vec<u16> {
    let mut open: Vec<u16> = Vec::new();
    let mut completed: usize = 0;

    while let Some((port, state)) = rx.recv().await {
        completed += 1;
        if state.is_open() {
            open.push(port);
        }
        if let Some(report) = &progress {
            report(completed, total);
        }
    }
    open
}
