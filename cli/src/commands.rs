pub mod brute;
pub mod scan;
pub mod vuln;

use clap::{Parser, Subcommand};
use provr_core::cancel::CancelToken;
use tracing::warn;

#[derive(Parser)]
#[command(name = "provr")]
#[command(about = "A network probing toolkit.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan open ports on a target
    #[command(alias = "s")]
    Scan {
        /// Target IP address
        target: String,
        /// Starting port
        #[arg(long, default_value_t = 1)]
        start: u16,
        /// Ending port
        #[arg(long, default_value_t = 1024)]
        end: u16,
        /// Per-probe timeout in milliseconds
        #[arg(long, default_value_t = 150)]
        timeout: u64,
        /// Maximum concurrent probes
        #[arg(long, default_value_t = 200)]
        workers: usize,
        /// Disable the progress bar
        #[arg(long)]
        no_progress: bool,
    },
    /// Perform a brute-force attack against a login form
    #[command(alias = "b")]
    Brute {
        /// Login page URL
        url: String,
        /// Username to test
        username: String,
        /// File containing the password list (use '-' for stdin)
        password_file: String,
    },
    /// Test a URL parameter for injection vulnerabilities
    #[command(alias = "v")]
    Vuln {
        /// URL to test
        url: String,
        /// Parameter to test
        param: String,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Wires Ctrl-C to the engine's cancellation token. In-flight probes are
/// allowed to finish; partial results are still reported.
pub fn cancel_on_interrupt(cancel: CancelToken) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupt received, finishing in-flight probes");
            cancel.cancel();
        }
    });
}
