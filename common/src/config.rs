use std::time::Duration;

/// Tuning knobs for the concurrent port scanner.
#[derive(Debug, Clone, Copy)]
pub struct ScanConfig {
    /// Per-probe connect timeout. Applies to each port individually,
    /// never to the scan as a whole.
    pub timeout: Duration,
    /// Upper bound on simultaneously open probe sockets.
    pub workers: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(150),
            workers: 200,
        }
    }
}

/// Tuning knobs for the sequential credential prober.
#[derive(Debug, Clone, Copy)]
pub struct BruteConfig {
    /// Per-request timeout for a single login attempt.
    pub timeout: Duration,
}

impl Default for BruteConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
        }
    }
}
