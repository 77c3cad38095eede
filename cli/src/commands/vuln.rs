use provr_core::vuln::{test_sql_injection, test_xss};
use tracing::{error, info};

/// Runs both injection checks. A check that errors out is reported
/// inline and counted as "not vulnerable"; it never stops the other one.
pub async fn vuln(url: String, param: String) -> anyhow::Result<()> {
    info!("Testing for SQL injection...");
    match test_sql_injection(&url, &param).await {
        Ok(true) => info!("SQL injection vulnerability found!"),
        Ok(false) => info!("No SQL injection found."),
        Err(e) => {
            error!("SQL injection check failed: {e:#}");
            info!("No SQL injection found.");
        }
    }

    info!("Testing for XSS...");
    match test_xss(&url, &param).await {
        Ok(true) => info!("XSS vulnerability found!"),
        Ok(false) => info!("No XSS found."),
        Err(e) => {
            error!("XSS check failed: {e:#}");
            info!("No XSS found.");
        }
    }

    Ok(())
}
