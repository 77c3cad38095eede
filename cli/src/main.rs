mod commands;
mod terminal;

use commands::{CommandLine, Commands, brute, scan, vuln};
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init();

    match commands.command {
        Commands::Scan {
            target,
            start,
            end,
            timeout,
            workers,
            no_progress,
        } => {
            print::header("starting scanner");
            scan::scan(target, start, end, timeout, workers, no_progress).await
        }
        Commands::Brute {
            url,
            username,
            password_file,
        } => {
            print::header("starting brute force");
            brute::brute(url, username, password_file).await
        }
        Commands::Vuln { url, param } => {
            print::header("testing for vulnerabilities");
            vuln::vuln(url, param).await
        }
    }
}
