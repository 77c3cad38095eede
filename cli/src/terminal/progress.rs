use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Bar tracking `(completed, total)` port probe completions.
pub fn scan_bar(total: usize) -> ProgressBar {
    let bar = ProgressBar::new(total as u64);
    let style = ProgressStyle::with_template("{bar:40.green/black} {pos}/{len} ports").unwrap();

    bar.set_style(style);
    bar
}

/// Spinner shown while the credential prober walks the wordlist.
pub fn attempt_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.blue} {msg}")
        .unwrap()
        .tick_strings(&[
            "▁▁▁▁▁",
            "▁▂▂▂▁",
            "▁▄▂▄▁",
            "▂▄▆▄▂",
            "▄▆█▆▄",
            "▂▄▆▄▂",
            "▁▄▂▄▁",
            "▁▂▂▂▁",
        ]);

    spinner.set_style(style);
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
