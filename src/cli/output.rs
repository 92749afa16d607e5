//! Output formatting and progress bars for CLI

use indicatif::{ProgressBar, ProgressStyle};

use crate::experiment::PolicyScore;

/// Create a progress bar for a sweep of the given episode count
pub fn create_sweep_progress(total_episodes: u64) -> ProgressBar {
    let pb = ProgressBar::new(total_episodes);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} episodes ({msg})")
            .expect("Invalid progress bar template")
            .progress_chars("=>-"),
    );
    pb
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Print the aggregated sweep rows as an aligned table
pub fn print_score_table(rows: &[PolicyScore]) {
    println!(
        "  {:<12} {:<16} {:>6} {:>12} {:>10} {:>8} {:>8}",
        "placement", "policy", "runs", "mean score", "std dev", "min", "max"
    );
    println!("  {}", "-".repeat(78));
    for row in rows {
        println!(
            "  {:<12} {:<16} {:>6} {:>12.1} {:>10.1} {:>8} {:>8}",
            row.placement.to_string(),
            row.policy.to_string(),
            row.runs,
            row.mean_score,
            row.std_dev,
            row.min_score,
            row.max_score
        );
    }
}
