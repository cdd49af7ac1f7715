//! Minimal print driver: read one results file, print the report.
//!
//! Usage: `splitboard <results.xml>`. Log verbosity follows `RUST_LOG`.

use anyhow::{Context, Result, bail};
use splitboard::{Splitboard, format_elapsed};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let Some(path) = std::env::args().nth(1) else {
        bail!("usage: splitboard <results.xml>");
    };

    let report = Splitboard::open(&path)
        .with_context(|| format!("Processing results file {path}"))?;

    println!("{} ({})", report.event.name, report.event.date);
    println!("Class {} — winning time {}", report.event.class_name, format_elapsed(report.winning_time));
    println!();

    for competitor in &report.results {
        let position = competitor
            .position
            .map(|p| format!("{p:>3}"))
            .unwrap_or_else(|| format!("{:>3}", "-"));
        println!(
            "{position}  {:<28} {:<20} {:>8}  {}",
            competitor.full_name,
            competitor.club_name,
            format_elapsed(competitor.total_time),
            competitor.status,
        );

        for split in &competitor.splits {
            let time = split.time.map(format_elapsed).unwrap_or_else(|| "-".to_string());
            let split_time =
                split.split_time.map(format_elapsed).unwrap_or_else(|| "-".to_string());
            let gap = match (split.split_gap, split.split_gap_percentage) {
                (Some(gap), Some(pct)) => format!("+{} ({pct:.1}%)", format_elapsed(gap)),
                (Some(gap), None) => format!("+{}", format_elapsed(gap)),
                _ => String::new(),
            };
            println!("      {:<6} {time:>8} {split_time:>8}  {gap}", split.control_code);
        }
    }

    Ok(())
}
