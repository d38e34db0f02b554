// Colored terminal output for sentiment reports.
//
// This module handles all terminal-specific formatting. main.rs decides what
// to show and delegates the printing here.

use colored::Colorize;

use crate::report::{Report, Summary};
use crate::sentiment::traits::Sentiment;

/// Longest sample preview printed, in characters.
const PREVIEW_CHARS: usize = 280;

/// Printed instead of a report when the fetch returned nothing.
pub const NO_RESULTS_MESSAGE: &str = "No tweets found!";

/// Display a run summary: the report, or the "no results" message.
pub fn display_summary(summary: &Summary) {
    match &summary.report {
        Some(report) => display_report(&summary.query, report),
        None => display_no_results(summary.provider_error.as_deref()),
    }
}

/// Display the percentage breakdown and sample posts.
pub fn display_report(query: &str, report: &Report) {
    println!(
        "\n{}",
        format!("=== Sentiment for \"{}\" ({} posts) ===", query, report.total).bold()
    );
    println!();

    println!(
        "Positive tweets percentage: {}",
        format!("{:.2}%", report.positive_pct).green()
    );
    println!(
        "Negative tweets percentage: {}",
        format!("{:.2}%", report.negative_pct).red()
    );
    println!(
        "Neutral tweets percentage: {}",
        format!("{:.2}%", report.neutral_pct).dimmed()
    );

    display_samples(Sentiment::Positive, &report.positive_samples);
    display_samples(Sentiment::Negative, &report.negative_samples);
}

/// Display the "no results" outcome, noting a provider failure if there was one.
pub fn display_no_results(provider_error: Option<&str>) {
    println!("{NO_RESULTS_MESSAGE}");
    if let Some(error) = provider_error {
        println!("  {} search failed: {}", "Warning:".yellow(), error);
    }
}

fn display_samples(sentiment: Sentiment, samples: &[String]) {
    let heading = match sentiment {
        Sentiment::Positive => "Positive tweets:".green().bold(),
        Sentiment::Negative => "Negative tweets:".red().bold(),
        Sentiment::Neutral => "Neutral tweets:".bold(),
    };
    println!("\n{heading}");

    if samples.is_empty() {
        println!("  {}", "(none)".dimmed());
        return;
    }

    for text in samples {
        let preview = super::truncate_chars(&super::single_line(text), PREVIEW_CHARS);
        println!("  {preview}");
    }
}
