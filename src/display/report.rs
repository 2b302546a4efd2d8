//! Report formatting utilities for terminal output
//!
//! Shared helpers for the analytics formatters.

use crate::analytics::{Direction, PercentChange, PeriodComparison};

/// Width of report banners and separators
pub const REPORT_WIDTH: usize = 60;

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct.abs() < 0.1 && pct != 0.0 {
        format!("{:.2}%", pct)
    } else if pct.abs() < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Format an optional percentage, "n/a" when undefined
pub fn format_optional_percentage(pct: Option<f64>) -> String {
    pct.map(format_percentage).unwrap_or_else(|| "n/a".to_string())
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// "+12.5% vs last month", or a note that there is nothing to compare to
pub fn format_change(comparison: &PeriodComparison) -> String {
    match comparison.percentage_delta {
        PercentChange::Percent(pct) => {
            let arrow = match comparison.direction {
                Direction::Up => "▲",
                Direction::Down => "▼",
                Direction::Flat => "=",
            };
            format!("{} {:+.2}% vs last month", arrow, pct)
        }
        PercentChange::NoBaseline => "no data for last month".to_string(),
    }
}

/// Format a centered title with a double rule under it
pub fn format_banner(title: &str) -> String {
    let padding = REPORT_WIDTH.saturating_sub(title.chars().count()) / 2;
    format!(
        "{}{}\n{}\n",
        " ".repeat(padding),
        title,
        double_separator(REPORT_WIDTH)
    )
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}
