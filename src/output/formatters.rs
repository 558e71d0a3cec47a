//! Display helpers shared across commands

use chrono::{DateTime, Utc};
use colored::Colorize;

use crate::client::models::LaunchStatus;

/// Format a UTC timestamp for table display
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%Y-%m-%d %H:%M UTC").to_string()
}

/// Countdown or elapsed description relative to now ("T-2d 4h", "3d ago")
pub fn format_relative(date: &DateTime<Utc>) -> String {
    let delta = date.signed_duration_since(Utc::now());

    if delta > chrono::Duration::zero() {
        let days = delta.num_days();
        let hours = delta.num_hours() % 24;
        if days > 0 {
            format!("T-{}d {}h", days, hours)
        } else {
            format!("T-{}h {}m", delta.num_hours(), delta.num_minutes() % 60)
        }
    } else {
        let elapsed = -delta;
        if elapsed.num_days() > 0 {
            format!("{}d ago", elapsed.num_days())
        } else if elapsed.num_hours() > 0 {
            format!("{}h ago", elapsed.num_hours())
        } else {
            format!("{}m ago", elapsed.num_minutes())
        }
    }
}

/// Colored status label for terminal output
pub fn status_label(status: LaunchStatus) -> String {
    match status {
        LaunchStatus::Scheduled => status.as_str().yellow().to_string(),
        LaunchStatus::Success => status.as_str().green().to_string(),
        LaunchStatus::Failure => status.as_str().red().to_string(),
        LaunchStatus::Unknown => status.as_str().dimmed().to_string(),
    }
}

/// Truncate long text for table cells
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", cut.trim_end())
}
