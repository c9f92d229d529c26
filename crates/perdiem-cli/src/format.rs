//! Presentation helpers for amounts and day statuses.

use colored::Colorize;

use perdiem_domain::DayStatus;

/// Formats an amount with the configured currency code, e.g. `12.50 USD`.
pub fn amount(value: f64, currency: &str) -> String {
    format!("{value:.2} {currency}")
}

/// Colored, human-readable status label.
pub fn status_label(status: DayStatus) -> String {
    match status {
        DayStatus::NoBudget => status.to_string().dimmed().to_string(),
        DayStatus::UnderBudget => status.to_string().green().to_string(),
        DayStatus::OnBudget => status.to_string().yellow().to_string(),
        DayStatus::OverBudget => status.to_string().red().to_string(),
    }
}
