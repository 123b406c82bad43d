//! Shared formatting helpers for amounts, shares and bars

use crate::config::Settings;
use crate::models::Money;

/// Format an amount with the configured currency symbol
pub fn format_money(amount: Money, settings: &Settings) -> String {
    amount.format_with_symbol(&settings.currency_symbol, settings.currency_suffix)
}

/// Format a percentage, with more precision for small shares
pub fn format_percentage(pct: f64) -> String {
    if pct > 0.0 && pct < 1.0 {
        format!("{:.2}%", pct)
    } else {
        format!("{:.1}%", pct)
    }
}

/// Horizontal bar of `width` cells, filled in proportion to `value / max`
pub fn format_bar(value: i64, max: i64, width: usize) -> String {
    if max <= 0 || value <= 0 {
        return "░".repeat(width);
    }

    let filled = ((value as f64 / max as f64) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
