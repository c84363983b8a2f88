use chrono::NaiveDate;

/// Minutes worked as an "Xh Ym" label; no rounding.
pub fn format_time(minutes: u32) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}

/// "Jul 5" — trend axis labels.
pub fn format_date_short(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// "Jul 5, 2026" — table rows.
pub fn format_date_long(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// One-decimal hours for the stat cards.
pub fn format_hours_short(hours: f64) -> String {
    format!("{hours:.1}")
}
