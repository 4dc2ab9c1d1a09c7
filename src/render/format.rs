//! Polish number and date formatting.

use chrono::NaiveDate;

/// Shown wherever an optional field is missing.
pub const PLACEHOLDER: &str = "Dane w przygotowaniu";

/// Group digits the Polish way.
///
/// Four-digit numbers stay ungrouped; longer ones use a non-breaking space
/// between groups of three.
#[must_use]
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 4 {
        return digits;
    }

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 * 2);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('\u{a0}');
        }
        grouped.push(ch);
    }
    grouped
}

/// Render an ISO date as `dd.mm.yyyy`; anything else is returned as-is.
#[must_use]
pub fn format_date(raw: &str) -> String {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_or_else(|_| raw.to_string(), |d| d.format("%d.%m.%Y").to_string())
}

/// `Tak`/`Nie` for a yes/no field.
#[must_use]
pub const fn yes_no(value: bool) -> &'static str {
    if value { "Tak" } else { "Nie" }
}
