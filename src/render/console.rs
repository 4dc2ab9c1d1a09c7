//! Terminal output for the inspection commands.
//!
//! Column alignment uses display width rather than byte length so that
//! Polish diacritics line up.

use crate::model::{Breakdown, Category, CompanyDetail, CompanySummary};
use crate::repository::DataIssue;
use crate::scoring::ScoreBand;
use unicode_width::UnicodeWidthStr;

use super::format::{PLACEHOLDER, format_date, format_thousands};

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// Pad `text` with spaces to `width` display columns.
#[must_use]
pub fn pad_right(text: &str, width: usize) -> String {
    let used = UnicodeWidthStr::width(text);
    let mut padded = String::with_capacity(text.len() + width.saturating_sub(used));
    padded.push_str(text);
    padded.extend(std::iter::repeat_n(' ', width.saturating_sub(used)));
    padded
}

const fn band_color(band: ScoreBand) -> &'static str {
    match band {
        ScoreBand::High => "green",
        ScoreBand::Medium => "yellow",
        ScoreBand::Low => "red",
    }
}

/// Plain-text renderer for CLI output.
pub struct ConsoleReporter {
    colored: bool,
}

impl ConsoleReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn score(&self, score: u32) -> String {
        self.color(&format!("{score}/100"), band_color(ScoreBand::of(score)))
    }

    /// Criterion table with `value/max` and a bar.
    #[must_use]
    pub fn breakdown(&self, breakdown: &Breakdown) -> String {
        let label_width = breakdown
            .entries()
            .map(|(c, _)| UnicodeWidthStr::width(c.label()))
            .max()
            .unwrap_or(0);

        let mut lines = Vec::new();
        for (criterion, value) in breakdown.entries() {
            let max = criterion.max_points();
            let filled = (breakdown.percentage(criterion) / 10.0).round() as usize;
            let bar = format!("{}{}", "█".repeat(filled), "░".repeat(10 - filled.min(10)));
            lines.push(format!(
                "  {}  {:>2}/{:<2}  {}",
                pad_right(criterion.label(), label_width),
                value,
                max,
                self.color(&bar, "red")
            ));
        }
        lines.push(format!(
            "  {}  {:>2}/100",
            pad_right("Razem", label_width),
            breakdown.total()
        ));
        lines.join("\n")
    }

    /// Profile summary with breakdown and alternatives.
    #[must_use]
    pub fn company(
        &self,
        detail: &CompanyDetail,
        category_name: &str,
        breakdown: &Breakdown,
        alternatives: &[&CompanySummary],
    ) -> String {
        let mut lines = Vec::new();

        lines.push(format!(
            "{}  {}",
            self.color(detail.brand(), "bold"),
            self.score(detail.score())
        ));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));
        lines.push(format!(
            "{}  {}",
            self.color("Firma:", "cyan"),
            detail.summary.company
        ));
        lines.push(format!("{}  {}", self.color("Kategoria:", "cyan"), category_name));
        if !detail.summary.badges.is_empty() {
            let badges: Vec<String> = detail.summary.badges.iter().map(|b| b.label()).collect();
            lines.push(format!(
                "{}  {}",
                self.color("Odznaki:", "cyan"),
                badges.join(", ")
            ));
        }
        if let Some(hq) = &detail.headquarters {
            lines.push(format!(
                "{}  {}, {}",
                self.color("Siedziba:", "cyan"),
                hq.city,
                hq.country
            ));
        }
        if let Some(headcount) = detail.employment.as_ref().and_then(|e| e.headcount_pl) {
            lines.push(format!(
                "{}  {} osób",
                self.color("Zatrudnienie:", "cyan"),
                format_thousands(headcount)
            ));
        }
        let verified = detail
            .last_verified
            .as_deref()
            .map_or_else(|| PLACEHOLDER.to_string(), format_date);
        lines.push(format!(
            "{}  {}",
            self.color("Weryfikacja:", "cyan"),
            verified
        ));

        lines.push(String::new());
        lines.push(self.color("Rozbicie Indeksu polskości:", "bold"));
        lines.push(self.breakdown(breakdown));

        if !alternatives.is_empty() {
            lines.push(String::new());
            lines.push(self.color("Polskie alternatywy:", "bold"));
            lines.push(self.summaries(alternatives));
        }
        lines.join("\n")
    }

    /// Category heading and its listing.
    #[must_use]
    pub fn category(&self, category: &Category) -> String {
        let mut lines = vec![
            format!("{}  {}", self.color(&category.name, "bold"), category.short),
            self.color("─".repeat(40).as_str(), "dim"),
        ];
        if category.items.is_empty() {
            lines.push(self.color("  Brak firm w tej kategorii.", "dim"));
        } else {
            let items: Vec<&CompanySummary> = category.items.iter().collect();
            lines.push(self.summaries(&items));
        }
        lines.join("\n")
    }

    fn summaries(&self, items: &[&CompanySummary]) -> String {
        let brand_width = items
            .iter()
            .map(|i| UnicodeWidthStr::width(i.brand.as_str()))
            .max()
            .unwrap_or(0);
        let company_width = items
            .iter()
            .map(|i| UnicodeWidthStr::width(i.company.as_str()))
            .max()
            .unwrap_or(0);

        items
            .iter()
            .map(|item| {
                format!(
                    "  {}  {}  {:>7}  {}",
                    pad_right(&item.brand, brand_width),
                    pad_right(&item.company, company_width),
                    self.score(item.score),
                    self.color(&item.id, "dim")
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// One line per data issue, or a confirmation when there are none.
    #[must_use]
    pub fn issues(&self, issues: &[DataIssue]) -> String {
        if issues.is_empty() {
            return self.color("Dane są poprawne.", "green");
        }
        let mut lines = vec![self.color(&format!("Problemy w danych: {}", issues.len()), "bold")];
        for issue in issues {
            lines.push(format!("  {} {issue}", self.color("✗", "red")));
        }
        lines.join("\n")
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Criterion;
    use crate::scoring::calculate_breakdown;

    #[test]
    fn test_pad_right_uses_display_width() {
        assert_eq!(pad_right("Łódź", 6), "Łódź  ");
        assert_eq!(pad_right("za długi tekst", 4), "za długi tekst");
    }

    #[test]
    fn test_breakdown_table_plain() {
        let breakdown = calculate_breakdown(85, &[crate::model::Badge::from("polski_kapital")]);
        let out = ConsoleReporter::new().no_color().breakdown(&breakdown);
        assert!(!out.contains('\x1b'));
        assert!(out.contains(Criterion::Capital.label()));
        assert!(out.contains("40/40"));
        assert!(out.lines().last().is_some_and(|l| l.ends_with("85/100")));
    }

    #[test]
    fn test_issue_listing() {
        let reporter = ConsoleReporter::new().no_color();
        assert_eq!(reporter.issues(&[]), "Dane są poprawne.");
    }

    #[test]
    fn test_colored_score() {
        let out = ConsoleReporter::new().score(91);
        assert!(out.starts_with("\x1b[32m"));
    }
}
