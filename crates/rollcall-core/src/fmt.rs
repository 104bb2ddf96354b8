//! Shared formatting helpers for the view layer.
//!
//! Pure string functions only — no styles, no layout.

use chrono::{Datelike, NaiveDate};

const MONTHS_DE: [&str; 12] = [
    "Januar",
    "Februar",
    "März",
    "April",
    "Mai",
    "Juni",
    "Juli",
    "August",
    "September",
    "Oktober",
    "November",
    "Dezember",
];

/// Formats a ballot date the way the portal shows it: `"14. März 2025"`.
pub fn format_date(date: NaiveDate) -> String {
    format!(
        "{:02}. {} {}",
        date.day(),
        MONTHS_DE[date.month0() as usize],
        date.year()
    )
}

/// Pads to `max_len`, or truncates with a `...` tail when too long.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        format!("{:<width$}", s, width = max_len)
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

/// Shortens free text to `max_len` characters with a `...` tail, without
/// padding. Used for lead messages.
pub fn excerpt(s: &str, max_len: usize) -> String {
    let flat = s.replace(['\n', '\r'], " ");
    if flat.chars().count() <= max_len {
        flat
    } else {
        let cut: String = flat.chars().take(max_len).collect();
        format!("{}...", cut)
    }
}

/// `"{part} ({pct}%)"` for tally breakdowns.
pub fn count_with_pct(part: u32, pct: u8) -> String {
    format!("{} ({}%)", part, pct)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_is_rendered_in_german_long_form() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        assert_eq!(format_date(date), "14. März 2025");
        let date = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
        assert_eq!(format_date(date), "01. Dezember 2024");
    }

    #[test]
    fn truncate_pads_short_and_cuts_long() {
        assert_eq!(truncate("ab", 4), "ab  ");
        assert_eq!(truncate("abcdefgh", 6), "abc...");
        // Multi-byte characters count as one.
        assert_eq!(truncate("Grüne", 5), "Grüne");
    }

    #[test]
    fn excerpt_flattens_newlines_and_cuts() {
        assert_eq!(excerpt("short", 10), "short");
        assert_eq!(excerpt("a\nb", 10), "a b");
        assert_eq!(excerpt("0123456789abc", 10), "0123456789...");
    }
}
