//! Date normalization to ISO `YYYY-MM-DD`.
//!
//! Accepts `YYYY-MM-DD`, `YYYY.MM.DD`, and two-digit `YY.MM.DD` (pivoted
//! at 50: YY >= 50 reads as 19YY, otherwise 20YY). Non-date phrases such
//! as 즉시입주 or 협의 come back as `None`; the move-in column keeps its
//! original text elsewhere when the phrase itself matters.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

static ISO_DATE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").unwrap());
static DOTTED_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})\.(\d{2})\.(\d{2})$").unwrap());
static SHORT_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{2})\.(\d{2})\.(\d{2})$").unwrap());

/// Normalize a date string to `YYYY-MM-DD`, or `None` when the input is
/// not a calendar date.
pub fn normalize_date(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() || trimmed == "-" {
        return None;
    }

    let (year, month, day) = if let Some(caps) = ISO_DATE.captures(trimmed) {
        (parse_num(&caps[1]), parse_num(&caps[2]), parse_num(&caps[3]))
    } else if let Some(caps) = DOTTED_DATE.captures(trimmed) {
        (parse_num(&caps[1]), parse_num(&caps[2]), parse_num(&caps[3]))
    } else if let Some(caps) = SHORT_DATE.captures(trimmed) {
        let yy = parse_num(&caps[1]);
        let year = if yy >= 50 { 1900 + yy } else { 2000 + yy };
        (year, parse_num(&caps[2]), parse_num(&caps[3]))
    } else {
        return None;
    };

    // Shape alone is not enough; 2025-13-40 must not pass through
    let date = NaiveDate::from_ymd_opt(year, month as u32, day as u32)?;
    Some(date.format("%Y-%m-%d").to_string())
}

fn parse_num(s: &str) -> i32 {
    // Captures are all-digit by construction
    s.parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_iso_passthrough() {
        assert_eq!(normalize_date("2025-08-02").as_deref(), Some("2025-08-02"));
    }

    #[test]
    fn test_normalize_dotted() {
        assert_eq!(normalize_date("2025.08.02").as_deref(), Some("2025-08-02"));
    }

    #[test]
    fn test_normalize_two_digit_year_pivot() {
        assert_eq!(normalize_date("26.03.26").as_deref(), Some("2026-03-26"));
        assert_eq!(normalize_date("98.11.01").as_deref(), Some("1998-11-01"));
    }

    #[test]
    fn test_non_date_phrases() {
        assert_eq!(normalize_date("즉시입주가능"), None);
        assert_eq!(normalize_date("협의"), None);
        assert_eq!(normalize_date("-"), None);
        assert_eq!(normalize_date(""), None);
    }

    #[test]
    fn test_impossible_dates_rejected() {
        assert_eq!(normalize_date("2025-13-40"), None);
        assert_eq!(normalize_date("2025.02.30"), None);
    }
}
