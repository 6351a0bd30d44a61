//! Korean price string parsing.
//!
//! Listing prices arrive as free text in mixed units: "28억", "1억 5000만",
//! "5천", "3500/150", sometimes with parenthetical notes or placeholders
//! like "협의중". Parsing is best effort and never fails a row: anything
//! unreadable becomes `None` and the caller decides whether that matters.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::codes::TransactionType;
use crate::domain::listing::PriceFields;

const EOK: i64 = 100_000_000;
const CHEON: i64 = 10_000_000;
const MAN: i64 = 10_000;

static PAREN_NOTE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*\(.*?\)").unwrap());
static NEGOTIABLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"협의|확인|미정").unwrap());
static EOK_PART: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)\s*억").unwrap());
static CHEON_PART: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)\s*천").unwrap());
static MAN_PART: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)\s*만").unwrap());
static DIGITS_ONLY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").unwrap());

/// Parse a Korean price string into a won amount.
///
/// Unit markers are additive, each contributing from its first match:
/// 억 ×100,000,000, 천 (not followed by 만) ×10,000,000, 만 ×10,000.
/// A bare digit string is taken to be denominated in 만원 and multiplied
/// by 10,000 - a data-entry convention, not a conversion.
pub fn parse_price(input: &str) -> Option<i64> {
    let trimmed = input.trim();
    if trimmed.is_empty() || trimmed == "-" || trimmed == "O" {
        return None;
    }
    if NEGOTIABLE.is_match(trimmed) {
        return None;
    }

    let cleaned = PAREN_NOTE.replace_all(trimmed, "");
    let cleaned = cleaned.trim();

    let mut total: i64 = 0;

    if let Some(caps) = EOK_PART.captures(cleaned) {
        if let Ok(n) = caps[1].parse::<i64>() {
            total += n * EOK;
        }
    }

    // 천 only counts when standalone; 천만 is left to data entry to spell
    // out as 만 (matching the original cleaning rules)
    if let Some(n) = standalone_cheon(cleaned) {
        total += n * CHEON;
    }

    if let Some(caps) = MAN_PART.captures(cleaned) {
        if let Ok(n) = caps[1].parse::<i64>() {
            total += n * MAN;
        }
    }

    if total == 0 && DIGITS_ONLY.is_match(cleaned) {
        if let Ok(n) = cleaned.parse::<i64>() {
            total = n * MAN;
        }
    }

    (total > 0).then_some(total)
}

/// First `<digits>천` match not immediately followed by 만.
fn standalone_cheon(text: &str) -> Option<i64> {
    for caps in CHEON_PART.captures_iter(text) {
        let whole = caps.get(0)?;
        let followed_by_man = text[whole.end()..].chars().next() == Some('만');
        if !followed_by_man {
            return caps[1].parse::<i64>().ok();
        }
    }
    None
}

/// Split a price string into the fields of its transaction type.
///
/// A `/` always means deposit/rent regardless of the declared type, since
/// only monthly-rent listings are written that way. Without a `/` the
/// parsed amount routes by type; an unknown type leaves everything unset.
pub fn split_price(input: &str, transaction_type: Option<TransactionType>) -> PriceFields {
    let mut fields = PriceFields::default();

    let trimmed = input.trim();
    if trimmed.is_empty() || trimmed == "-" || trimmed == "O" {
        return fields;
    }

    if let Some((deposit, rent)) = trimmed.split_once('/') {
        fields.monthly_deposit = parse_price(deposit);
        fields.monthly_rent = parse_price(rent);
        return fields;
    }

    let amount = parse_price(trimmed);
    match transaction_type {
        Some(t) if t.is_monthly() => fields.monthly_deposit = amount,
        Some(TransactionType::Jeonse) => fields.jeonse_deposit = amount,
        Some(TransactionType::Sale) | Some(TransactionType::Presale) => {
            fields.sale_price = amount
        }
        _ => {}
    }

    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_price_eok_and_man() {
        assert_eq!(parse_price("1억 5000만"), Some(150_000_000));
        assert_eq!(parse_price("28억"), Some(2_800_000_000));
        assert_eq!(parse_price("5000만"), Some(50_000_000));
    }

    #[test]
    fn test_parse_price_standalone_cheon() {
        assert_eq!(parse_price("5천"), Some(50_000_000));
        assert_eq!(parse_price("1억 5천"), Some(150_000_000));
    }

    #[test]
    fn test_parse_price_bare_digits_are_manwon() {
        assert_eq!(parse_price("3500"), Some(35_000_000));
        assert_eq!(parse_price("150"), Some(1_500_000));
    }

    #[test]
    fn test_parse_price_placeholders() {
        assert_eq!(parse_price("협의중"), None);
        assert_eq!(parse_price("확인필요"), None);
        assert_eq!(parse_price("미정"), None);
        assert_eq!(parse_price("-"), None);
        assert_eq!(parse_price("O"), None);
        assert_eq!(parse_price(""), None);
    }

    #[test]
    fn test_parse_price_strips_parenthetical_notes() {
        assert_eq!(parse_price("28억 (26억가능)"), Some(2_800_000_000));
    }

    #[test]
    fn test_parse_price_garbage_is_none() {
        assert_eq!(parse_price("연락요망"), None);
        assert_eq!(parse_price("0"), None);
    }

    #[test]
    fn test_split_price_slash_routes_to_monthly() {
        // A slash wins even when the declared type says otherwise
        let fields = split_price("1억/300", Some(TransactionType::Sale));
        assert_eq!(fields.monthly_deposit, Some(100_000_000));
        assert_eq!(fields.monthly_rent, Some(3_000_000));
        assert_eq!(fields.sale_price, None);
    }

    #[test]
    fn test_split_price_by_type() {
        let sale = split_price("28억", Some(TransactionType::Sale));
        assert_eq!(sale.sale_price, Some(2_800_000_000));

        let jeonse = split_price("7억", Some(TransactionType::Jeonse));
        assert_eq!(jeonse.jeonse_deposit, Some(700_000_000));

        let monthly = split_price("5000만", Some(TransactionType::Monthly));
        assert_eq!(monthly.monthly_deposit, Some(50_000_000));
    }

    #[test]
    fn test_split_price_unknown_type() {
        let fields = split_price("28억", None);
        assert_eq!(fields, PriceFields::default());
    }
}
