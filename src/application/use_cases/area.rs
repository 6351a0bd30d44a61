//! Area pair parsing and unit conversion.
//!
//! Source columns carry "supply / private" pairs, e.g. "184.03㎡ / 171.7㎡"
//! or "55.7 / 51.9". A value without the pair shape is treated as
//! unparseable rather than guessed at.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::listing::AreaPair;

/// Square meters per pyeong.
pub const PYEONG_IN_SQM: f64 = 3.3058;

static PAREN_NOTE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(.*?\)").unwrap());
static AREA_PAIR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+\.?\d*)\s*/\s*(\d+\.?\d*)").unwrap());

/// Parse a "supply / private" area pair. Units (㎡, 평) and parenthetical
/// notes are ignored; no `/` means both values are `None`.
pub fn parse_area_pair(input: &str) -> AreaPair {
    let trimmed = input.trim();
    if trimmed.is_empty() || trimmed == "-" {
        return AreaPair::default();
    }

    let cleaned = PAREN_NOTE.replace_all(trimmed, "");

    match AREA_PAIR.captures(cleaned.trim()) {
        Some(caps) => AreaPair {
            supply: caps[1].parse().ok(),
            private: caps[2].parse().ok(),
        },
        None => AreaPair::default(),
    }
}

/// Fill the missing unit of a ㎡/평 column pair from the other one, so
/// cleaned records always carry both when either column parsed.
pub fn complete_area_units(sqm: AreaPair, pyeong: AreaPair) -> (AreaPair, AreaPair) {
    let sqm = AreaPair {
        supply: sqm.supply.or(pyeong.supply.map(|p| p * PYEONG_IN_SQM)),
        private: sqm.private.or(pyeong.private.map(|p| p * PYEONG_IN_SQM)),
    };
    let pyeong = AreaPair {
        supply: pyeong.supply.or(sqm.supply.map(|s| s / PYEONG_IN_SQM)),
        private: pyeong.private.or(sqm.private.map(|s| s / PYEONG_IN_SQM)),
    };
    (sqm, pyeong)
}
