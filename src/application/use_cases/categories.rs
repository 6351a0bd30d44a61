//! Free-text category labels to lookup codes.
//!
//! Labels come from hand-entered spreadsheets: compounds like
//! "공동주택/아파트", regional spellings, and the occasional price pasted
//! into the type column. Mapping is exact lookup first, then synonym
//! rules, then shape-based inference for malformed transaction labels.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::codes::{PropertyStatus, PropertyType, TransactionType};
use crate::infrastructure::config::LookupTables;

static DIGITS_ONLY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").unwrap());
static DATE_SHAPED: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());

/// Maps raw Korean labels to canonical codes using injected tables.
pub struct CategoryMapper<'a> {
    tables: &'a LookupTables,
}

impl<'a> CategoryMapper<'a> {
    pub fn new(tables: &'a LookupTables) -> Self {
        Self { tables }
    }

    /// Map a property-type label. Compound labels are tried part by part;
    /// the first part that resolves wins. Unknown labels map to `None`
    /// (unclassified), never to a guessed code.
    pub fn property_type(&self, label: &str) -> Option<PropertyType> {
        for part in label.split('/') {
            let part = part.trim();

            if let Some(&code) = self.tables.property_types.get(part) {
                return Some(code);
            }

            let synonym = match part {
                "공동주택" => Some(PropertyType::Apartment),
                "빌라" | "다세대" | "연립" => Some(PropertyType::Villa),
                "상가주택" | "사무실/상가" => Some(PropertyType::Commercial),
                "빌딩/건물" | "빌딩" => Some(PropertyType::BuildingLarge),
                _ if part.contains("근생") || part.contains("근린생활") => {
                    Some(PropertyType::Neighborhood)
                }
                _ => None,
            };
            if synonym.is_some() {
                return synonym;
            }
        }

        None
    }

    /// Map a transaction-type label, consulting the price string when the
    /// label is blank or itself price-shaped (digits or 억): a `/` price
    /// means monthly rent, anything else defaults to sale for malformed
    /// labels and stays unclassified for blank ones.
    pub fn transaction_type(&self, label: &str, price: &str) -> Option<TransactionType> {
        let label = label.trim();

        if label.is_empty() {
            if price.contains('/') {
                return Some(TransactionType::Monthly);
            }
            return None;
        }

        if DIGITS_ONLY.is_match(label) || label.contains('억') {
            if price.contains('/') {
                return Some(TransactionType::Monthly);
            }
            return Some(TransactionType::Sale);
        }

        if let Some(&code) = self.tables.transaction_types.get(label) {
            return Some(code);
        }

        match label {
            "급매" => Some(TransactionType::Sale),
            "렌트" | "단기/렌트" => Some(TransactionType::MonthlyRent),
            "반전세" => Some(TransactionType::Jeonse),
            _ => None,
        }
    }

    /// Map a status label. Statuses are never unclassified: anything
    /// unrecognized (including a date pasted into the column) falls back
    /// to `NeedsCheck` for manual review.
    pub fn status(&self, label: &str) -> PropertyStatus {
        let label = label.trim();

        if label.is_empty() || DATE_SHAPED.is_match(label) {
            return PropertyStatus::NeedsCheck;
        }

        if let Some(&code) = self.tables.statuses.get(label) {
            return code;
        }

        if label.contains("보류") {
            return PropertyStatus::Pending;
        }
        if label == "매물철회" {
            return PropertyStatus::Cancelled;
        }
        if label == "계약완료" || label.contains("완료") {
            return PropertyStatus::Completed;
        }

        PropertyStatus::NeedsCheck
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapper_tables() -> LookupTables {
        LookupTables::default()
    }

    #[test]
    fn test_property_type_exact_and_compound() {
        let tables = mapper_tables();
        let mapper = CategoryMapper::new(&tables);

        assert_eq!(mapper.property_type("아파트"), Some(PropertyType::Apartment));
        assert_eq!(
            mapper.property_type("공동주택/아파트"),
            Some(PropertyType::Apartment)
        );
    }

    #[test]
    fn test_property_type_synonyms() {
        let tables = mapper_tables();
        let mapper = CategoryMapper::new(&tables);

        assert_eq!(mapper.property_type("다세대"), Some(PropertyType::Villa));
        assert_eq!(
            mapper.property_type("근생시설"),
            Some(PropertyType::Neighborhood)
        );
        assert_eq!(
            mapper.property_type("빌딩/건물"),
            Some(PropertyType::BuildingLarge)
        );
    }

    #[test]
    fn test_property_type_unknown_is_none() {
        let tables = mapper_tables();
        let mapper = CategoryMapper::new(&tables);
        assert_eq!(mapper.property_type("호텔"), None);
    }

    #[test]
    fn test_transaction_type_exact_and_synonyms() {
        let tables = mapper_tables();
        let mapper = CategoryMapper::new(&tables);

        assert_eq!(
            mapper.transaction_type("매매", "28억"),
            Some(TransactionType::Sale)
        );
        assert_eq!(
            mapper.transaction_type("반전세", "3억/100"),
            Some(TransactionType::Jeonse)
        );
        assert_eq!(
            mapper.transaction_type("렌트", "500/300"),
            Some(TransactionType::MonthlyRent)
        );
    }

    #[test]
    fn test_transaction_type_inferred_from_price_shape() {
        let tables = mapper_tables();
        let mapper = CategoryMapper::new(&tables);

        // Price pasted into the label column
        assert_eq!(
            mapper.transaction_type("15억", "15억"),
            Some(TransactionType::Sale)
        );
        assert_eq!(
            mapper.transaction_type("3500", "3500/150"),
            Some(TransactionType::Monthly)
        );
        // Blank label, slash-shaped price
        assert_eq!(
            mapper.transaction_type("", "1억/300"),
            Some(TransactionType::Monthly)
        );
        assert_eq!(mapper.transaction_type("", "28억"), None);
    }

    #[test]
    fn test_status_fallbacks() {
        let tables = mapper_tables();
        let mapper = CategoryMapper::new(&tables);

        assert_eq!(mapper.status("거래가능"), PropertyStatus::Available);
        assert_eq!(mapper.status("보류중"), PropertyStatus::Pending);
        assert_eq!(mapper.status("계약완료"), PropertyStatus::Completed);
        assert_eq!(mapper.status("매물철회"), PropertyStatus::Cancelled);
        assert_eq!(mapper.status(""), PropertyStatus::NeedsCheck);
        assert_eq!(mapper.status("2025-01-03"), PropertyStatus::NeedsCheck);
        assert_eq!(mapper.status("이상한값"), PropertyStatus::NeedsCheck);
    }
}
