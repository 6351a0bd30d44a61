// ============================================================
// LISTING TYPES
// ============================================================
// Raw CSV capture and the cleaned property record it becomes.
// No I/O, no parsing logic; construction only.

use serde::{Deserialize, Serialize};

use super::codes::{PropertyStatus, PropertyType, TransactionType};

/// One raw CSV row, captured as typed optional fields at the ingestion
/// boundary. Blank values are normalized to `None` so the rest of the
/// pipeline never sees empty strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawListing {
    /// 1-based data row number (header excluded), for traceability.
    pub row_number: usize,

    pub manager: Option<String>,
    pub location: Option<String>,
    pub property_name: Option<String>,
    pub building: Option<String>,
    pub unit: Option<String>,

    pub property_type: Option<String>,
    pub transaction_type: Option<String>,
    pub status: Option<String>,

    /// Main price column (금액), free text.
    pub price: Option<String>,
    /// Lease amount column (임차금액), free text.
    pub lease_price: Option<String>,

    /// 공급/전용(㎡) pair, free text.
    pub area_sqm: Option<String>,
    /// 공급/전용(평) pair, free text.
    pub area_pyeong: Option<String>,

    pub registration_date: Option<String>,
    pub completion_date: Option<String>,
    pub move_in_date: Option<String>,
    pub approval_date: Option<String>,

    pub floor_info: Option<String>,
    pub rooms_bathrooms: Option<String>,
    pub direction: Option<String>,
    pub maintenance_fee: Option<String>,
    pub parking: Option<String>,
    pub special_notes: Option<String>,
    pub manager_memo: Option<String>,

    pub ad_status: Option<String>,
    pub ad_period: Option<String>,

    pub owner: Option<String>,
    pub owner_contact: Option<String>,
    pub co_broker: Option<String>,
    pub co_broker_contact: Option<String>,
}

impl RawListing {
    /// Build a raw listing from (header, value) pairs of one CSV record.
    /// Unknown headers are ignored; known headers map positionally below.
    pub fn from_fields<'a, I>(row_number: usize, fields: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut listing = RawListing {
            row_number,
            ..Default::default()
        };

        for (header, value) in fields {
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            let value = Some(value.to_string());

            match header.trim() {
                "담당자" => listing.manager = value,
                "소재지" => listing.location = value,
                "매물명" => listing.property_name = value,
                "동" => listing.building = value,
                "호" => listing.unit = value,
                "매물종류" => listing.property_type = value,
                "거래유형" => listing.transaction_type = value,
                "매물상태" => listing.status = value,
                "금액" => listing.price = value,
                "임차금액" => listing.lease_price = value,
                "공급/전용(㎡)" => listing.area_sqm = value,
                "공급/전용(평)" => listing.area_pyeong = value,
                "등록일" => listing.registration_date = value,
                "거래완료날짜" => listing.completion_date = value,
                "입주가능일" => listing.move_in_date = value,
                "사용승인" => listing.approval_date = value,
                "해당층/총층" => listing.floor_info = value,
                "룸/욕실" => listing.rooms_bathrooms = value,
                "방향" => listing.direction = value,
                "관리비" => listing.maintenance_fee = value,
                "주차" => listing.parking = value,
                "특이사항" => listing.special_notes = value,
                "담당자MEMO" => listing.manager_memo = value,
                "광고상태" => listing.ad_status = value,
                "광고기간" => listing.ad_period = value,
                "소유주(담당)" => listing.owner = value,
                "소유주 연락처" => listing.owner_contact = value,
                "공동중개" => listing.co_broker = value,
                "공동연락처" => listing.co_broker_contact = value,
                _ => {}
            }
        }

        listing
    }
}

/// Price fields split by transaction type. At most one group is populated
/// for a given listing: sale price, jeonse deposit, or monthly
/// deposit + rent. Amounts are in won.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceFields {
    pub sale_price: Option<i64>,
    pub jeonse_deposit: Option<i64>,
    pub monthly_deposit: Option<i64>,
    pub monthly_rent: Option<i64>,
}

/// A supply/private area pair, unit depending on the source column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AreaPair {
    pub supply: Option<f64>,
    pub private: Option<f64>,
}

impl AreaPair {
    pub fn is_empty(&self) -> bool {
        self.supply.is_none() && self.private.is_none()
    }
}

/// A fully normalized property record, ready for import.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanedProperty {
    // Identity
    pub location: String,
    pub property_name: String,
    pub building: Option<String>,
    pub unit: Option<String>,

    // Manager
    pub manager_name: Option<String>,
    pub manager_email: Option<String>,

    // Classification codes, with the raw labels retained for audit
    pub property_type: Option<PropertyType>,
    pub transaction_type: Option<TransactionType>,
    pub status: PropertyStatus,
    pub property_type_raw: Option<String>,
    pub transaction_type_raw: Option<String>,
    pub status_raw: Option<String>,

    // Money (won)
    pub sale_price: Option<i64>,
    pub jeonse_deposit: Option<i64>,
    pub monthly_deposit: Option<i64>,
    pub monthly_rent: Option<i64>,

    // Areas, both units
    pub supply_area_sqm: Option<f64>,
    pub private_area_sqm: Option<f64>,
    pub supply_area_pyeong: Option<f64>,
    pub private_area_pyeong: Option<f64>,

    // Dates (ISO YYYY-MM-DD); move-in stays free text since it may be
    // a phrase like 즉시입주 rather than a date
    pub registration_date: Option<String>,
    pub completion_date: Option<String>,
    pub move_in_date: Option<String>,
    pub approval_date: Option<String>,

    // Descriptive passthrough
    pub floor_info: Option<String>,
    pub rooms_bathrooms: Option<String>,
    pub direction: Option<String>,
    pub maintenance_fee: Option<String>,
    pub parking: Option<String>,
    pub special_notes: Option<String>,
    pub manager_memo: Option<String>,
    pub ad_status: Option<String>,
    pub ad_period: Option<String>,
    pub owner: Option<String>,
    pub owner_contact: Option<String>,
    pub co_broker: Option<String>,
    pub co_broker_contact: Option<String>,

    /// 1-based data row number in the source file.
    pub row_number: usize,
}

impl CleanedProperty {
    /// Composite key used for duplicate detection.
    pub fn duplicate_key(&self) -> String {
        format!(
            "{}|{}|{}",
            self.location,
            self.building.as_deref().unwrap_or(""),
            self.unit.as_deref().unwrap_or("")
        )
    }

    /// Number of populated fields, used to pick the winner among
    /// duplicates ("most information wins").
    pub fn completeness(&self) -> usize {
        match serde_json::to_value(self) {
            Ok(serde_json::Value::Object(map)) => map
                .values()
                .filter(|v| match v {
                    serde_json::Value::Null => false,
                    serde_json::Value::String(s) => !s.is_empty(),
                    _ => true,
                })
                .count(),
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fields_maps_known_headers() {
        let listing = RawListing::from_fields(
            3,
            vec![
                ("소재지", "서울시 강남구"),
                ("매물명", "래미안"),
                ("동", "101"),
                ("호", " 1001 "),
                ("금액", "28억"),
                ("알수없는컬럼", "whatever"),
            ],
        );

        assert_eq!(listing.row_number, 3);
        assert_eq!(listing.location.as_deref(), Some("서울시 강남구"));
        assert_eq!(listing.unit.as_deref(), Some("1001"));
        assert_eq!(listing.price.as_deref(), Some("28억"));
    }

    #[test]
    fn test_from_fields_blank_values_become_none() {
        let listing = RawListing::from_fields(1, vec![("소재지", "  "), ("동", "")]);
        assert!(listing.location.is_none());
        assert!(listing.building.is_none());
    }

    #[test]
    fn test_duplicate_key_includes_blank_parts() {
        let property = sample_property();
        assert_eq!(property.duplicate_key(), "서울시 강남구|101|");
    }

    #[test]
    fn test_completeness_counts_populated_fields() {
        let mut a = sample_property();
        let b = sample_property();
        a.direction = Some("남향".to_string());
        a.parking = Some("2대".to_string());

        assert!(a.completeness() > b.completeness());
    }

    fn sample_property() -> CleanedProperty {
        CleanedProperty {
            location: "서울시 강남구".to_string(),
            property_name: "래미안".to_string(),
            building: Some("101".to_string()),
            unit: None,
            manager_name: None,
            manager_email: None,
            property_type: Some(PropertyType::Apartment),
            transaction_type: Some(TransactionType::Sale),
            status: PropertyStatus::Available,
            property_type_raw: Some("아파트".to_string()),
            transaction_type_raw: Some("매매".to_string()),
            status_raw: Some("거래가능".to_string()),
            sale_price: Some(2_800_000_000),
            jeonse_deposit: None,
            monthly_deposit: None,
            monthly_rent: None,
            supply_area_sqm: None,
            private_area_sqm: None,
            supply_area_pyeong: None,
            private_area_pyeong: None,
            registration_date: None,
            completion_date: None,
            move_in_date: None,
            approval_date: None,
            floor_info: None,
            rooms_bathrooms: None,
            direction: None,
            maintenance_fee: None,
            parking: None,
            special_notes: None,
            manager_memo: None,
            ad_status: None,
            ad_period: None,
            owner: None,
            owner_contact: None,
            co_broker: None,
            co_broker_contact: None,
            row_number: 1,
        }
    }
}
