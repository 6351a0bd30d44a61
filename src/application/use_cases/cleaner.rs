//! Row validation and assembly of cleaned records.
//!
//! One raw row either becomes a `CleanedProperty` or a rejection reason.
//! Only the required identity fields can reject a row; every other field
//! is best effort and an unparseable value just stays `None`.

use crate::application::use_cases::area::{complete_area_units, parse_area_pair};
use crate::application::use_cases::categories::CategoryMapper;
use crate::application::use_cases::dates::normalize_date;
use crate::application::use_cases::price::split_price;
use crate::domain::codes::TransactionType;
use crate::domain::listing::{AreaPair, CleanedProperty, RawListing};
use crate::infrastructure::config::{LookupTables, ManagerDirectory};

/// Validates raw rows and assembles cleaned records from them.
pub struct RowCleaner<'a> {
    mapper: CategoryMapper<'a>,
    managers: &'a ManagerDirectory,
}

impl<'a> RowCleaner<'a> {
    pub fn new(tables: &'a LookupTables, managers: &'a ManagerDirectory) -> Self {
        Self {
            mapper: CategoryMapper::new(tables),
            managers,
        }
    }

    /// Clean one raw row. `Err` carries the human-readable rejection
    /// reason for the error report.
    pub fn clean(&self, raw: &RawListing) -> Result<CleanedProperty, String> {
        let location = match raw.location.as_deref().map(str::trim) {
            Some(v) if !v.is_empty() => v.to_string(),
            _ => return Err("required field 소재지 (location) is blank".to_string()),
        };
        let property_name = match raw.property_name.as_deref().map(str::trim) {
            Some(v) if !v.is_empty() => v.to_string(),
            _ => return Err("required field 매물명 (property name) is blank".to_string()),
        };

        let price_raw = raw.price.as_deref().unwrap_or("");
        let type_raw = raw.transaction_type.as_deref().unwrap_or("");
        let transaction_type = self.mapper.transaction_type(type_raw, price_raw);

        let mut prices = split_price(price_raw, transaction_type);

        // The separate lease column is always jeonse-denominated and
        // backfills the deposit when the main column did not carry one
        if prices.jeonse_deposit.is_none() {
            if let Some(lease_raw) = raw.lease_price.as_deref() {
                let lease = split_price(lease_raw, Some(TransactionType::Jeonse));
                prices.jeonse_deposit = lease.jeonse_deposit;
            }
        }

        let sqm = raw
            .area_sqm
            .as_deref()
            .map(parse_area_pair)
            .unwrap_or_default();
        let pyeong = raw
            .area_pyeong
            .as_deref()
            .map(parse_area_pair)
            .unwrap_or_default();
        let (sqm, pyeong): (AreaPair, AreaPair) = complete_area_units(sqm, pyeong);

        let manager_email = raw
            .manager
            .as_deref()
            .and_then(|name| self.managers.get(name.trim()))
            .cloned();

        Ok(CleanedProperty {
            location,
            property_name,
            building: raw.building.clone(),
            unit: raw.unit.clone(),

            manager_name: raw.manager.clone(),
            manager_email,

            property_type: raw
                .property_type
                .as_deref()
                .and_then(|label| self.mapper.property_type(label)),
            transaction_type,
            status: self.mapper.status(raw.status.as_deref().unwrap_or("")),
            property_type_raw: raw.property_type.clone(),
            transaction_type_raw: raw.transaction_type.clone(),
            status_raw: raw.status.clone(),

            sale_price: prices.sale_price,
            jeonse_deposit: prices.jeonse_deposit,
            monthly_deposit: prices.monthly_deposit,
            monthly_rent: prices.monthly_rent,

            supply_area_sqm: sqm.supply,
            private_area_sqm: sqm.private,
            supply_area_pyeong: pyeong.supply,
            private_area_pyeong: pyeong.private,

            registration_date: raw
                .registration_date
                .as_deref()
                .and_then(normalize_date),
            completion_date: raw.completion_date.as_deref().and_then(normalize_date),
            move_in_date: raw.move_in_date.clone(),
            approval_date: raw.approval_date.as_deref().and_then(normalize_date),

            floor_info: raw.floor_info.clone(),
            rooms_bathrooms: raw.rooms_bathrooms.clone(),
            direction: raw.direction.clone(),
            maintenance_fee: raw.maintenance_fee.clone(),
            parking: raw.parking.clone(),
            special_notes: raw.special_notes.clone(),
            manager_memo: raw.manager_memo.clone(),
            ad_status: raw.ad_status.clone(),
            ad_period: raw.ad_period.clone(),
            owner: raw.owner.clone(),
            owner_contact: raw.owner_contact.clone(),
            co_broker: raw.co_broker.clone(),
            co_broker_contact: raw.co_broker_contact.clone(),

            row_number: raw.row_number,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::codes::{PropertyStatus, PropertyType};
    use crate::infrastructure::config::PipelineConfig;

    fn clean(fields: Vec<(&str, &str)>) -> Result<CleanedProperty, String> {
        let config = PipelineConfig::default();
        let cleaner = RowCleaner::new(&config.lookups, &config.managers);
        cleaner.clean(&RawListing::from_fields(1, fields))
    }

    #[test]
    fn test_clean_full_row() {
        let property = clean(vec![
            ("담당자", "장민아"),
            ("소재지", "서울시 강남구"),
            ("매물명", "래미안"),
            ("동", "101"),
            ("호", "1001"),
            ("매물종류", "아파트"),
            ("거래유형", "매매"),
            ("매물상태", "거래가능"),
            ("금액", "28억 (26억가능)"),
            ("공급/전용(㎡)", "184.03㎡ / 171.7㎡"),
            ("등록일", "2025.08.02"),
            ("입주가능일", "즉시입주가능"),
        ])
        .unwrap();

        assert_eq!(property.property_type, Some(PropertyType::Apartment));
        assert_eq!(property.status, PropertyStatus::Available);
        assert_eq!(property.sale_price, Some(2_800_000_000));
        assert_eq!(property.supply_area_sqm, Some(184.03));
        assert!(property.supply_area_pyeong.is_some());
        assert_eq!(property.registration_date.as_deref(), Some("2025-08-02"));
        // Non-date move-in text is carried through, not normalized away
        assert_eq!(property.move_in_date.as_deref(), Some("즉시입주가능"));
        assert_eq!(
            property.manager_email.as_deref(),
            Some("jma@the-realty.co.kr")
        );
    }

    #[test]
    fn test_missing_location_rejected() {
        let err = clean(vec![("매물명", "래미안")]).unwrap_err();
        assert!(err.contains("소재지"));
    }

    #[test]
    fn test_missing_property_name_rejected() {
        let err = clean(vec![("소재지", "서울시 강남구")]).unwrap_err();
        assert!(err.contains("매물명"));
    }

    #[test]
    fn test_lease_column_backfills_jeonse_deposit() {
        let property = clean(vec![
            ("소재지", "서울시 강남구"),
            ("매물명", "래미안"),
            ("거래유형", "전세"),
            ("임차금액", "7억"),
        ])
        .unwrap();

        assert_eq!(property.jeonse_deposit, Some(700_000_000));
    }

    #[test]
    fn test_bad_fields_do_not_reject_row() {
        let property = clean(vec![
            ("소재지", "서울시 강남구"),
            ("매물명", "래미안"),
            ("매물종류", "호텔"),
            ("금액", "협의중"),
            ("등록일", "미정"),
        ])
        .unwrap();

        assert_eq!(property.property_type, None);
        assert_eq!(property.sale_price, None);
        assert_eq!(property.registration_date, None);
        assert_eq!(property.property_type_raw.as_deref(), Some("호텔"));
    }

    #[test]
    fn test_unknown_manager_has_no_email() {
        let property = clean(vec![
            ("담당자", "홍길동"),
            ("소재지", "서울시 강남구"),
            ("매물명", "래미안"),
        ])
        .unwrap();

        assert_eq!(property.manager_name.as_deref(), Some("홍길동"));
        assert_eq!(property.manager_email, None);
    }
}
