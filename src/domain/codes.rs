// ============================================================
// LOOKUP CODES
// ============================================================
// Canonical codes substituted for free-text Korean labels.
// Stored as stable snake_case strings in the cleaned output.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Property category code (매물종류).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    Apartment,
    House,
    MixedUse,
    Commercial,
    Officetel,
    Villa,
    Townhouse,
    Neighborhood,
    Office,
    Land,
    Building,
    BuildingLarge,
}

/// Transaction category code (거래유형).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    Sale,
    Jeonse,
    Monthly,
    MonthlyRent,
    Presale,
}

impl TransactionType {
    /// Whether this transaction carries a recurring rent component.
    pub fn is_monthly(&self) -> bool {
        matches!(self, TransactionType::Monthly | TransactionType::MonthlyRent)
    }
}

/// Listing status code (매물상태). Unlike the category codes this is
/// never null; unrecognized input falls back to `NeedsCheck`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyStatus {
    Available,
    Completed,
    Pending,
    Cancelled,
    NeedsCheck,
}

impl Default for PropertyStatus {
    fn default() -> Self {
        PropertyStatus::NeedsCheck
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            PropertyType::Apartment => "apartment",
            PropertyType::House => "house",
            PropertyType::MixedUse => "mixed_use",
            PropertyType::Commercial => "commercial",
            PropertyType::Officetel => "officetel",
            PropertyType::Villa => "villa",
            PropertyType::Townhouse => "townhouse",
            PropertyType::Neighborhood => "neighborhood",
            PropertyType::Office => "office",
            PropertyType::Land => "land",
            PropertyType::Building => "building",
            PropertyType::BuildingLarge => "building_large",
        };
        f.write_str(code)
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            TransactionType::Sale => "sale",
            TransactionType::Jeonse => "jeonse",
            TransactionType::Monthly => "monthly",
            TransactionType::MonthlyRent => "monthly_rent",
            TransactionType::Presale => "presale",
        };
        f.write_str(code)
    }
}

impl fmt::Display for PropertyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            PropertyStatus::Available => "available",
            PropertyStatus::Completed => "completed",
            PropertyStatus::Pending => "pending",
            PropertyStatus::Cancelled => "cancelled",
            PropertyStatus::NeedsCheck => "needs_check",
        };
        f.write_str(code)
    }
}
