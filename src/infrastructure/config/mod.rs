// ============================================================
// PIPELINE CONFIGURATION
// ============================================================
// Figment-merged configuration: compiled-in defaults, optional
// realty.toml, then REALTY_* environment overrides. The lookup
// tables and manager directory are configuration, not globals,
// so tests and deployments can substitute their own.

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::domain::codes::{PropertyStatus, PropertyType, TransactionType};
use crate::domain::error::Result;

/// Korean label -> canonical code tables, as kept in the lookup tables
/// of the listing database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupTables {
    #[serde(default)]
    pub property_types: HashMap<String, PropertyType>,
    #[serde(default)]
    pub transaction_types: HashMap<String, TransactionType>,
    #[serde(default)]
    pub statuses: HashMap<String, PropertyStatus>,
}

impl Default for LookupTables {
    fn default() -> Self {
        let property_types = [
            ("아파트", PropertyType::Apartment),
            ("단독주택", PropertyType::House),
            ("주상복합", PropertyType::MixedUse),
            ("상가건물", PropertyType::Commercial),
            ("오피스텔", PropertyType::Officetel),
            ("빌라/연립", PropertyType::Villa),
            ("타운하우스", PropertyType::Townhouse),
            ("근린생활시설", PropertyType::Neighborhood),
            ("업무시설", PropertyType::Office),
            ("토지", PropertyType::Land),
            ("건물", PropertyType::Building),
            ("빌딩", PropertyType::BuildingLarge),
        ]
        .into_iter()
        .map(|(label, code)| (label.to_string(), code))
        .collect();

        let transaction_types = [
            ("매매", TransactionType::Sale),
            ("전세", TransactionType::Jeonse),
            ("월세", TransactionType::Monthly),
            ("월세/렌트", TransactionType::MonthlyRent),
            ("분양", TransactionType::Presale),
        ]
        .into_iter()
        .map(|(label, code)| (label.to_string(), code))
        .collect();

        let statuses = [
            ("거래가능", PropertyStatus::Available),
            ("거래완료", PropertyStatus::Completed),
            ("거래보류", PropertyStatus::Pending),
            ("거래철회", PropertyStatus::Cancelled),
            ("확인필요", PropertyStatus::NeedsCheck),
        ]
        .into_iter()
        .map(|(label, code)| (label.to_string(), code))
        .collect();

        Self {
            property_types,
            transaction_types,
            statuses,
        }
    }
}

/// Staff name -> email directory used to resolve the manager column.
pub type ManagerDirectory = HashMap<String, String>;

fn default_manager_directory() -> ManagerDirectory {
    [
        ("서지혜", "pjh@the-realty.co.kr"),
        ("서을선", "ses@the-realty.co.kr"),
        ("김효석", "khs@the-realty.co.kr"),
        ("정선혜", "jsh@the-realty.co.kr"),
        ("박소현", "psh@the-realty.co.kr"),
        ("송영주", "syj@the-realty.co.kr"),
        ("성은미", "sem@the-realty.co.kr"),
        ("정윤식", "jys@the-realty.co.kr"),
        ("장승환", "jsh2@the-realty.co.kr"),
        ("정이든", "jed@the-realty.co.kr"),
        ("장민아", "jma@the-realty.co.kr"),
    ]
    .into_iter()
    .map(|(name, email)| (name.to_string(), email.to_string()))
    .collect()
}

fn default_output_dir() -> String {
    "output".to_string()
}

/// Full pipeline configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Directory the four report files are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// CSV delimiter; autodetected from the input when unset.
    #[serde(default)]
    pub delimiter: Option<char>,

    #[serde(default)]
    pub lookups: LookupTables,

    #[serde(default = "default_manager_directory")]
    pub managers: ManagerDirectory,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            delimiter: None,
            lookups: LookupTables::default(),
            managers: default_manager_directory(),
        }
    }
}

impl PipelineConfig {
    /// Load configuration: defaults, then `realty.toml` if present, then
    /// `REALTY_*` environment variables.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new("realty.toml"))
    }

    pub fn load_from(toml_path: &Path) -> Result<Self> {
        let config = Figment::from(Serialized::defaults(PipelineConfig::default()))
            .merge(Toml::file(toml_path))
            .merge(Env::prefixed("REALTY_").split("__"))
            .extract()?;
        Ok(config)
    }
}
