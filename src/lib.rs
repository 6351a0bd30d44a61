pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::use_cases::permissions::{authorized_menu, can_perform, has_permission};
pub use application::CleaningPipeline;
pub use domain::auth::{Action, MenuItem, Permission, PropertyAccess, Role, User};
pub use domain::codes::{PropertyStatus, PropertyType, TransactionType};
pub use domain::error::{AppError, Result};
pub use domain::listing::{CleanedProperty, RawListing};
pub use domain::report::PipelineReport;
pub use infrastructure::config::PipelineConfig;
pub use infrastructure::reports::ReportWriter;
