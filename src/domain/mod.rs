pub mod auth;
pub mod codes;
pub mod error;
pub mod listing;
pub mod report;
