pub mod area;
pub mod categories;
pub mod cleaner;
pub mod dates;
pub mod dedup;
pub mod permissions;
pub mod pipeline;
pub mod price;
