// ============================================================
// CSV INFRASTRUCTURE LAYER
// ============================================================
// CSV reading with encoding and delimiter detection

mod csv_parser;

pub use csv_parser::ListingCsvReader;
