pub mod hashing;
pub mod listing;
pub mod matcher;
pub mod names;
pub mod report;
pub mod table;

pub use crate::hashing::compute_hash;
pub use crate::listing::{load_listing, parse_listing_bytes, ListingError};
pub use crate::matcher::{match_operands, scan_records, MatchRecord, OperandRecord};
pub use crate::names::{load_api_names, parse_names_bytes};
pub use crate::report::MatchReport;
pub use crate::table::NameTable;
