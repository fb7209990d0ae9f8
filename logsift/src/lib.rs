pub mod config;
pub mod errors;
pub mod results;
pub mod scan;

pub use config::ScanConfig;
pub use errors::{ScanError, ScanResult};
pub use results::{MatchRecord, ScanResults};
pub use scan::matcher::{MatchMode, Query};
pub use scan::{scan, scan_to_file};
