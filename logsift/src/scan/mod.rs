//! The scan pipeline: corpus discovery, per-file decompression and line
//! matching, and result aggregation. Files are processed one at a time, in
//! discovery order, each to completion before the next begins.

pub mod engine;
pub mod matcher;
pub mod scanner;
pub mod walker;

pub use engine::{scan, scan_to_file};
pub use matcher::{MatchMode, Query};
pub use scanner::FileScanner;
pub use walker::{discover, LogSource};
