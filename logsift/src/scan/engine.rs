use tracing::{debug, info};

use super::matcher::Query;
use super::scanner::FileScanner;
use super::walker::discover;
use crate::config::ScanConfig;
use crate::errors::ScanResult;
use crate::results::ScanResults;

/// Runs one linear pass over the corpus: discover the scan set, scan each
/// source to completion in discovery order, aggregate the matches.
///
/// A decompression failure on any file aborts the run; partial results are
/// never reported as complete.
pub fn scan(config: &ScanConfig) -> ScanResult<ScanResults> {
    info!(
        "Searching under {} for {:?} ({:?})",
        config.root_path.display(),
        config.query,
        config.mode
    );

    let sources = discover(&config.root_path, &config.archive_pattern)?;
    debug!("Scanning {} files", sources.len());

    let query = Query::new(config.query.clone(), config.mode);
    let scanner = FileScanner::new(query);

    let mut results = ScanResults::new();
    for source in &sources {
        let records = scanner.scan(source)?;
        results.add_file_records(records);
    }

    info!(
        "Scan complete. Found {} matching lines in {} of {} files",
        results.total_matches(),
        results.files_with_matches,
        results.files_scanned
    );
    Ok(results)
}

/// Runs the scan and writes the rendered results to the configured output
/// path, overwriting any existing file.
pub fn scan_to_file(config: &ScanConfig) -> ScanResult<ScanResults> {
    let results = scan(config)?;
    results.write_to(&config.output_path())?;
    Ok(results)
}
