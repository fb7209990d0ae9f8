use flate2::read::GzDecoder;
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::trace;

use super::matcher::Query;
use super::walker::LogSource;
use crate::errors::{ScanError, ScanResult};
use crate::results::MatchRecord;

const BUFFER_CAPACITY: usize = 65536;

/// Scans one log source at a time against a fixed query.
#[derive(Debug)]
pub struct FileScanner {
    query: Query,
}

impl FileScanner {
    pub fn new(query: Query) -> Self {
        Self { query }
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    /// Returns the source's matching lines, tagged with its label, in line
    /// order.
    pub fn scan(&self, source: &LogSource) -> ScanResult<Vec<MatchRecord>> {
        trace!("Scanning {}", source.path().display());
        match source {
            LogSource::Archive(path) => self.scan_archive(path, &source.label()),
            LogSource::Live(path) => self.scan_live(path, &source.label()),
        }
    }

    /// Streams an archive through a gzip decoder, matching line by line. The
    /// decompressed stream never has to fit in memory.
    fn scan_archive(&self, path: &Path, label: &str) -> ScanResult<Vec<MatchRecord>> {
        let file = open_file(path)?;
        let decoder = GzDecoder::new(BufReader::with_capacity(BUFFER_CAPACITY, file));
        let reader = BufReader::new(decoder);

        let mut records = Vec::new();
        for line in reader.lines() {
            // A truncated or corrupt archive surfaces here as a read error.
            let line = line.map_err(|e| ScanError::decompression(path, e))?;
            if self.query.is_match(&line) {
                records.push(MatchRecord::new(label, line));
            }
        }
        Ok(records)
    }

    /// Reads the live log whole and splits it on line boundaries; it is
    /// small and uncompressed, so no streaming is needed.
    fn scan_live(&self, path: &Path, label: &str) -> ScanResult<Vec<MatchRecord>> {
        let bytes = fs::read(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ScanError::file_not_found(path),
            std::io::ErrorKind::PermissionDenied => ScanError::permission_denied(path),
            _ => ScanError::Io(e),
        })?;
        let contents = String::from_utf8(bytes).map_err(|e| ScanError::encoding(path, e))?;

        Ok(contents
            .lines()
            .filter(|line| self.query.is_match(line))
            .map(|line| MatchRecord::new(label, line))
            .collect())
    }
}

fn open_file(path: &Path) -> ScanResult<File> {
    File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ScanError::file_not_found(path),
        std::io::ErrorKind::PermissionDenied => ScanError::permission_denied(path),
        _ => ScanError::Io(e),
    })
}
