use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

use crate::errors::{ScanError, ScanResult};

/// One matching line, tagged with the file it came from. Never mutated after
/// creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    /// Display tag identifying the originating file.
    pub source_label: String,
    /// The matching line, verbatim.
    pub line: String,
}

impl MatchRecord {
    pub fn new(source_label: impl Into<String>, line: impl Into<String>) -> Self {
        Self {
            source_label: source_label.into(),
            line: line.into(),
        }
    }

    /// Output form: `<label>: <line>`.
    pub fn render(&self) -> String {
        format!("{}: {}", self.source_label, self.line)
    }
}

/// All matches collected over a run, in file discovery order and line order
/// within each file. Duplicate lines across files are preserved.
#[derive(Debug, Clone, Default)]
pub struct ScanResults {
    /// The matched lines, append-only.
    pub records: Vec<MatchRecord>,
    /// Total number of files scanned.
    pub files_scanned: usize,
    /// Number of scanned files that produced at least one match.
    pub files_with_matches: usize,
}

impl ScanResults {
    /// Creates an empty result set
    pub fn new() -> Self {
        Default::default()
    }

    /// Appends one scanned file's matches, updating the counters.
    pub fn add_file_records(&mut self, records: Vec<MatchRecord>) {
        self.files_scanned += 1;
        if !records.is_empty() {
            self.files_with_matches += 1;
        }
        self.records.extend(records);
    }

    /// Total number of matching lines, for user-facing reporting.
    pub fn total_matches(&self) -> usize {
        self.records.len()
    }

    /// Renders all records newline-joined, with no trailing newline.
    pub fn render(&self) -> String {
        self.records
            .iter()
            .map(MatchRecord::render)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Writes the rendered results to `path`, replacing any existing file.
    /// The write goes through a temporary file in the destination directory
    /// and is persisted with a rename, so a failed run never leaves a
    /// half-written output behind.
    pub fn write_to(&self, path: &Path) -> ScanResult<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| ScanError::output_write(path, e))?;
        tmp.write_all(self.render().as_bytes())
            .map_err(|e| ScanError::output_write(path, e))?;
        tmp.persist(path)
            .map_err(|e| ScanError::output_write(path, e.error))?;
        Ok(())
    }
}
