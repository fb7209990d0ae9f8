use glob::Pattern;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::errors::{ScanError, ScanResult};

/// Name of the uncompressed live log expected at the corpus root.
pub const LIVE_LOG_NAME: &str = "latest.log";

/// A candidate file discovered under the corpus root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSource {
    /// A gzip-compressed, rotated log file.
    Archive(PathBuf),
    /// The plain-text live log at the corpus root.
    Live(PathBuf),
}

impl LogSource {
    pub fn path(&self) -> &Path {
        match self {
            LogSource::Archive(path) | LogSource::Live(path) => path,
        }
    }

    /// Display tag for matches from this source: the file's base name, or
    /// the literal `latest.log` for the live log.
    pub fn label(&self) -> String {
        match self {
            LogSource::Live(_) => LIVE_LOG_NAME.to_string(),
            LogSource::Archive(path) => path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
        }
    }
}

/// Enumerates the scan set: every file under `root` whose root-relative path
/// matches `archive_pattern`, in traversal order, followed by
/// `<root>/latest.log` when present. Traversal order is not sorted and
/// consumers must not assume it is.
pub fn discover(root: &Path, archive_pattern: &str) -> ScanResult<Vec<LogSource>> {
    if !root.is_dir() {
        return Err(ScanError::directory_not_found(root));
    }

    let pattern = Pattern::new(archive_pattern)
        .map_err(|e| ScanError::invalid_pattern(format!("{}: {}", archive_pattern, e)))?;

    let live = root.join(LIVE_LOG_NAME);

    let mut sources = Vec::new();
    let walker = WalkBuilder::new(root).standard_filters(false).build();
    for entry in walker.filter_map(|entry| entry.ok()) {
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        // The live log is appended separately; never scan it twice.
        if entry.path() == live {
            continue;
        }
        let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
        // Glob matching works on forward slashes regardless of platform.
        let normalized = relative.to_string_lossy().replace('\\', "/");
        if pattern.matches(&normalized) {
            sources.push(LogSource::Archive(entry.into_path()));
        }
    }

    if live.is_file() {
        sources.push(LogSource::Live(live));
    }

    debug!(
        "Discovered {} log sources under {}",
        sources.len(),
        root.display()
    );
    Ok(sources)
}
