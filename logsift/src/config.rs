use config::{Config as ConfigBuilder, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::scan::matcher::MatchMode;

/// Configuration for one scan run.
///
/// Values can be loaded from YAML files, in order of precedence:
/// 1. A custom config file passed via `--config`
/// 2. A local `.logsift.yaml` in the current directory
/// 3. A global `$CONFIG_DIR/logsift/config.yaml`
///
/// Example:
/// ```yaml
/// query: "connection reset"
/// mode: contains
/// root_path: "/var/log/app"
/// archive_pattern: "**/*.gz"
/// output_dir: "."
/// output_file: "output.txt"
/// log_level: "warn"
/// ```
///
/// Values supplied on the command line or collected interactively take
/// precedence; the merging behavior is defined in `merge_with_cli`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// The text to search for.
    #[serde(default)]
    pub query: String,

    /// Whether a line must contain or exactly equal the query.
    #[serde(default)]
    pub mode: MatchMode,

    /// Root directory of the log corpus.
    pub root_path: PathBuf,

    /// Glob selecting compressed logs, matched against paths relative to the
    /// root.
    #[serde(default = "default_archive_pattern")]
    pub archive_pattern: String,

    /// Directory the output file is written into.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Name of the output file.
    #[serde(default = "default_output_file")]
    pub output_file: String,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

pub fn default_archive_pattern() -> String {
    "**/*.gz".to_string()
}

pub fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

pub fn default_output_file() -> String {
    "output.txt".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl ScanConfig {
    /// Loads configuration from the default locations
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Loads configuration from a specific file, layered over the defaults
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        let config_files = [
            // Global config
            dirs::config_dir().map(|p| p.join("logsift/config.yaml")),
            // Local config
            Some(PathBuf::from(".logsift.yaml")),
            // Custom config
            config_path.map(PathBuf::from),
        ];

        for path in config_files.iter().flatten() {
            if path.exists() {
                builder = builder.add_source(File::from(path.as_path()));
            }
        }

        builder.build()?.try_deserialize()
    }

    /// Merges session values (CLI flags or interactive answers) with
    /// configuration file values; session values take precedence.
    pub fn merge_with_cli(mut self, cli_config: ScanConfig) -> Self {
        if !cli_config.query.is_empty() {
            self.query = cli_config.query;
        }
        // The mode always comes from the session; the prompt asks for it
        // whenever it was not given as a flag.
        self.mode = cli_config.mode;
        if cli_config.root_path != PathBuf::from(".") {
            self.root_path = cli_config.root_path;
        }
        if cli_config.archive_pattern != default_archive_pattern() {
            self.archive_pattern = cli_config.archive_pattern;
        }
        if cli_config.output_dir != default_output_dir() {
            self.output_dir = cli_config.output_dir;
        }
        if cli_config.output_file != default_output_file() {
            self.output_file = cli_config.output_file;
        }
        if cli_config.log_level != default_log_level() {
            self.log_level = cli_config.log_level;
        }
        self
    }

    /// Full path of the output file.
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.output_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_load_config_file() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.yaml");
        let config_content = r#"
            query: "connection reset"
            mode: exact
            root_path: "/var/log/app"
            archive_pattern: "**/*.log.gz"
            output_dir: "/tmp"
            output_file: "matches.txt"
            log_level: "debug"
        "#;

        let mut file = File::create(&config_path).unwrap();
        file.write_all(config_content.as_bytes()).unwrap();

        let config = ScanConfig::load_from(Some(&config_path)).unwrap();
        assert_eq!(config.query, "connection reset");
        assert_eq!(config.mode, MatchMode::Exact);
        assert_eq!(config.root_path, PathBuf::from("/var/log/app"));
        assert_eq!(config.archive_pattern, "**/*.log.gz");
        assert_eq!(config.output_dir, PathBuf::from("/tmp"));
        assert_eq!(config.output_file, "matches.txt");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_default_values() {
        let config_content = r#"
            root_path: "."
        "#;

        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.yaml");
        let mut file = File::create(&config_path).unwrap();
        file.write_all(config_content.as_bytes()).unwrap();

        let config = ScanConfig::load_from(Some(&config_path)).unwrap();
        assert_eq!(config.query, "");
        assert_eq!(config.mode, MatchMode::Contains);
        assert_eq!(config.archive_pattern, "**/*.gz");
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert_eq!(config.output_file, "output.txt");
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_merge_with_cli() {
        let config_file = ScanConfig {
            query: "timeout".to_string(),
            mode: MatchMode::Contains,
            root_path: PathBuf::from("/var/log/app"),
            archive_pattern: default_archive_pattern(),
            output_dir: PathBuf::from("/tmp"),
            output_file: default_output_file(),
            log_level: "warn".to_string(),
        };

        let cli_config = ScanConfig {
            query: "connection reset".to_string(),
            mode: MatchMode::Exact,
            root_path: PathBuf::from("."),
            archive_pattern: default_archive_pattern(),
            output_dir: default_output_dir(),
            output_file: "matches.txt".to_string(),
            log_level: "debug".to_string(),
        };

        let merged = config_file.merge_with_cli(cli_config);
        assert_eq!(merged.query, "connection reset"); // CLI value
        assert_eq!(merged.mode, MatchMode::Exact); // CLI value
        assert_eq!(merged.root_path, PathBuf::from("/var/log/app")); // File value (CLI ".")
        assert_eq!(merged.output_dir, PathBuf::from("/tmp")); // File value (CLI default)
        assert_eq!(merged.output_file, "matches.txt"); // CLI value
        assert_eq!(merged.log_level, "debug"); // CLI value
    }

    #[test]
    fn test_output_path() {
        let config = ScanConfig {
            query: String::new(),
            mode: MatchMode::Contains,
            root_path: PathBuf::from("."),
            archive_pattern: default_archive_pattern(),
            output_dir: PathBuf::from("/tmp/results"),
            output_file: "output.txt".to_string(),
            log_level: "warn".to_string(),
        };
        assert_eq!(
            config.output_path(),
            PathBuf::from("/tmp/results/output.txt")
        );
    }

    #[test]
    fn test_invalid_config() {
        let config_content = r#"
            query: [1, 2]  # Should be string
            root_path: {}  # Should be string
        "#;

        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.yaml");
        let mut file = File::create(&config_path).unwrap();
        file.write_all(config_content.as_bytes()).unwrap();

        let result = ScanConfig::load_from(Some(&config_path));
        assert!(result.is_err(), "Expected error loading invalid config");
    }

    #[test]
    fn test_unknown_mode_rejected() {
        let config_content = r#"
            root_path: "."
            mode: fuzzy
        "#;

        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.yaml");
        let mut file = File::create(&config_path).unwrap();
        file.write_all(config_content.as_bytes()).unwrap();

        assert!(ScanConfig::load_from(Some(&config_path)).is_err());
    }
}
