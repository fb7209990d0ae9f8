use clap::Parser;
use colored::Colorize;
use logsift::config::{default_output_dir, default_output_file};
use logsift::{scan_to_file, MatchMode, ScanConfig, ScanError};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod prompt;

type Result<T> = std::result::Result<T, ScanError>;

/// Search compressed and plain-text log files for matching lines
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Root directory of the log corpus (prompted for if omitted)
    #[arg(short = 'd', long)]
    root: Option<PathBuf>,

    /// Text to search for (prompted for if omitted)
    #[arg(short, long)]
    query: Option<String>,

    /// Match mode: contain or exact
    #[arg(short, long, value_parser = parse_mode)]
    mode: Option<MatchMode>,

    /// Name of the output file
    #[arg(short, long)]
    output_file: Option<String>,

    /// Directory the output file is written into
    #[arg(short = 'O', long)]
    output_dir: Option<PathBuf>,

    /// Glob selecting compressed logs, relative to the root
    #[arg(long, default_value = "**/*.gz")]
    archive_pattern: String,

    /// Configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print only the match count
    #[arg(short, long)]
    stats: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn parse_mode(s: &str) -> std::result::Result<MatchMode, String> {
    match s.to_ascii_lowercase().as_str() {
        "contain" | "contains" => Ok(MatchMode::Contains),
        "exact" => Ok(MatchMode::Exact),
        other => Err(format!(
            "unknown mode '{other}', expected 'contain' or 'exact'"
        )),
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error occurred:".red(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Flags make the run fully scriptable; when the root or the query is
    // missing the session is interactive and everything else missing is
    // collected the same way.
    let interactive = cli.root.is_none() || cli.query.is_none();

    let root_path = match cli.root {
        Some(path) if path.is_dir() => path,
        Some(path) => return Err(ScanError::directory_not_found(path)),
        None => prompt::search_root()?,
    };
    let query = match cli.query {
        Some(query) => query,
        None => prompt::query_text()?,
    };
    let mode = match cli.mode {
        Some(mode) => mode,
        None if interactive => prompt::match_mode()?,
        None => MatchMode::default(),
    };
    let output_file = match cli.output_file {
        Some(name) => name,
        None if interactive => prompt::output_file()?,
        None => default_output_file(),
    };
    let output_dir = match cli.output_dir {
        Some(dir) => dir,
        None if interactive => prompt::output_dir()?,
        None => default_output_dir(),
    };

    let session_config = ScanConfig {
        query,
        mode,
        root_path,
        archive_pattern: cli.archive_pattern,
        output_dir,
        output_file,
        log_level: cli.log_level,
    };

    let config = match cli.config {
        Some(path) => ScanConfig::load_from(Some(&path))
            .map_err(|e| ScanError::config(e.to_string()))?
            .merge_with_cli(session_config),
        None => session_config,
    };

    println!("Searching for files in {}", config.root_path.display());
    let results = scan_to_file(&config)?;

    println!(
        "Found {} matching lines!",
        results.total_matches().to_string().green()
    );
    if !cli.stats {
        println!(
            "Matching lines written to {}.",
            config.output_path().display().to_string().blue()
        );
    }
    Ok(())
}
