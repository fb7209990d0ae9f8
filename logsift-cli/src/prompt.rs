//! Interactive collection of scan parameters not supplied as flags.
//!
//! Each prompt re-asks on invalid input; directory prompts require the path
//! to exist before the core ever sees it. A closed stdin cancels the whole
//! session.

use colored::Colorize;
use logsift::MatchMode;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// Reads one trimmed line from stdin; a closed stream cancels the session.
fn read_line() -> io::Result<String> {
    let mut buf = String::new();
    let n = io::stdin().lock().read_line(&mut buf)?;
    if n == 0 {
        println!("Process cancelled.");
        std::process::exit(0);
    }
    Ok(buf.trim_end_matches(['\r', '\n']).to_string())
}

/// Asks until a non-empty answer arrives, or returns the default on an empty
/// answer when one exists.
fn ask(message: &str, default: Option<&str>) -> io::Result<String> {
    loop {
        match default {
            Some(d) => print!("{} [{}] ", message.cyan(), d),
            None => print!("{} ", message.cyan()),
        }
        io::stdout().flush()?;
        let answer = read_line()?;
        if !answer.is_empty() {
            return Ok(answer);
        }
        if let Some(d) = default {
            return Ok(d.to_string());
        }
    }
}

fn existing_dir(message: &str, default: Option<&Path>) -> io::Result<PathBuf> {
    loop {
        let default_str = default.map(|p| p.display().to_string());
        let path = PathBuf::from(ask(message, default_str.as_deref())?);
        if path.is_dir() {
            return Ok(path);
        }
        println!("{}", "Path does not exist".red());
    }
}

pub fn search_root() -> io::Result<PathBuf> {
    existing_dir("What folder do you want to search in?", None)
}

pub fn query_text() -> io::Result<String> {
    ask("What string do you want to search for?", None)
}

pub fn match_mode() -> io::Result<MatchMode> {
    println!(
        "{}",
        "Should the search string be an exact match or contain the search string?".cyan()
    );
    println!("  1) Contain");
    println!("  2) Exact match");
    loop {
        let answer = ask("Select:", Some("1"))?;
        match answer.trim() {
            "1" => return Ok(MatchMode::Contains),
            "2" => return Ok(MatchMode::Exact),
            _ => println!("{}", "Please enter 1 or 2".red()),
        }
    }
}

pub fn output_file() -> io::Result<String> {
    ask("What should the output file be called?", Some("output.txt"))
}

pub fn output_dir() -> io::Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    existing_dir("Where should the output file be saved?", Some(&cwd))
}
