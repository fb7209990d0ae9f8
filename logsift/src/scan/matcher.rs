use serde::{Deserialize, Serialize};

/// How a line must relate to the query text to count as a match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// The line contains the query text as a substring.
    #[default]
    Contains,
    /// The line equals the query text exactly.
    Exact,
}

/// A search query, immutable for the duration of a run.
#[derive(Debug, Clone)]
pub struct Query {
    text: String,
    mode: MatchMode,
}

impl Query {
    pub fn new(text: impl Into<String>, mode: MatchMode) -> Self {
        Self {
            text: text.into(),
            mode,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Decides whether a line matches. Case-sensitive, no trimming or
    /// normalization in either mode.
    pub fn is_match(&self, line: &str) -> bool {
        match self.mode {
            MatchMode::Contains => line.contains(&self.text),
            MatchMode::Exact => line == self.text,
        }
    }
}
