//! Wire types exchanged with the search backend.

use serde::{Deserialize, Serialize};

/// Body of `POST /search`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchRequest<'a> {
    pub query: &'a str,
}

/// One candidate with its similarity score in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub text: String,
    pub score: f64,
}

/// Successful backend response. Extra fields (the backend echoes `query`) are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub best_match: String,
    pub score: f64,
    /// Ordered candidates; the first one normally repeats `best_match`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_matches: Option<Vec<Match>>,
}

impl SearchResult {
    /// Secondary matches: every top match except the first, or nothing when
    /// there is at most one.
    pub fn other_matches(&self) -> &[Match] {
        match self.top_matches.as_deref() {
            Some(matches) if matches.len() > 1 => &matches[1..],
            _ => &[],
        }
    }
}

/// Format a score as a percentage with one decimal place, e.g. `0.873` -> `"87.3%"`.
///
/// Ties round away from zero.
pub fn format_percent(score: f64) -> String {
    let tenths = (score * 1000.0).round();
    format!("{:.1}%", tenths / 10.0)
}
