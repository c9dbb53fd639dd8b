use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A completion candidate supplied by the caller (history entry or bookmark).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub url: String,
    #[serde(default)]
    pub title: Option<String>,
    pub last_accessed: DateTime<Utc>,
}

impl Candidate {
    pub fn new(url: impl Into<String>, title: Option<&str>, last_accessed: DateTime<Utc>) -> Self {
        Self {
            url: url.into(),
            title: title.map(str::to_string),
            last_accessed,
        }
    }

    /// Title if present and non-empty.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.is_empty())
    }
}

/// Weights of the match-quality signals.
///
/// The maximum score is always the sum of the three match weights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchWeights {
    pub match_anywhere: f64,
    pub match_start_of_word: f64,
    pub match_whole_word: f64,
    /// Scales recency into the same range as word relevancy.
    pub recency_calibrator: f64,
}

pub const MATCH_WEIGHTS: MatchWeights = MatchWeights {
    match_anywhere: 1.0,
    match_start_of_word: 1.0,
    match_whole_word: 1.0,
    recency_calibrator: 2.0 / 3.0,
};

impl MatchWeights {
    pub fn maximum_score(&self) -> f64 {
        self.match_anywhere + self.match_start_of_word + self.match_whole_word
    }
}

impl Default for MatchWeights {
    fn default() -> Self {
        MATCH_WEIGHTS
    }
}

/// Splits a raw query into terms on whitespace.
pub fn parse_query(raw: &str) -> Vec<String> {
    raw.split_whitespace().map(str::to_string).collect()
}
