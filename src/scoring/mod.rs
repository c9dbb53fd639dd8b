pub mod matcher;
pub mod recency;
pub mod relevancy;
pub mod term;

use std::sync::Arc;

use chrono::Duration;
use regex::Regex;

use crate::model::{MatchWeights, MATCH_WEIGHTS};
use crate::pattern::PatternCache;

pub use relevancy::normalize_difference;
pub use term::TermScore;

/// Days after which a candidate stops earning any recency score.
pub const DEFAULT_RECENCY_WINDOW_DAYS: i64 = 30;

/// Which variant of a term pattern to look up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Anchor {
    Anywhere,
    StartOfWord,
    WholeWord,
}

/// Scores candidates against query terms.
///
/// Owns its [`PatternCache`], so independent engines never share compiled
/// patterns and tests can reset state with [`RankingEngine::clear_cache`].
#[derive(Debug)]
pub struct RankingEngine {
    cache: PatternCache,
    weights: MatchWeights,
    recency_window: Duration,
}

impl Default for RankingEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RankingEngine {
    pub fn new() -> Self {
        Self {
            cache: PatternCache::new(),
            weights: MATCH_WEIGHTS,
            recency_window: Duration::days(DEFAULT_RECENCY_WINDOW_DAYS),
        }
    }

    pub fn with_recency_window(mut self, window: Duration) -> Self {
        self.recency_window = window;
        self
    }

    pub fn weights(&self) -> &MatchWeights {
        &self.weights
    }

    pub fn recency_window(&self) -> Duration {
        self.recency_window
    }

    pub fn cache(&self) -> &PatternCache {
        &self.cache
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Looks up a cached pattern. A pattern that fails to compile is logged
    /// and treated as matching nothing.
    fn pattern(&self, term: &str, anchor: Anchor) -> Option<Arc<Regex>> {
        let result = match anchor {
            Anchor::Anywhere => self.cache.anywhere(term),
            Anchor::StartOfWord => self.cache.start_of_word(term),
            Anchor::WholeWord => self.cache.whole_word(term),
        };
        match result {
            Ok(regex) => Some(regex),
            Err(e) => {
                log::warn!("Skipping term {:?}: {}", term, e);
                None
            }
        }
    }
}
