//! Relevancy ranking for history and bookmark completions.
//!
//! Candidates are pruned with [`RankingEngine::matches`], scored with
//! [`RankingEngine::word_relevancy`] and [`RankingEngine::recency_score`], and
//! combined and sorted by [`rank::rank`]. Compiled term patterns are memoized
//! per engine in a [`PatternCache`].

pub mod config;
pub mod error;
pub mod highlight;
pub mod input;
pub mod model;
pub mod pattern;
pub mod rank;
pub mod scoring;

pub use error::{Error, Result};
pub use model::{parse_query, Candidate, MatchWeights, MATCH_WEIGHTS};
pub use pattern::PatternCache;
pub use rank::{rank, Combine, Ranked};
pub use scoring::{normalize_difference, RankingEngine, TermScore};
