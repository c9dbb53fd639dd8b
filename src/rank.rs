use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::Candidate;
use crate::scoring::RankingEngine;

/// How word relevancy and recency are folded into one ranking key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Combine {
    /// `relevancy + recency`
    #[default]
    Additive,
    /// `(relevancy + max(recency, relevancy)) / 2`: recency can lift a score
    /// but never lower it.
    RecencyLift,
}

impl Combine {
    pub fn apply(self, relevancy: f64, recency: f64) -> f64 {
        match self {
            Combine::Additive => relevancy + recency,
            Combine::RecencyLift => (relevancy + recency.max(relevancy)) / 2.0,
        }
    }
}

/// A candidate with its scores after ranking
#[derive(Debug, Clone, Serialize)]
pub struct Ranked {
    pub score: f64,
    pub relevancy: f64,
    pub recency: f64,
    #[serde(flatten)]
    pub candidate: Candidate,
}

/// Filters `candidates` to those matching every term, scores them and sorts by
/// descending score. Equal scores keep their input order.
pub fn rank<T: AsRef<str>>(
    engine: &RankingEngine,
    terms: &[T],
    candidates: impl IntoIterator<Item = Candidate>,
    combine: Combine,
    now: DateTime<Utc>,
) -> Vec<Ranked> {
    let mut results: Vec<Ranked> = candidates
        .into_iter()
        .filter(|c| {
            let title = c.title.as_deref().unwrap_or_default();
            engine.matches(terms, &[c.url.as_str(), title])
        })
        .map(|candidate| {
            let relevancy = engine.word_relevancy(terms, &candidate.url, candidate.title());
            let recency = engine.recency_score_at(candidate.last_accessed, now);
            Ranked {
                score: combine.apply(relevancy, recency),
                relevancy,
                recency,
                candidate,
            }
        })
        .collect();

    log::debug!("Ranked {} matching candidates", results.len());

    // `sort_by` is stable, so ties stay in input order.
    results.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    results
}
