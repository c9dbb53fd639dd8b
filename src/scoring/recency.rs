use chrono::{DateTime, Utc};

use super::RankingEngine;

impl RankingEngine {
    /// Recency of a last access relative to the current time.
    pub fn recency_score(&self, last_accessed: DateTime<Utc>) -> f64 {
        self.recency_score_at(last_accessed, Utc::now())
    }

    /// Cubic decay over the recency window, scaled by `recency_calibrator`.
    ///
    /// Returns the calibrator itself for an access at `now` (or in the future)
    /// and exactly 0.0 once the access is a full window old.
    pub fn recency_score_at(&self, last_accessed: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
        let window = self.recency_window.num_milliseconds() as f64;
        if window <= 0.0 {
            return 0.0;
        }
        let age = (now - last_accessed).num_milliseconds() as f64;
        let remaining = ((window - age).max(0.0) / window).clamp(0.0, 1.0);
        remaining.powi(3) * self.weights.recency_calibrator
    }
}
