use super::RankingEngine;

/// Scales a match count against the field length it was taken from.
///
/// `(max(a, b) - |a - b|) / max(a, b)`: 1.0 when the matches cover the whole
/// field, falling towards 0.0 as the field grows past the matched text. Two
/// zeros give 1.0 (nothing to match, nothing missed).
pub fn normalize_difference(count: usize, length: usize) -> f64 {
    let max = count.max(length);
    if max == 0 {
        return 1.0;
    }
    let max = max as f64;
    (max - count.abs_diff(length) as f64) / max
}

#[derive(Debug, Default)]
struct FieldTotals {
    score: f64,
    matched: usize,
}

impl RankingEngine {
    /// How well `terms` match a candidate's URL and title, in `[0, 1]`.
    ///
    /// Scores are normalised by the best achievable score and by how much of
    /// each field the matches cover. A title match is never dragged down by a
    /// poor URL match; without a title the URL alone decides.
    pub fn word_relevancy<T: AsRef<str>>(&self, terms: &[T], url: &str, title: Option<&str>) -> f64 {
        if terms.is_empty() {
            return 0.0;
        }
        let title = title.filter(|t| !t.is_empty());

        let mut url_totals = FieldTotals::default();
        let mut title_totals = FieldTotals::default();
        for term in terms {
            let s = self.score_term(term.as_ref(), url);
            url_totals.score += s.score;
            url_totals.matched += s.matched;
            if let Some(title) = title {
                let s = self.score_term(term.as_ref(), title);
                title_totals.score += s.score;
                title_totals.matched += s.matched;
            }
        }

        let maximum_possible = self.weights.maximum_score() * terms.len() as f64;
        let mut url_score = url_totals.score / maximum_possible
            * normalize_difference(url_totals.matched, url.chars().count());

        let title_score = match title {
            Some(title) => {
                title_totals.score / maximum_possible
                    * normalize_difference(title_totals.matched, title.chars().count())
            }
            None => url_score,
        };

        if url_score < title_score {
            url_score = title_score;
        }
        (url_score + title_score) / 2.0
    }
}
