use super::{Anchor, RankingEngine};

/// Match quality of one term against one field.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TermScore {
    /// Sum of the match weights earned, in `[0, maximum_score]`.
    pub score: f64,
    /// Number of field characters covered by occurrences of the term.
    pub matched: usize,
}

impl RankingEngine {
    /// Scores a single term against a single field.
    ///
    /// Any occurrence earns `match_anywhere`; an occurrence at the start of a
    /// word adds `match_start_of_word`; a whole-word occurrence adds
    /// `match_whole_word` on top. Lengths are counted in characters.
    pub fn score_term(&self, term: &str, field: &str) -> TermScore {
        let Some(anywhere) = self.pattern(term, Anchor::Anywhere) else {
            return TermScore::default();
        };

        let mut occurrences = anywhere.find_iter(field).peekable();
        if occurrences.peek().is_none() {
            return TermScore::default();
        }

        // Equivalent to the field length minus whatever is left after
        // splitting the field on the pattern.
        let covered: usize = occurrences.map(|m| m.as_str().chars().count()).sum();
        let field_len = field.chars().count();

        let mut score = self.weights.match_anywhere;
        let starts_word = self
            .pattern(term, Anchor::StartOfWord)
            .is_some_and(|regex| regex.is_match(field));
        if starts_word {
            score += self.weights.match_start_of_word;
            let whole_word = self
                .pattern(term, Anchor::WholeWord)
                .is_some_and(|regex| regex.is_match(field));
            if whole_word {
                score += self.weights.match_whole_word;
            }
        }

        TermScore {
            score,
            matched: covered.min(field_len),
        }
    }
}
