use super::{Anchor, RankingEngine};

impl RankingEngine {
    /// Cheap pre-filter: true iff every term occurs in at least one field.
    ///
    /// No terms means everything matches.
    pub fn matches<T: AsRef<str>>(&self, terms: &[T], fields: &[&str]) -> bool {
        terms.iter().all(|term| {
            self.pattern(term.as_ref(), Anchor::Anywhere)
                .is_some_and(|regex| fields.iter().any(|field| regex.is_match(field)))
        })
    }
}
