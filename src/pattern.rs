//! Memoized, smartcase-aware regex compilation for query terms.
//!
//! Every keystroke rescores the whole candidate list, and each term is matched
//! against every candidate with up to three anchor variants. Compiling those
//! patterns dominates the cost, so they are built once per distinct key and
//! handed out as shared `Arc<Regex>` instances.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use regex::{Regex, RegexBuilder};

use crate::error::{Error, Result};

/// Word-boundary anchor used for start-of-word and whole-word variants.
pub const WORD_BOUNDARY: &str = r"\b";

/// Cache of compiled term patterns keyed by `prefix + escape(term) + suffix`.
///
/// `None` means the cache has not been initialised yet; [`PatternCache::get`]
/// initialises it on first use.
#[derive(Debug, Default)]
pub struct PatternCache {
    entries: RwLock<Option<HashMap<String, Arc<Regex>>>>,
}

impl PatternCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initialises the backing map. Calling it again is a no-op.
    pub fn init(&self) {
        let mut entries = self.entries.write();
        if entries.is_none() {
            *entries = Some(HashMap::new());
        }
    }

    /// Drops every cached pattern.
    pub fn clear(&self) {
        let mut entries = self.entries.write();
        if let Some(map) = entries.as_mut() {
            log::debug!("Clearing {} cached patterns", map.len());
            map.clear();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.read().as_ref().map_or(0, HashMap::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the pattern for `term`, anchored by the raw `prefix` and `suffix`.
    ///
    /// `term` is always matched literally. Matching is case-insensitive unless
    /// `term` itself contains an uppercase character. Repeated calls with the
    /// same arguments return the same `Arc`.
    pub fn get(&self, term: &str, prefix: &str, suffix: &str) -> Result<Arc<Regex>> {
        let escaped = escape(term);
        let key = if prefix.is_empty() && suffix.is_empty() {
            escaped
        } else {
            format!("{}{}{}", prefix, escaped, suffix)
        };

        if let Some(found) = self.entries.read().as_ref().and_then(|m| m.get(&key)) {
            return Ok(Arc::clone(found));
        }

        let mut entries = self.entries.write();
        let map = entries.get_or_insert_with(HashMap::new);
        // Another thread may have compiled the key between the two locks.
        if let Some(found) = map.get(&key) {
            return Ok(Arc::clone(found));
        }

        log::trace!("Compiling pattern {:?}", key);
        let regex = RegexBuilder::new(&key)
            .case_insensitive(!has_uppercase(term))
            .build()
            .map_err(|source| Error::Pattern {
                pattern: key.clone(),
                source,
            })?;
        let regex = Arc::new(regex);
        map.insert(key, Arc::clone(&regex));
        Ok(regex)
    }

    /// Unanchored pattern: matches the term anywhere.
    pub fn anywhere(&self, term: &str) -> Result<Arc<Regex>> {
        self.get(term, "", "")
    }

    /// Pattern matching the term only where it begins a word.
    pub fn start_of_word(&self, term: &str) -> Result<Arc<Regex>> {
        self.get(term, WORD_BOUNDARY, "")
    }

    /// Pattern matching the term only as a whole word.
    pub fn whole_word(&self, term: &str) -> Result<Arc<Regex>> {
        self.get(term, WORD_BOUNDARY, WORD_BOUNDARY)
    }
}

/// Escapes every regex metacharacter so `text` is matched literally.
pub fn escape(text: &str) -> String {
    regex::escape(text)
}

/// Smartcase trigger: true if any character of `text` is uppercase.
pub fn has_uppercase(text: &str) -> bool {
    text.chars().any(char::is_uppercase)
}
