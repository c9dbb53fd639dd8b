use std::ops::Range;

use crate::scoring::RankingEngine;

/// Byte ranges of `text` covered by any term, sorted and merged.
pub fn match_ranges<T: AsRef<str>>(engine: &RankingEngine, terms: &[T], text: &str) -> Vec<Range<usize>> {
    let mut ranges: Vec<Range<usize>> = Vec::new();
    for term in terms {
        let term = term.as_ref();
        if term.is_empty() {
            continue;
        }
        match engine.cache().anywhere(term) {
            Ok(regex) => ranges.extend(regex.find_iter(text).map(|m| m.range())),
            Err(e) => log::warn!("Not highlighting {:?}: {}", term, e),
        }
    }
    ranges.sort_by_key(|r| r.start);

    let mut merged: Vec<Range<usize>> = Vec::with_capacity(ranges.len());
    for range in ranges {
        match merged.last_mut() {
            Some(last) if range.start <= last.end => last.end = last.end.max(range.end),
            _ => merged.push(range),
        }
    }
    merged
}

/// Splits `text` into `(segment, is_match)` pieces covering it end to end.
pub fn segments<'a>(text: &'a str, ranges: &[Range<usize>]) -> Vec<(&'a str, bool)> {
    let mut pieces = Vec::new();
    let mut cursor = 0;
    for range in ranges {
        if range.start > cursor {
            pieces.push((&text[cursor..range.start], false));
        }
        pieces.push((&text[range.clone()], true));
        cursor = range.end;
    }
    if cursor < text.len() {
        pieces.push((&text[cursor..], false));
    }
    pieces
}
