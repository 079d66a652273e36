//! Character-frequency statistics over catalog titles.
//!
//! Tallying is case-sensitive and counts every character, whitespace and
//! punctuation included. Ranking is by descending frequency; equal
//! frequencies keep the order in which the characters first appeared.

use super::item::Item;
use serde::Serialize;
use std::collections::HashMap;

/// Number of characters reported in [`StatsSnapshot::top_chars`].
pub const TOP_CHAR_COUNT: usize = 3;

/// A character and how many times it occurs across all titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CharFrequency {
    pub ch: char,
    pub count: usize,
}

/// Aggregate statistics for a catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatsSnapshot {
    /// Number of items the statistics were computed over.
    pub count: usize,
    /// At most [`TOP_CHAR_COUNT`] entries, most frequent first.
    pub top_chars: Vec<CharFrequency>,
}

/// Computes the item count and the most frequent title characters.
///
/// # Example
///
/// ```
/// use showcase::domain::catalog::Catalog;
/// use showcase::domain::stats::compute_stats;
///
/// let catalog = Catalog::from_entries(&[("Alpha", "", ""), ("Alpaca", "", "")], &[]);
/// let stats = compute_stats(catalog.items());
/// assert_eq!(stats.count, 2);
/// assert_eq!(stats.top_chars[0].ch, 'a');
/// assert_eq!(stats.top_chars[0].count, 3);
/// ```
#[must_use]
pub fn compute_stats(items: &[Item]) -> StatsSnapshot {
    let _span = tracing::debug_span!("compute_stats", item_count = items.len()).entered();

    let mut tally: Vec<CharFrequency> = Vec::new();
    let mut slots: HashMap<char, usize> = HashMap::new();

    for ch in items.iter().flat_map(|item| item.title.chars()) {
        match slots.get(&ch) {
            Some(&slot) => tally[slot].count += 1,
            None => {
                slots.insert(ch, tally.len());
                tally.push(CharFrequency { ch, count: 1 });
            }
        }
    }

    // sort_by is stable: ties stay in first-appearance order
    tally.sort_by(|a, b| b.count.cmp(&a.count));
    tally.truncate(TOP_CHAR_COUNT);

    tracing::debug!(distinct_top = tally.len(), "stats computed");

    StatsSnapshot {
        count: items.len(),
        top_chars: tally,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::Catalog;

    fn freq(ch: char, count: usize) -> CharFrequency {
        CharFrequency { ch, count }
    }

    #[test]
    fn test_empty_catalog() {
        let stats = compute_stats(&[]);
        assert_eq!(stats, StatsSnapshot::default());
    }

    #[test]
    fn test_alpha_alpaca() {
        let catalog = Catalog::from_entries(&[("Alpha", "x", "a"), ("Alpaca", "y", "b")], &[]);
        let stats = compute_stats(catalog.items());
        assert_eq!(stats.count, 2);
        assert_eq!(stats.top_chars, vec![freq('a', 3), freq('A', 2), freq('l', 2)]);
    }

    #[test]
    fn test_ties_keep_first_appearance_order() {
        let catalog = Catalog::from_entries(&[("zyx", "", ""), ("wxyz", "", "")], &[]);
        let stats = compute_stats(catalog.items());
        assert_eq!(stats.top_chars, vec![freq('z', 2), freq('y', 2), freq('x', 2)]);
    }

    #[test]
    fn test_fewer_than_three_distinct_chars() {
        let catalog = Catalog::from_entries(&[("aab", "", "")], &[]);
        let stats = compute_stats(catalog.items());
        assert_eq!(stats.top_chars, vec![freq('a', 2), freq('b', 1)]);
    }

    #[test]
    fn test_whitespace_is_counted() {
        let catalog = Catalog::from_entries(&[("a b c d", "", "")], &[]);
        let stats = compute_stats(catalog.items());
        assert_eq!(stats.top_chars[0], freq(' ', 3));
    }

    #[test]
    fn test_subtitles_are_ignored() {
        let catalog = Catalog::from_entries(&[("Q", "qqqqqq", "")], &[]);
        let stats = compute_stats(catalog.items());
        assert_eq!(stats.top_chars, vec![freq('Q', 1)]);
    }

    #[test]
    fn test_seed_catalog_is_sorted_and_bounded() {
        let catalog = Catalog::load();
        let stats = compute_stats(catalog.items());
        assert_eq!(stats.count, catalog.items().len());
        assert!(stats.top_chars.len() <= TOP_CHAR_COUNT);
        assert!(stats.top_chars.windows(2).all(|w| w[0].count >= w[1].count));
    }
}
