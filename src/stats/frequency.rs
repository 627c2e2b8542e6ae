//! Online word-frequency table with ranked snapshots.

use std::collections::HashMap;

/// A ranked view of one table entry, derived at snapshot time.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedEntry {
    /// The word.
    pub token: String,
    /// Occurrences recorded so far.
    pub count: u64,
    /// `count / total` at snapshot time, in [0, 1].
    pub frequency: f64,
}

#[derive(Debug, Clone, Copy)]
struct Slot {
    count: u64,
    first_seen: u64,
}

/// Online multiset keyed by word.
///
/// Counts only grow and entries are never removed; the sum of all counts
/// equals the number of [`FrequencyTable::record`] calls. Cardinality is
/// unbounded, which is acceptable for the bounded alphabets this tool
/// visualizes.
#[derive(Debug, Default)]
pub struct FrequencyTable {
    slots: HashMap<String, Slot>,
    total: u64,
}

impl FrequencyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `token`. O(1) amortized.
    pub fn record(&mut self, token: String) {
        let first_seen = self.slots.len() as u64;
        let slot = self.slots.entry(token).or_insert(Slot {
            count: 0,
            first_seen,
        });
        slot.count += 1;
        self.total += 1;
    }

    /// Total tokens recorded.
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct tokens.
    pub fn distinct(&self) -> usize {
        self.slots.len()
    }

    /// The top `top_k` entries: descending count, ties broken by first
    /// sight (the earlier token ranks higher, which keeps output
    /// deterministic).
    ///
    /// Returns fewer entries when fewer distinct tokens exist and an
    /// empty vector when nothing has been recorded yet. O(n log n) over
    /// the distinct count; invoked only at render time.
    #[allow(clippy::cast_precision_loss)]
    pub fn snapshot(&self, top_k: usize) -> Vec<RankedEntry> {
        if self.total == 0 {
            return Vec::new();
        }

        let mut ranked: Vec<(&String, Slot)> =
            self.slots.iter().map(|(token, slot)| (token, *slot)).collect();
        ranked.sort_by(|a, b| {
            b.1.count
                .cmp(&a.1.count)
                .then(a.1.first_seen.cmp(&b.1.first_seen))
        });
        ranked.truncate(top_k);

        let total = self.total as f64;
        ranked
            .into_iter()
            .map(|(token, slot)| RankedEntry {
                token: token.clone(),
                count: slot.count,
                frequency: slot.count as f64 / total,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_all(table: &mut FrequencyTable, tokens: &[&str]) {
        for token in tokens {
            table.record((*token).to_string());
        }
    }

    #[test]
    fn test_counts_sum_to_record_calls() {
        let mut table = FrequencyTable::new();
        record_all(&mut table, &["a", "b", "a", "c", "a", "b"]);

        assert_eq!(table.total(), 6);
        assert_eq!(table.distinct(), 3);

        let sum: u64 = table.snapshot(usize::MAX).iter().map(|e| e.count).sum();
        assert_eq!(sum, 6);
    }

    #[test]
    fn test_snapshot_sorted_descending() {
        let mut table = FrequencyTable::new();
        record_all(&mut table, &["x", "y", "y", "z", "z", "z"]);

        let ranked = table.snapshot(3);
        let counts: Vec<u64> = ranked.iter().map(|e| e.count).collect();
        assert_eq!(counts, vec![3, 2, 1]);
        assert_eq!(ranked[0].token, "z");
    }

    #[test]
    fn test_ties_break_by_first_sight() {
        let mut table = FrequencyTable::new();
        record_all(&mut table, &["the", "quick", "brown", "fox"]);

        let ranked = table.snapshot(2);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].token, "the");
        assert_eq!(ranked[1].token, "quick");
    }

    #[test]
    fn test_top_k_exceeding_distinct_returns_all() {
        let mut table = FrequencyTable::new();
        record_all(&mut table, &["a", "b"]);

        let ranked = table.snapshot(10);
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn test_empty_table_snapshot_is_empty() {
        let table = FrequencyTable::new();
        assert!(table.snapshot(5).is_empty());
    }

    #[test]
    fn test_relative_frequencies() {
        let mut table = FrequencyTable::new();
        record_all(&mut table, &["a", "a", "b", "b"]);

        let ranked = table.snapshot(2);
        assert!((ranked[0].frequency - 0.5).abs() < f64::EPSILON);
        assert!((ranked[1].frequency - 0.5).abs() < f64::EPSILON);
    }
}
