//! Aggregation core: tokenizer, frequency table, sliding window, and
//! the shared-state handoff between the ingest and render paths.
//!
//! Ownership follows a single-writer discipline: the ingest actor is
//! the only mutator, and the render path reads owned snapshots copied
//! out under a brief lock. Neither side ever waits on the other beyond
//! that lock.

mod frequency;
mod tokenizer;
mod window;

pub use frequency::{FrequencyTable, RankedEntry};
pub use tokenizer::{Tokenizer, Tokens};
pub use window::SlidingWindow;

use std::sync::{Arc, Mutex, MutexGuard};

/// Monotonic per-process ingest counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counters {
    /// Raw bytes observed.
    pub bytes: u64,
    /// Tokens recorded.
    pub tokens: u64,
}

/// The mutable aggregation state behind [`SharedStats`].
#[derive(Debug)]
struct Aggregate {
    table: FrequencyTable,
    window: SlidingWindow,
    counters: Counters,
}

/// Owned copy of everything the frame builder needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSnapshot {
    /// Sliding window, oldest to newest.
    pub window: String,
    /// Ranked entries, most frequent first.
    pub ranked: Vec<RankedEntry>,
    /// Ingest counters at snapshot time.
    pub counters: Counters,
    /// Distinct tokens at snapshot time.
    pub distinct: usize,
}

/// Cloneable handle to the aggregate, shared between ingest and render.
#[derive(Debug, Clone)]
pub struct SharedStats {
    inner: Arc<Mutex<Aggregate>>,
}

impl SharedStats {
    /// Create a fresh aggregate with the given window capacity.
    pub fn new(window_capacity: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Aggregate {
                table: FrequencyTable::new(),
                window: SlidingWindow::new(window_capacity),
                counters: Counters::default(),
            })),
        }
    }

    /// Apply one ingested chunk: raw units into the window, completed
    /// tokens into the table, counters advanced. One lock per chunk.
    pub fn apply(
        &self,
        chunk_len: usize,
        units: impl IntoIterator<Item = char>,
        tokens: Vec<String>,
    ) {
        let mut state = self.lock();
        state.counters.bytes += chunk_len as u64;
        for unit in units {
            // Control characters would corrupt the single-line window.
            state.window.push(if unit.is_control() { ' ' } else { unit });
        }
        state.counters.tokens += tokens.len() as u64;
        for token in tokens {
            state.table.record(token);
        }
    }

    /// Copy out an owned snapshot for frame building.
    pub fn snapshot(&self, top_k: usize) -> FrameSnapshot {
        let state = self.lock();
        FrameSnapshot {
            window: state.window.contents().collect(),
            ranked: state.table.snapshot(top_k),
            counters: state.counters,
            distinct: state.table.distinct(),
        }
    }

    /// Track a terminal width change.
    pub fn set_window_capacity(&self, capacity: usize) {
        self.lock().window.set_capacity(capacity);
    }

    fn lock(&self) -> MutexGuard<'_, Aggregate> {
        self.inner.lock().expect("stats lock poisoned")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_advances_counters_and_table() {
        let stats = SharedStats::new(10);
        stats.apply(
            9,
            "the fox t".chars(),
            vec!["the".to_string(), "fox".to_string()],
        );

        let snapshot = stats.snapshot(10);
        assert_eq!(snapshot.counters.bytes, 9);
        assert_eq!(snapshot.counters.tokens, 2);
        assert_eq!(snapshot.distinct, 2);
        assert_eq!(snapshot.window, "the fox t");
    }

    #[test]
    fn test_control_characters_become_spaces_in_window() {
        let stats = SharedStats::new(10);
        stats.apply(3, "a\nb".chars(), Vec::new());

        let snapshot = stats.snapshot(10);
        assert_eq!(snapshot.window, "a b");
    }

    #[test]
    fn test_window_capacity_tracks_resize() {
        let stats = SharedStats::new(8);
        stats.apply(8, "abcdefgh".chars(), Vec::new());
        stats.set_window_capacity(4);

        let snapshot = stats.snapshot(10);
        assert_eq!(snapshot.window, "efgh");
    }

    #[test]
    fn test_snapshot_is_owned_and_stable() {
        let stats = SharedStats::new(8);
        stats.apply(4, "a b ".chars(), vec!["a".to_string(), "b".to_string()]);

        let before = stats.snapshot(10);
        stats.apply(2, "c ".chars(), vec!["c".to_string()]);

        // The earlier snapshot is unaffected by later mutation.
        assert_eq!(before.counters.tokens, 2);
        assert_eq!(before.ranked.len(), 2);
    }
}
