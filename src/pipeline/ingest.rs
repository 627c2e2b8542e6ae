//! Ingest Actor: dedicated thread advancing the byte source.
//!
//! This is the pipeline's single writer: it reads chunks from the
//! source, feeds the tokenizer, and applies the results to the shared
//! aggregate under one brief lock per chunk. Ingestion never waits on
//! the render path.

use super::messages::StatsEvent;
use crate::source::ByteSource;
use crate::stats::{SharedStats, Tokenizer};
use crossbeam_channel::Sender;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// Ingest actor that drives source and tokenizer.
pub struct IngestActor {
    /// Handle to the ingest thread.
    handle: Option<JoinHandle<()>>,
    /// Flag to signal shutdown.
    shutdown: Arc<AtomicBool>,
}

impl IngestActor {
    /// Spawn the ingest thread.
    ///
    /// The thread owns the source and tokenizer outright; the shared
    /// aggregate is the only state it publishes.
    #[allow(clippy::missing_panics_doc)]
    pub fn spawn(
        mut source: Box<dyn ByteSource>,
        mut tokenizer: Tokenizer,
        stats: SharedStats,
        events: Sender<StatsEvent>,
    ) -> Self {
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();

        let handle = thread::Builder::new()
            .name("wordwheel-ingest".to_string())
            .spawn(move || {
                Self::run_loop(
                    source.as_mut(),
                    &mut tokenizer,
                    &stats,
                    &events,
                    &shutdown_clone,
                );
            })
            .expect("Failed to spawn ingest thread");

        Self {
            handle: Some(handle),
            shutdown,
        }
    }

    /// Signal the ingest thread to shutdown.
    ///
    /// The thread notices after the in-flight `next_chunk` returns; a
    /// source blocked on a quiet reader may keep it parked until then.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    /// Wait for the ingest thread to finish.
    pub fn join(mut self) {
        self.shutdown();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// Main ingest loop.
    fn run_loop(
        source: &mut dyn ByteSource,
        tokenizer: &mut Tokenizer,
        stats: &SharedStats,
        events: &Sender<StatsEvent>,
        shutdown: &Arc<AtomicBool>,
    ) {
        loop {
            if shutdown.load(Ordering::Relaxed) {
                break;
            }

            match source.next_chunk() {
                Ok(Some(chunk)) => {
                    let tokens: Vec<String> = tokenizer.feed(&chunk).collect();
                    let produced = !tokens.is_empty();
                    let units: Vec<char> = String::from_utf8_lossy(&chunk).chars().collect();
                    stats.apply(chunk.len(), units, tokens);

                    if produced {
                        // Droppable: a busy engine misses nothing, the
                        // next snapshot carries the state anyway.
                        let _ = events.try_send(StatsEvent::Progress);
                    }
                }
                Ok(None) => {
                    // A trailing partial word still counts at EOF.
                    if let Some(token) = tokenizer.flush() {
                        stats.apply(0, std::iter::empty(), vec![token]);
                    }
                    tracing::info!("byte source exhausted, shutting down");
                    let _ = events.send(StatsEvent::Exhausted);
                    break;
                }
                Err(e) => {
                    tracing::warn!("byte source failed: {e}");
                    let _ = events.send(StatsEvent::SourceError(e.to_string()));
                    break;
                }
            }
        }
    }
}

impl Drop for IngestActor {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::bounded;
    use std::collections::VecDeque;
    use std::time::Duration;

    /// Finite source replaying scripted chunks.
    struct ScriptedSource {
        chunks: VecDeque<Vec<u8>>,
    }

    impl ScriptedSource {
        fn new(chunks: &[&[u8]]) -> Self {
            Self {
                chunks: chunks.iter().map(|c| c.to_vec()).collect(),
            }
        }
    }

    impl ByteSource for ScriptedSource {
        fn next_chunk(&mut self) -> std::io::Result<Option<Vec<u8>>> {
            Ok(self.chunks.pop_front())
        }
    }

    /// Source that fails on the first read.
    struct FailingSource;

    impl ByteSource for FailingSource {
        fn next_chunk(&mut self) -> std::io::Result<Option<Vec<u8>>> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "boom"))
        }
    }

    #[test]
    fn test_finite_source_aggregates_then_exhausts() {
        let stats = SharedStats::new(32);
        let (events_tx, events_rx) = bounded(8);
        let source = ScriptedSource::new(&[b"the quick ", b"brown fox"]);

        let actor = IngestActor::spawn(
            Box::new(source),
            Tokenizer::new(b' ', 16),
            stats.clone(),
            events_tx,
        );

        // Drain until exhaustion; progress events may have been dropped.
        loop {
            match events_rx.recv_timeout(Duration::from_secs(2)) {
                Ok(StatsEvent::Exhausted) => break,
                Ok(_) => {}
                Err(e) => panic!("ingest never exhausted: {e}"),
            }
        }
        actor.join();

        let snapshot = stats.snapshot(10);
        assert_eq!(snapshot.counters.bytes, 19);
        // "fox" is flushed as a trailing word at EOF.
        assert_eq!(snapshot.counters.tokens, 4);
        assert_eq!(snapshot.distinct, 4);
        assert_eq!(snapshot.ranked[0].token, "the");
    }

    #[test]
    fn test_source_error_is_reported() {
        let stats = SharedStats::new(8);
        let (events_tx, events_rx) = bounded(8);

        let actor = IngestActor::spawn(
            Box::new(FailingSource),
            Tokenizer::new(b' ', 8),
            stats,
            events_tx,
        );

        let event = events_rx.recv_timeout(Duration::from_secs(2)).unwrap();
        assert!(matches!(event, StatsEvent::SourceError(msg) if msg.contains("boom")));
        actor.join();
    }

    #[test]
    fn test_shutdown_stops_an_endless_source() {
        struct Endless;
        impl ByteSource for Endless {
            fn next_chunk(&mut self) -> std::io::Result<Option<Vec<u8>>> {
                std::thread::sleep(Duration::from_millis(1));
                Ok(Some(b"ab ".to_vec()))
            }
        }

        let stats = SharedStats::new(8);
        let (events_tx, _events_rx) = bounded(8);
        let actor = IngestActor::spawn(
            Box::new(Endless),
            Tokenizer::new(b' ', 8),
            stats.clone(),
            events_tx,
        );

        std::thread::sleep(Duration::from_millis(20));
        actor.join();

        assert!(stats.snapshot(1).counters.tokens > 0);
    }
}
